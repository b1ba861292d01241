//! # ヘルスチェックハンドラ
//!
//! `/health` は Liveness Check。上流 API の状態は確認せず、常に `"healthy"` を返す。

use axum::Json;
use feedrelay_shared::HealthResponse;

/// BFF のヘルスチェックエンドポイント
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
