//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! BFF が返すエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は BFF の責務（shared に axum 依存を入れない）
//! - 上流 API のステータスコードをそのまま反映する場合は [`ErrorResponse::upstream`] を使う

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://feedrelay.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    ///
    /// `error_type_suffix` はベース URI に付加される（例: `"not-found"`）。
    pub fn new(
        error_type_suffix: &str,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            detail: detail.into(),
        }
    }

    /// 上流 API 呼び出しの失敗
    ///
    /// ステータスコードは上流（または呼び出し例外時の 500）をそのまま使う。
    /// `title` には HTTP の標準理由句を渡す。
    pub fn upstream(status: u16, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new("upstream-error", title, status, detail)
    }

    /// 404 Not Found
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("not-found", "Not Found", 404, detail)
    }

    /// 502 Bad Gateway
    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self::new("bad-gateway", "Bad Gateway", 502, detail)
    }
}
