//! # 投稿 API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /posts` - 投稿一覧
//! - `GET /posts/{id}` - 投稿詳細
//! - `POST /posts` - 投稿作成（201 + `Location: posts/{id}`）
//! - `DELETE /posts/{id}` - 投稿削除（200、ボディなし）

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use feedrelay_domain::PostRecord;
use feedrelay_shared::ErrorResponse;
use tokio_util::sync::CancellationToken;

use crate::{
    error::{application_error_response, bad_gateway_response, not_found_response},
    usecase::PostsService,
};

/// 投稿 API の共有状態
pub struct PostState {
    pub posts_service: Arc<dyn PostsService>,
    /// サーバー停止時に発火するトークン。リクエストごとに子トークンを派生させる
    pub shutdown:      CancellationToken,
}

/// GET /posts
#[utoipa::path(
   get,
   path = "/posts",
   tag = "posts",
   responses(
      (status = 200, description = "投稿一覧", body = Vec<PostRecord>),
      (status = 500, description = "上流呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_posts(State(state): State<Arc<PostState>>) -> Result<Response, Response> {
    let cancel = state.shutdown.child_token();

    let posts = state
        .posts_service
        .get_all_posts(&cancel)
        .await
        .map_err(|e| application_error_response(&e))?;

    Ok((StatusCode::OK, Json(&*posts)).into_response())
}

/// GET /posts/{id}
#[utoipa::path(
   get,
   path = "/posts/{id}",
   tag = "posts",
   params(("id" = i32, Path, description = "投稿 ID")),
   responses(
      (status = 200, description = "投稿詳細", body = PostRecord),
      (status = 404, description = "投稿が見つからない", body = ErrorResponse),
      (status = 500, description = "上流呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_post(
    State(state): State<Arc<PostState>>,
    Path(id): Path<i32>,
) -> Result<Response, Response> {
    let cancel = state.shutdown.child_token();

    let post = state
        .posts_service
        .get_post_by_id(id, &cancel)
        .await
        .map_err(|e| application_error_response(&e))?
        .ok_or_else(|| not_found_response(&format!("投稿 {id} が見つかりません")))?;

    Ok((StatusCode::OK, Json(post)).into_response())
}

/// POST /posts
///
/// 上流が返した作成結果をそのまま返す。`Location` は相対パス `posts/{id}`。
#[utoipa::path(
   post,
   path = "/posts",
   tag = "posts",
   request_body = PostRecord,
   responses(
      (status = 201, description = "投稿作成成功", body = PostRecord),
      (status = 500, description = "上流呼び出しの失敗", body = ErrorResponse),
      (status = 502, description = "上流が作成結果を返さなかった", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(title = %req.title))]
pub async fn create_post(
    State(state): State<Arc<PostState>>,
    Json(req): Json<PostRecord>,
) -> Result<Response, Response> {
    let cancel = state.shutdown.child_token();

    let created = state
        .posts_service
        .create_post(&req, &cancel)
        .await
        .map_err(|e| application_error_response(&e))?
        .ok_or_else(|| bad_gateway_response("上流 API が作成した投稿を返しませんでした"))?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("posts/{}", created.id))],
        Json(created),
    )
        .into_response())
}

/// DELETE /posts/{id}
#[utoipa::path(
   delete,
   path = "/posts/{id}",
   tag = "posts",
   params(("id" = i32, Path, description = "投稿 ID")),
   responses(
      (status = 200, description = "投稿削除成功"),
      (status = 500, description = "上流呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_post(
    State(state): State<Arc<PostState>>,
    Path(id): Path<i32>,
) -> Result<Response, Response> {
    let cancel = state.shutdown.child_token();

    state
        .posts_service
        .delete_post_by_id(id, &cancel)
        .await
        .map_err(|e| application_error_response(&e))?;

    Ok(StatusCode::OK.into_response())
}
