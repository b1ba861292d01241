//! # Todo API ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /todos` - Todo 一覧
//! - `GET /todos/{id}` - Todo 詳細

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feedrelay_domain::TodoRecord;
use feedrelay_shared::ErrorResponse;
use tokio_util::sync::CancellationToken;

use crate::{
    error::{application_error_response, not_found_response},
    usecase::TodoService,
};

/// Todo API の共有状態
pub struct TodoState {
    pub todo_service: Arc<dyn TodoService>,
    /// サーバー停止時に発火するトークン。リクエストごとに子トークンを派生させる
    pub shutdown:     CancellationToken,
}

/// GET /todos
#[utoipa::path(
   get,
   path = "/todos",
   tag = "todos",
   responses(
      (status = 200, description = "Todo 一覧", body = Vec<TodoRecord>),
      (status = 500, description = "上流呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_todos(State(state): State<Arc<TodoState>>) -> Result<Response, Response> {
    let cancel = state.shutdown.child_token();

    let todos = state
        .todo_service
        .get_all_todos(&cancel)
        .await
        .map_err(|e| application_error_response(&e))?;

    Ok((StatusCode::OK, Json(&*todos)).into_response())
}

/// GET /todos/{id}
#[utoipa::path(
   get,
   path = "/todos/{id}",
   tag = "todos",
   params(("id" = i32, Path, description = "Todo ID")),
   responses(
      (status = 200, description = "Todo 詳細", body = TodoRecord),
      (status = 404, description = "Todo が見つからない", body = ErrorResponse),
      (status = 500, description = "上流呼び出しの失敗", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
) -> Result<Response, Response> {
    let cancel = state.shutdown.child_token();

    let todo = state
        .todo_service
        .get_todo_by_id(id, &cancel)
        .await
        .map_err(|e| application_error_response(&e))?
        .ok_or_else(|| not_found_response(&format!("Todo {id} が見つかりません")))?;

    Ok((StatusCode::OK, Json(todo)).into_response())
}
