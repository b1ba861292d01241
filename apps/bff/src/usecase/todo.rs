//! Todo サービス
//!
//! 上流の `todos` / `todos/{id}` を呼び出す。

use std::sync::Arc;

use async_trait::async_trait;
use feedrelay_domain::{AppResult, TodoRecord};
use feedrelay_infra::HttpClientWrapper;
use tokio_util::sync::CancellationToken;

/// Todo の取得
#[async_trait]
pub trait TodoService: Send + Sync {
    /// ID を指定して Todo を取得する
    ///
    /// 上流が成功しつつ空のボディを返した場合は `Ok(None)`。
    async fn get_todo_by_id(
        &self,
        id: i32,
        cancel: &CancellationToken,
    ) -> AppResult<Option<TodoRecord>>;

    /// Todo をすべて取得する
    ///
    /// 上流が空のボディを返した場合は空のコレクションになる。
    async fn get_all_todos(&self, cancel: &CancellationToken) -> AppResult<Arc<[TodoRecord]>>;
}

/// [`TodoService`] の実装
pub struct TodoServiceImpl<C> {
    client: Arc<C>,
}

impl<C: HttpClientWrapper> TodoServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: HttpClientWrapper> TodoService for TodoServiceImpl<C> {
    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn get_todo_by_id(
        &self,
        id: i32,
        cancel: &CancellationToken,
    ) -> AppResult<Option<TodoRecord>> {
        self.client
            .get::<TodoRecord>(&format!("todos/{id}"), cancel)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "upstream",
                    service = "TodoService",
                    method = "get_todo_by_id",
                    id,
                    description = e.description(),
                    status_code = e.status_code().as_u16(),
                    "Todo の取得に失敗しました"
                );
            })
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn get_all_todos(&self, cancel: &CancellationToken) -> AppResult<Arc<[TodoRecord]>> {
        let todos = self
            .client
            .get::<Vec<TodoRecord>>("todos", cancel)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "upstream",
                    service = "TodoService",
                    method = "get_all_todos",
                    description = e.description(),
                    status_code = e.status_code().as_u16(),
                    "Todo 一覧の取得に失敗しました"
                );
            })?;

        Ok(todos.unwrap_or_default().into())
    }
}
