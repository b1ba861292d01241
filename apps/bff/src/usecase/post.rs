//! 投稿サービス
//!
//! 上流の `posts` / `posts/{id}` を呼び出す。

use std::sync::Arc;

use async_trait::async_trait;
use feedrelay_domain::{AppResult, PostRecord, UnitResult};
use feedrelay_infra::HttpClientWrapper;
use serde::de::IgnoredAny;
use tokio_util::sync::CancellationToken;

/// 投稿の取得・作成・削除
#[async_trait]
pub trait PostsService: Send + Sync {
    /// ID を指定して投稿を取得する
    async fn get_post_by_id(
        &self,
        id: i32,
        cancel: &CancellationToken,
    ) -> AppResult<Option<PostRecord>>;

    /// 投稿をすべて取得する
    ///
    /// 上流が空のボディを返した場合は空のコレクションになる。
    async fn get_all_posts(&self, cancel: &CancellationToken) -> AppResult<Arc<[PostRecord]>>;

    /// 投稿を作成し、上流が返した作成結果を返す
    async fn create_post(
        &self,
        post: &PostRecord,
        cancel: &CancellationToken,
    ) -> AppResult<Option<PostRecord>>;

    /// ID を指定して投稿を削除する
    ///
    /// 上流のレスポンスボディは読み捨てる。
    async fn delete_post_by_id(&self, id: i32, cancel: &CancellationToken) -> UnitResult;
}

/// [`PostsService`] の実装
pub struct PostsServiceImpl<C> {
    client: Arc<C>,
}

impl<C: HttpClientWrapper> PostsServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: HttpClientWrapper> PostsService for PostsServiceImpl<C> {
    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn get_post_by_id(
        &self,
        id: i32,
        cancel: &CancellationToken,
    ) -> AppResult<Option<PostRecord>> {
        self.client
            .get::<PostRecord>(&format!("posts/{id}"), cancel)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "upstream",
                    service = "PostsService",
                    method = "get_post_by_id",
                    id,
                    description = e.description(),
                    status_code = e.status_code().as_u16(),
                    "投稿の取得に失敗しました"
                );
            })
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn get_all_posts(&self, cancel: &CancellationToken) -> AppResult<Arc<[PostRecord]>> {
        let posts = self
            .client
            .get::<Vec<PostRecord>>("posts", cancel)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "upstream",
                    service = "PostsService",
                    method = "get_all_posts",
                    description = e.description(),
                    status_code = e.status_code().as_u16(),
                    "投稿一覧の取得に失敗しました"
                );
            })?;

        Ok(posts.unwrap_or_default().into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(title = %post.title))]
    async fn create_post(
        &self,
        post: &PostRecord,
        cancel: &CancellationToken,
    ) -> AppResult<Option<PostRecord>> {
        self.client
            .post::<PostRecord, PostRecord>("posts", post, cancel)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "upstream",
                    service = "PostsService",
                    method = "create_post",
                    title = %post.title,
                    description = e.description(),
                    status_code = e.status_code().as_u16(),
                    "投稿の作成に失敗しました"
                );
            })
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete_post_by_id(&self, id: i32, cancel: &CancellationToken) -> UnitResult {
        self.client
            .delete::<IgnoredAny>(&format!("posts/{id}"), cancel)
            .await
            .map(|_| ())
            .inspect_err(|e| {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "upstream",
                    service = "PostsService",
                    method = "delete_post_by_id",
                    id,
                    description = e.description(),
                    status_code = e.status_code().as_u16(),
                    "投稿の削除に失敗しました"
                );
            })
    }
}
