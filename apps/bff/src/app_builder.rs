//! # BFF アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込み・クライアント生成・サーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use feedrelay_infra::HttpClientWrapper;
use feedrelay_shared::observability::{MakeRequestUuidV7, make_request_span};
use tokio_util::sync::CancellationToken;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        PostState,
        TodoState,
        create_post,
        delete_post,
        get_post,
        get_todo,
        health_check,
        list_posts,
        list_todos,
    },
    usecase::{PostsService, PostsServiceImpl, TodoService, TodoServiceImpl},
};

/// 上流クライアントから各サービスを組み立て、ルーターを構築する
pub fn build_app<C>(client: Arc<C>, shutdown: CancellationToken) -> Router
where
    C: HttpClientWrapper + 'static,
{
    let todo_service: Arc<dyn TodoService> = Arc::new(TodoServiceImpl::new(client.clone()));
    let posts_service: Arc<dyn PostsService> = Arc::new(PostsServiceImpl::new(client));

    build_router(todo_service, posts_service, shutdown)
}

/// サービスを受け取り、ルーターを構築する
///
/// Request ID + TraceLayer により、すべてのリクエストに `x-request-id` が付与され、
/// ログのスパンに自動注入される。
pub fn build_router(
    todo_service: Arc<dyn TodoService>,
    posts_service: Arc<dyn PostsService>,
    shutdown: CancellationToken,
) -> Router {
    let todo_state = Arc::new(TodoState {
        todo_service,
        shutdown: shutdown.clone(),
    });
    let post_state = Arc::new(PostState {
        posts_service,
        shutdown,
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/todos", get(list_todos))
                .route("/todos/{id}", get(get_todo))
                .with_state(todo_state),
        )
        .merge(
            Router::new()
                .route("/posts", get(list_posts).post(create_post))
                .route("/posts/{id}", get(get_post).delete(delete_post))
                .with_state(post_state),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
