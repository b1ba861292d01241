//! # OpenAPI 仕様定義
//!
//! utoipa を使用して BFF の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, post, todo};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "feedrelay API",
      version = "0.1.0",
      description = "上流 JSON API を中継する Todo / 投稿 API"
   ),
   paths(
      // health
      health::health_check,
      // todos
      todo::list_todos,
      todo::get_todo,
      // posts
      post::list_posts,
      post::get_post,
      post::create_post,
      post::delete_post,
   ),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "todos", description = "Todo"),
      (name = "posts", description = "投稿"),
   )
)]
pub struct ApiDoc;
