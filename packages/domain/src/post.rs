//! # 投稿レコード

use serde::{Deserialize, Serialize};

/// 上流 API の投稿
///
/// JSON のフィールド名（`userId`, `id`, `title`, `body`）と 1:1 で対応する。
/// 作成リクエストのボディとしてもそのまま送信する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub user_id: i32,
    pub id:      i32,
    pub title:   String,
    pub body:    String,
}
