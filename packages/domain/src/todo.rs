//! # Todo レコード

use serde::{Deserialize, Serialize};

/// 上流 API の Todo
///
/// JSON のフィールド名（`userId`, `id`, `title`, `completed`）と 1:1 で対応する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    pub user_id:   i32,
    pub id:        i32,
    pub title:     String,
    pub completed: bool,
}
