//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、上流呼び出しはサービスに委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `todo`: Todo の取得
//! - `post`: 投稿の取得・作成・削除

pub mod health;
pub mod post;
pub mod todo;

pub use health::health_check;
pub use post::{PostState, create_post, delete_post, get_post, list_posts};
pub use todo::{TodoState, get_todo, list_todos};
