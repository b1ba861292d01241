//! # ユースケース層
//!
//! リソースごとのサービスを実装する。各サービスは上流 API の固定エンドポイントを
//! [`HttpClientWrapper`](feedrelay_infra::HttpClientWrapper) 経由で呼び出す薄い層で、
//! 失敗時のログ出力と、空のコレクションの正規化だけを担う。
//!
//! ## 設計方針
//!
//! - **依存性注入**: ラッパーを `Arc<C>` でコンストラクタから注入する
//! - **失敗は素通し**: [`ApplicationError`](feedrelay_domain::ApplicationError) は
//!   ログに残したうえで、そのまま呼び出し元に返す
//! - **ハンドラからはトレイト越し**: ハンドラは `Arc<dyn TodoService>` のように
//!   トレイトオブジェクトで保持し、テストではスタブに差し替える
//!
//! ## モジュール構成
//!
//! - `todo`: Todo の取得
//! - `post`: 投稿の取得・作成・削除

pub mod post;
pub mod todo;

#[cfg(test)]
pub(crate) mod test_support;

pub use post::{PostsService, PostsServiceImpl};
pub use todo::{TodoService, TodoServiceImpl};
