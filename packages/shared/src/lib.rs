//! # feedrelay 共有ユーティリティ
//!
//! feedrelay のワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - bff から依存される。domain / infra には依存しない
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum などの Web フレームワークには依存しない
//!
//! ## モジュール構成
//!
//! - [`error_response`] - RFC 9457 形式のエラーレスポンス
//! - [`health`] - ヘルスチェックレスポンス
//! - [`observability`] - トレーシング初期化と Request ID 付きスパン

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
