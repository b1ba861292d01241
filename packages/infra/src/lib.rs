//! # feedrelay-infra
//!
//! 上流 JSON API と通信するインフラ層。
//!
//! ## 設計方針
//!
//! - **例外を外に出さない**: 送受信・解析・キャンセルの失敗はすべて
//!   [`feedrelay_domain::ApplicationError`] に変換して返す
//! - **トレイトで抽象化**: サービス層は [`HttpClientWrapper`] にのみ依存し、
//!   テストではスタブに差し替える
//!
//! ## モジュール構成
//!
//! - [`error`]: インフラ層固有のエラー（クライアント構築失敗、内部の呼び出し失敗）
//! - [`http_client`]: 上流 API 呼び出しのラッパー

pub mod error;
pub mod http_client;

pub use error::HttpClientBuildError;
pub use http_client::{HttpClientWrapper, ReqwestHttpClientWrapper};
