//! # BFF (Backend for Frontend) ライブラリ
//!
//! Todo と投稿の REST API を提供し、すべての呼び出しを上流 JSON API に中継する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: サービス → State → Router の組み立て
//! - `config`: 環境変数からの設定読み込み
//! - `error`: 上流呼び出しの失敗を HTTP レスポンスに変換
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI 仕様定義
//! - `usecase`: リソースごとのサービス

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
