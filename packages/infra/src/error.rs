//! # インフラ層エラー定義
//!
//! HTTP クライアントの構築失敗と、上流呼び出し中の失敗を表現する。
//!
//! 上流呼び出し中の失敗（[`UpstreamCallError`]）はクレート外に出さない。
//! ログに原因を残したうえで、呼び出し元には 500 の
//! [`ApplicationError`](feedrelay_domain::ApplicationError) として返す。

use thiserror::Error;

/// HTTP クライアントの構築時に発生するエラー
///
/// 起動時にのみ発生する。サーバーはこのエラーで起動を中止する。
#[derive(Debug, Error)]
pub enum HttpClientBuildError {
    /// ベース URL として解釈できない
    #[error("ベース URL が不正です: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// http / https 以外のスキーム
    #[error("ベース URL のスキームは http か https である必要があります: {0}")]
    UnsupportedScheme(String),

    /// reqwest クライアントの構築に失敗した
    #[error("HTTP クライアントの構築に失敗しました: {0}")]
    Client(#[from] reqwest::Error),
}

/// 上流呼び出し中に発生する失敗
#[derive(Debug, Error)]
pub(crate) enum UpstreamCallError {
    /// 接続・送信・受信・タイムアウト
    #[error("上流との通信に失敗しました: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("リクエストボディのシリアライズに失敗しました: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("レスポンスボディのデシリアライズに失敗しました: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// 呼び出し元のキャンセルトークンが発火した
    #[error("呼び出し元によりキャンセルされました")]
    Cancelled,
}

impl UpstreamCallError {
    /// ログの `error.kind` フィールドに記録する種別名
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Transport(e) if e.is_timeout() => "timeout",
            Self::Transport(e) if e.is_connect() => "connect",
            Self::Transport(_) => "transport",
            Self::Serialization(_) => "serialization",
            Self::Deserialization(_) => "deserialization",
            Self::Cancelled => "cancelled",
        }
    }
}
