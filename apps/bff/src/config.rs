//! # BFF 設定
//!
//! 環境変数から BFF サーバーの設定を読み込む。
//!
//! 値の解釈は [`BffConfig::from_lookup`] に集約しているため、
//! テストではプロセスの環境変数に触れずに検証できる。

use std::{env, time::Duration};

use thiserror::Error;

/// 上流 API のベース URL を指定する環境変数
const BASE_URL_VAR: &str = "BASE_URL";
/// `BASE_URL` の別名（キャメルケースの設定名）
const BASE_URL_ALIAS_VAR: &str = "BaseUrl";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("BFF_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),

    #[error("UPSTREAM_TIMEOUT_SECS は 1 以上の整数である必要があります: {0}")]
    InvalidTimeout(String),
}

/// BFF サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BffConfig {
    /// バインドアドレス
    pub host:             String,
    /// ポート番号
    pub port:             u16,
    /// 上流 API のベース URL
    pub base_url:         String,
    /// 上流 API 呼び出し 1 回あたりのタイムアウト
    pub upstream_timeout: Duration,
}

impl BffConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get(BASE_URL_VAR)
            .or_else(|| get(BASE_URL_ALIAS_VAR))
            .ok_or(ConfigError::Missing(BASE_URL_VAR))?;

        let port = match get("BFF_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(v.clone()))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(v.clone()))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            host: get("BFF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            base_url: base_url.trim().to_string(),
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
