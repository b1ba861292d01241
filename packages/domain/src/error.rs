//! # アプリケーションエラー
//!
//! 上流 API 呼び出しで起きた失敗を、説明文と HTTP ステータスコードの組として表現する。
//!
//! ## 設計方針
//!
//! - **原因を区別しない**: 上流の非成功ステータスと、送信・解析中の例外は
//!   同じ形に正規化する。呼び出し側はステータスコードだけを見ればよい
//! - **不変**: 生成後に書き換える API は持たない
//! - **成功/失敗は型で表現する**: [`AppResult`] は標準の `Result` であり、
//!   値とエラーの取り違えはパターンマッチでしか起きえない

use http::StatusCode;
use thiserror::Error;

use crate::method::HttpMethod;

/// ドメイン全体で使う Result 型
pub type AppResult<T> = Result<T, ApplicationError>;

/// 成功時のペイロードを持たない Result 型（削除操作など）
pub type UnitResult = AppResult<()>;

/// アプリケーションエラー
///
/// 説明文と HTTP ステータスコードを保持する値オブジェクト。
/// ステータスコードは 100〜599 の範囲に収まる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}（ステータス: {status_code}）")]
pub struct ApplicationError {
    description: String,
    status_code: StatusCode,
}

impl ApplicationError {
    /// 新しいアプリケーションエラーを作成する
    ///
    /// `http::StatusCode` は 999 までを許容するため、600 以上は
    /// 502 Bad Gateway に正規化する。
    pub fn new(description: impl Into<String>, status_code: StatusCode) -> Self {
        let status_code = if status_code.as_u16() > 599 {
            StatusCode::BAD_GATEWAY
        } else {
            status_code
        };

        Self {
            description: description.into(),
            status_code,
        }
    }

    /// 上流が非成功ステータスを返したときのエラー
    ///
    /// ステータスコードは上流レスポンスのものをそのまま使う。
    pub fn unsuccessful_status(method: HttpMethod, endpoint: &str, status_code: StatusCode) -> Self {
        Self::new(
            format!("Unsuccessful status code when trying to {method} for endpoint {endpoint}"),
            status_code,
        )
    }

    /// 送信・受信・解析中に例外が起きたときのエラー（500）
    pub fn exception(method: HttpMethod, endpoint: &str) -> Self {
        Self::new(
            format!("Exception when trying to {method} for endpoint {endpoint}"),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }

    /// 人が読むための説明文
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 呼び出し元へ返すべき HTTP ステータスコード
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }
}
