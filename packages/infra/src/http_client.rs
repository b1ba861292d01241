//! # 上流 API クライアント
//!
//! 上流 JSON API への GET / POST / PUT / DELETE を行い、結果を
//! [`AppResult`] で返す。
//!
//! ## 設計方針
//!
//! - **失敗はすべて値で返す**: 非成功ステータスは上流のステータスコードのまま、
//!   通信失敗・JSON 解析失敗・キャンセルは 500 の [`ApplicationError`] になる
//! - **非成功レスポンスのボディは読まない**
//! - **空のボディは `None`**: 成功レスポンスのボディが空・空白のみ・`null` の場合は
//!   エラーではなく `Ok(None)` を返す
//! - **状態を持たない**: 保持するのは不変のベース URL と reqwest クライアントのみ。
//!   `Clone` して複数のサービスから同時に使ってよい

use std::time::Duration;

use async_trait::async_trait;
use feedrelay_domain::{AppResult, ApplicationError, HttpMethod};
use reqwest::{
    StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use tokio_util::sync::CancellationToken;

use crate::error::{HttpClientBuildError, UpstreamCallError};

const APPLICATION_JSON: &str = "application/json";
const APPLICATION_JSON_UTF8: &str = "application/json; charset=utf-8";

/// 上流 API 呼び出しのトレイト
///
/// エンドポイントはベース URL からの相対パスで渡す（例: `todos/1`）。
/// すべての操作は `cancel` を監視し、発火した時点で 500 の失敗を返す。
#[async_trait]
pub trait HttpClientWrapper: Send + Sync {
    /// GET でリソースを取得する
    async fn get<T>(&self, endpoint: &str, cancel: &CancellationToken) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send;

    /// POST で JSON ボディを送信する
    async fn post<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;

    /// PUT で JSON ボディを送信する
    async fn put<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;

    /// DELETE でリソースを削除する
    async fn delete<T>(&self, endpoint: &str, cancel: &CancellationToken) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send;
}

/// reqwest を使った [`HttpClientWrapper`] の実装
#[derive(Debug, Clone)]
pub struct ReqwestHttpClientWrapper {
    /// 末尾のスラッシュを取り除いたベース URL
    base_url: String,
    client:   reqwest::Client,
}

impl ReqwestHttpClientWrapper {
    /// 新しいクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: 上流 API のベース URL（http / https）
    /// - `timeout`: 1 回の呼び出し全体（接続からボディ受信まで）のタイムアウト
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpClientBuildError> {
        let parsed = url::Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpClientBuildError::UnsupportedScheme(
                parsed.scheme().to_string(),
            ));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// ベース URL とエンドポイントをスラッシュ 1 つで連結する
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// リクエストを送信し、結果を [`AppResult`] に変換する
    ///
    /// 送受信はキャンセルトークンと競争させる。トークンが先に発火した場合、
    /// 送受信中の future は破棄され、接続は reqwest 側で閉じられる。
    #[tracing::instrument(skip_all, level = "debug", fields(http.method = %method, %endpoint))]
    async fn send<T, B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&B>,
        cancel: &CancellationToken,
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let exchange = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(UpstreamCallError::Cancelled),
            result = self.exchange(method, endpoint, body) => result,
        };

        match exchange {
            Ok(Exchange::Success(value)) => Ok(value),
            Ok(Exchange::Unsuccessful(status)) => {
                tracing::debug!(
                    http.status_code = status.as_u16(),
                    "上流 API が非成功ステータスを返しました"
                );
                Err(ApplicationError::unsuccessful_status(
                    method, endpoint, status,
                ))
            }
            Err(e) => {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = e.kind(),
                    http.method = %method,
                    endpoint,
                    "上流 API の呼び出し中に例外が発生しました: {}",
                    e
                );
                Err(ApplicationError::exception(method, endpoint))
            }
        }
    }

    /// 1 回分の送受信を行う
    async fn exchange<T, B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Exchange<T>, UpstreamCallError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self
            .client
            .request(method.into(), self.endpoint_url(endpoint))
            .header(ACCEPT, APPLICATION_JSON);

        if let Some(body) = body {
            let json = serde_json::to_string(body).map_err(UpstreamCallError::Serialization)?;
            request = request.header(CONTENT_TYPE, APPLICATION_JSON_UTF8).body(json);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(Exchange::Unsuccessful(status));
        }

        let bytes = response.bytes().await?;
        decode_body(&bytes).map(Exchange::Success)
    }
}

/// 送受信の結果（通信としては成功したもの）
enum Exchange<T> {
    Success(Option<T>),
    Unsuccessful(StatusCode),
}

/// 成功レスポンスのボディをデコードする
///
/// 空・空白のみ・`null` は `None` になる。
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, UpstreamCallError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(bytes).map_err(UpstreamCallError::Deserialization)
}

#[async_trait]
impl HttpClientWrapper for ReqwestHttpClientWrapper {
    async fn get<T>(&self, endpoint: &str, cancel: &CancellationToken) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.send::<T, ()>(HttpMethod::Get, endpoint, None, cancel)
            .await
    }

    async fn post<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        self.send(HttpMethod::Post, endpoint, Some(body), cancel)
            .await
    }

    async fn put<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        self.send(HttpMethod::Put, endpoint, Some(body), cancel)
            .await
    }

    async fn delete<T>(&self, endpoint: &str, cancel: &CancellationToken) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.send::<T, ()>(HttpMethod::Delete, endpoint, None, cancel)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        io,
        sync::{Arc, Mutex},
    };

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i32,
    }

    fn wrapper(base_url: &str) -> ReqwestHttpClientWrapper {
        ReqwestHttpClientWrapper::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[rstest]
    #[case("https://upstream.example.com", "todos/1")]
    #[case("https://upstream.example.com/", "todos/1")]
    #[case("https://upstream.example.com", "/todos/1")]
    #[case("https://upstream.example.com/", "/todos/1")]
    fn test_ベースurlとエンドポイントはスラッシュ1つで連結される(
        #[case] base_url: &str,
        #[case] endpoint: &str,
    ) {
        let sut = wrapper(base_url);

        assert_eq!(
            sut.endpoint_url(endpoint),
            "https://upstream.example.com/todos/1"
        );
    }

    #[test]
    fn test_ベースurlのパスは保持される() {
        let sut = wrapper("http://localhost:8080/api/v1/");

        assert_eq!(sut.base_url, "http://localhost:8080/api/v1");
        assert_eq!(sut.endpoint_url("posts"), "http://localhost:8080/api/v1/posts");
    }

    #[rstest]
    #[case("ftp://upstream.example.com")]
    #[case("file:///tmp/upstream")]
    fn test_http以外のスキームは拒否される(#[case] base_url: &str) {
        let result = ReqwestHttpClientWrapper::new(base_url, Duration::from_secs(5));

        assert!(matches!(
            result,
            Err(HttpClientBuildError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_urlとして解釈できないベースurlは拒否される() {
        let result = ReqwestHttpClientWrapper::new("upstream", Duration::from_secs(5));

        assert!(matches!(
            result,
            Err(HttpClientBuildError::InvalidBaseUrl(_))
        ));
    }

    #[rstest]
    #[case(b"")]
    #[case(b"   \n")]
    #[case(b"null")]
    fn test_空のボディはnoneになる(#[case] body: &[u8]) {
        let result = decode_body::<Item>(body).unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn test_jsonボディはデコードされる() {
        let result = decode_body::<Item>(br#"{"id": 3}"#).unwrap();

        assert_eq!(result, Some(Item { id: 3 }));
    }

    #[test]
    fn test_不正なjsonはデシリアライズエラーになる() {
        let result = decode_body::<Item>(b"{not json");

        assert!(matches!(
            result,
            Err(UpstreamCallError::Deserialization(_))
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// fmt subscriber を既定にして future を実行し、結果と出力されたログを返す
    fn run_with_captured_logs<F: Future>(future: F) -> (F::Output, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let output = tracing::subscriber::with_default(subscriber, || runtime.block_on(future));
        let captured = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (output, captured)
    }

    #[test]
    fn test_キャンセルされた呼び出しはcancelledとしてログに残る() {
        let sut = wrapper("http://127.0.0.1:9");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let (result, logs) =
            run_with_captured_logs(async { sut.get::<Item>("todos/1", &cancel).await });

        let err = result.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(logs.contains("ERROR"), "{logs}");
        assert!(
            logs.contains(r#"error.category="external_service""#),
            "{logs}"
        );
        assert!(logs.contains(r#"error.kind="cancelled""#), "{logs}");
        assert!(logs.contains("http.method=GET"), "{logs}");
        assert!(logs.contains(r#"endpoint="todos/1""#), "{logs}");
    }

    #[test]
    fn test_接続できない上流はconnectとしてログに残る() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let sut = wrapper(&format!("http://{addr}"));

        let (result, logs) = run_with_captured_logs(async {
            sut.delete::<Item>("posts/1", &CancellationToken::new())
                .await
        });

        assert!(result.is_err());
        assert!(logs.contains(r#"error.kind="connect""#), "{logs}");
        assert!(logs.contains("http.method=DELETE"), "{logs}");
        assert!(logs.contains(r#"endpoint="posts/1""#), "{logs}");
    }
}
