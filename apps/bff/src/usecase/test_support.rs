//! サービスのテスト用スタブとログ捕捉

use std::{
    future::Future,
    io,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use feedrelay_domain::{AppResult, HttpMethod};
use feedrelay_infra::HttpClientWrapper;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// スタブが受け取った呼び出し
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub method:   HttpMethod,
    pub endpoint: String,
    pub body:     Option<Value>,
}

/// 固定の JSON（または失敗）を返す [`HttpClientWrapper`] のスタブ
pub(crate) struct StubHttpClient {
    response: AppResult<Option<Value>>,
    calls:    Mutex<Vec<RecordedCall>>,
}

impl StubHttpClient {
    pub(crate) fn returning(value: Value) -> Self {
        Self::with_response(Ok(Some(value)))
    }

    pub(crate) fn returning_nothing() -> Self {
        Self::with_response(Ok(None))
    }

    pub(crate) fn failing(err: feedrelay_domain::ApplicationError) -> Self {
        Self::with_response(Err(err))
    }

    fn with_response(response: AppResult<Option<Value>>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Value>,
    ) -> AppResult<Option<T>> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            body,
        });
        self.response
            .clone()
            .map(|value| value.map(|v| serde_json::from_value(v).unwrap()))
    }
}

#[async_trait]
impl HttpClientWrapper for StubHttpClient {
    async fn get<T>(&self, endpoint: &str, _cancel: &CancellationToken) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.respond(HttpMethod::Get, endpoint, None)
    }

    async fn post<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        _cancel: &CancellationToken,
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        self.respond(
            HttpMethod::Post,
            endpoint,
            Some(serde_json::to_value(body).unwrap()),
        )
    }

    async fn put<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        _cancel: &CancellationToken,
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        self.respond(
            HttpMethod::Put,
            endpoint,
            Some(serde_json::to_value(body).unwrap()),
        )
    }

    async fn delete<T>(&self, endpoint: &str, _cancel: &CancellationToken) -> AppResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.respond(HttpMethod::Delete, endpoint, None)
    }
}

/// fmt subscriber の出力を溜めるバッファ
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

/// fmt subscriber を既定に設定した current_thread ランタイムで future を実行し、
/// 結果と出力されたログを返す
pub(crate) fn run_with_captured_logs<F: Future>(future: F) -> (F::Output, String) {
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
