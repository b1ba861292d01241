//! # BFF (Backend for Frontend) サーバー
//!
//! Todo と投稿の REST API を提供し、すべての呼び出しを上流 JSON API に中継する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    Client    │────▶│     BFF      │────▶│ Upstream API │
//! │              │     │  port: 3000  │     │  (BASE_URL)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BASE_URL` | **Yes** | 上流 API のベース URL（別名 `BaseUrl`） |
//! | `BFF_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BFF_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `UPSTREAM_TIMEOUT_SECS` | No | 上流呼び出しのタイムアウト秒数（デフォルト: `30`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,feedrelay=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p feedrelay-bff
//!
//! # 本番環境（環境変数を直接指定）
//! BASE_URL=https://jsonplaceholder.typicode.com/ cargo run -p feedrelay-bff --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use feedrelay_bff::{app_builder::build_app, config::BffConfig};
use feedrelay_infra::ReqwestHttpClientWrapper;
use feedrelay_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// BFF サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. 上流クライアントとルーターの構築
/// 5. HTTP サーバーの起動（Ctrl-C で graceful shutdown）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("bff"));
    let _tracing_guard = tracing::info_span!("app", service = "bff").entered();

    let config = BffConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "BFF サーバーを起動します: {}:{}（上流: {}）",
        config.host,
        config.port,
        config.base_url
    );

    let client = ReqwestHttpClientWrapper::new(&config.base_url, config.upstream_timeout)
        .context("上流 API クライアントの構築に失敗しました")?;

    // サーバー停止時に発火し、処理中の上流呼び出しを打ち切る
    let shutdown = CancellationToken::new();
    let app = build_app(Arc::new(client), shutdown.clone());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("BFF サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("BFF サーバーを停止しました");
    Ok(())
}

/// Ctrl-C を待ち、受信したらルートのキャンセルトークンを発火する
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("シグナルハンドラの登録に失敗しました: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("停止シグナルを受信しました");
    shutdown.cancel();
}
