//! # OpenAPI YAML 生成ツール
//!
//! BFF の Rust 型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run --bin generate-openapi -p feedrelay-bff > openapi/openapi.yaml
//! ```

use feedrelay_bff::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let yaml = ApiDoc::openapi().to_yaml()?;
    print!("{yaml}");
    Ok(())
}
