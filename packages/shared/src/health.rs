//! # ヘルスチェック共通型

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`version` は Cargo.toml のバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use feedrelay_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("0.1.0");
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    /// 稼働状態（常に `"healthy"`）
    pub status:  String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

impl HealthResponse {
    /// 稼働中を表すレスポンスを作成する
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status:  "healthy".to_string(),
            version: version.into(),
        }
    }
}


#[cfg(all(test, feature = "openapi"))]
mod openapi_tests {
    use utoipa::PartialSchema;

    use super::*;

    #[test]
    fn test_health_responseにtoschemaが実装されている() {
        let schema = HealthResponse::schema();
        let utoipa::openapi::RefOr::T(schema) = schema else {
            panic!("expected inline schema, got ref");
        };
        let utoipa::openapi::Schema::Object(obj) = schema else {
            panic!("expected object schema");
        };
        assert!(obj.properties.contains_key("status"));
        assert!(obj.properties.contains_key("version"));
    }
}
