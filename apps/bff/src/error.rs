//! # BFF エラーハンドリング
//!
//! [`ApplicationError`] と「レコードが存在しない」状態を、
//! RFC 9457 形式の axum レスポンスに変換する。
//!
//! `ApplicationError` はドメインクレートの型のため `IntoResponse` を実装できない
//! （孤児ルール）。変換はここのヘルパー関数に集約する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feedrelay_domain::ApplicationError;
use feedrelay_shared::ErrorResponse;

/// 上流呼び出しの失敗をレスポンスに変換する
///
/// ステータスコードは失敗が持つものをそのまま使い、`detail` には説明文を入れる。
pub fn application_error_response(err: &ApplicationError) -> Response {
    let status = err.status_code();
    (
        status,
        Json(ErrorResponse::upstream(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Upstream Error"),
            err.description(),
        )),
    )
        .into_response()
}

/// 404 Not Found レスポンス
pub fn not_found_response(detail: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found(detail))).into_response()
}

/// 502 Bad Gateway レスポンス
pub fn bad_gateway_response(detail: &str) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse::bad_gateway(detail)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use feedrelay_domain::HttpMethod;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[case(StatusCode::BAD_REQUEST, "Bad Request")]
    #[case(StatusCode::NOT_FOUND, "Not Found")]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")]
    #[tokio::test]
    async fn test_application_errorのステータスと説明文がそのまま使われる(
        #[case] status: StatusCode,
        #[case] title: &str,
    ) {
        let err = ApplicationError::unsuccessful_status(HttpMethod::Get, "todos/1", status);

        let response = application_error_response(&err);

        assert_eq!(response.status(), status);
        assert_eq!(
            body_of(response).await,
            ErrorResponse {
                error_type: "https://feedrelay.example.com/errors/upstream-error".to_string(),
                title:      title.to_string(),
                status:     status.as_u16(),
                detail:     "Unsuccessful status code when trying to GET for endpoint todos/1"
                    .to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_理由句のないステータスは汎用タイトルになる() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = ApplicationError::new("upstream said 599", status);

        let response = application_error_response(&err);

        assert_eq!(response.status().as_u16(), 599);
        assert_eq!(body_of(response).await.title, "Upstream Error");
    }

    #[tokio::test]
    async fn test_not_found_responseは404を返す() {
        let response = not_found_response("Todo 1 が見つかりません");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await.detail, "Todo 1 が見つかりません");
    }

    #[tokio::test]
    async fn test_bad_gateway_responseは502を返す() {
        let response = bad_gateway_response("作成結果が空でした");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_of(response).await.status, 502);
    }
}
