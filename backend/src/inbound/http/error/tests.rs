//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const CORRELATION_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_correlation_id() -> String {
    CORRELATION_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::generation_failed("exhausted"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn render(error: Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let header = response
        .headers()
        .get(CORRELATION_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error JSON");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_correlation_id: String) {
    let error = Error::internal("pool exploded")
        .with_correlation_id(expected_correlation_id.clone())
        .with_details(json!({"secret": "x"}));

    let (status, header, body) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_correlation_id.as_str()));
    assert_eq!(
        body,
        json!({
            "error": "Internal server error",
            "error_code": "INTERNAL_ERROR",
            "correlation_id": expected_correlation_id,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn validation_errors_keep_details(expected_correlation_id: String) {
    let details = json!({"weight": ["A valid number is required."]});
    let error = Error::invalid_request("Invalid request parameters")
        .with_correlation_id(expected_correlation_id.clone())
        .with_details(details.clone());

    let (status, header, body) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(expected_correlation_id.as_str()));
    assert_eq!(body["error_code"], "VALIDATION_ERROR");
    assert_eq!(body["details"], details);
}

#[rstest]
#[actix_web::test]
async fn generation_errors_are_not_redacted() {
    let error = Error::generation_failed("no unique number");

    let (status, header, body) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(header.is_none());
    assert_eq!(
        body,
        json!({"error": "no unique number", "error_code": "GENERATION_ERROR"})
    );
}

#[rstest]
fn actix_errors_become_redacted_internal_errors() {
    let actix_err = actix_web::error::ErrorBadGateway("upstream secret");
    let err: Error = actix_err.into();
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), REDACTED_MESSAGE);
}
