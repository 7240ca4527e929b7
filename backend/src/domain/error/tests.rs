//! Tests for the error envelope payload and correlation capture.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const CORRELATION_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_correlation_id() -> String {
    CORRELATION_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::ValidationError)]
#[case(Error::generation_failed("exhausted"), ErrorCode::GenerationError)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_has_no_correlation_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.correlation_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_correlation_id_in_scope(expected_correlation_id: String) {
    let id: CorrelationId = expected_correlation_id.parse().expect("valid UUID");
    let error = CorrelationId::scope(id, async { Error::internal("boom") }).await;

    assert_eq!(error.correlation_id(), Some(expected_correlation_id.as_str()));
}

#[rstest]
fn serialises_to_public_envelope(expected_correlation_id: String) {
    let error = Error::invalid_request("Invalid request parameters")
        .with_correlation_id(expected_correlation_id.clone())
        .with_details(json!({"weight": ["A valid number is required."]}));

    let value = serde_json::to_value(&error).expect("serialise error");

    assert_eq!(
        value,
        json!({
            "error": "Invalid request parameters",
            "error_code": "VALIDATION_ERROR",
            "correlation_id": expected_correlation_id,
            "details": {"weight": ["A valid number is required."]},
        })
    );
}

#[rstest]
fn omits_absent_optional_fields() {
    let value = serde_json::to_value(Error::generation_failed("exhausted")).expect("serialise");
    assert_eq!(
        value,
        json!({"error": "exhausted", "error_code": "GENERATION_ERROR"})
    );
}

#[rstest]
fn without_details_clears_details() {
    let error = Error::internal("boom")
        .with_details(json!({"secret": "x"}))
        .without_details();
    assert!(error.details().is_none());
}
