//! Failure modes of tracking number issuance.

use serde_json::Value;
use tracing::error;

use super::{CorrelationId, Error};

/// Message returned when every generation attempt collided.
pub const GENERATION_EXHAUSTED_MESSAGE: &str =
    "Failed to create a unique tracking number after multiple attempts.";
/// Message returned for rejected request parameters.
pub const INVALID_PARAMETERS_MESSAGE: &str = "Invalid request parameters";

/// Closed set of tracking failures.
///
/// `Collision` is recovered by the retry loop and `AuditLog` is swallowed by
/// the service; neither normally reaches a caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackingError {
    #[error("invalid request parameters")]
    Validation { details: Value },
    #[error("tracking number {tracking_number} already issued")]
    Collision { tracking_number: String },
    #[error("no unique tracking number after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("failed to record tracking request: {message}")]
    AuditLog { message: String },
    #[error("unexpected tracking failure: {message}")]
    Unexpected { message: String },
}

impl From<TrackingError> for Error {
    fn from(err: TrackingError) -> Self {
        match err {
            TrackingError::Validation { details } => {
                Error::invalid_request(INVALID_PARAMETERS_MESSAGE).with_details(details)
            }
            TrackingError::GenerationExhausted { .. } => {
                Error::generation_failed(GENERATION_EXHAUSTED_MESSAGE)
            }
            other => {
                error!(
                    correlation_id = %CorrelationId::current_or_generate(),
                    error = %other,
                    "tracking request failed"
                );
                Error::internal(other.to_string())
            }
        }
    }
}
