//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound
//! adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "VALIDATION_ERROR")]
    ValidationError,
    /// No unique tracking number could be produced.
    #[schema(rename = "GENERATION_ERROR")]
    GenerationError,
    /// An unexpected error occurred on the server.
    #[schema(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid request parameters")]
    error: String,
    /// Stable machine-readable error code.
    #[schema(example = "VALIDATION_ERROR")]
    error_code: ErrorCodeSchema,
    /// Request-level correlation identifier.
    #[schema(example = "4f9e6b3a-1c2d-4e5f-8a7b-9c0d1e2f3a4b")]
    correlation_id: Option<String>,
    /// Per-field validation messages.
    #[schema(example = json!({"weight": ["A valid number is required."]}))]
    details: Option<serde_json::Value>,
}
