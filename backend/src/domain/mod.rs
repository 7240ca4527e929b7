//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed tracking request model, the pure
//! tracking number derivation, and the services that orchestrate issuance and
//! metrics. Keep types immutable and framework-agnostic; inbound adapters map
//! them to HTTP and outbound adapters map them to storage.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error envelope.
//! - CorrelationId: request-scoped identifier held in task-local storage.
//! - GenerationInput and its field types: validated request attributes.
//! - generate_tracking_number / TrackingNumber: pure derivation.
//! - TrackingNumberService / MetricsService: driving port implementations.

pub mod api_metric;
pub mod correlation_id;
pub mod country_code;
pub mod customer;
pub mod error;
pub mod generation_input;
pub mod metrics_service;
pub mod ports;
mod slug;
pub mod tracking_error;
pub mod tracking_number;
pub mod tracking_record;
pub mod tracking_service;
pub mod weight;

pub use self::api_metric::{ApiCallSummary, ApiMetric};
pub use self::correlation_id::{CORRELATION_ID_HEADER, CorrelationId};
pub use self::country_code::{CountryCode, CountryCodeError, CountryRole};
pub use self::customer::{CUSTOMER_FIELD_MAX, CustomerName, CustomerSlug, CustomerValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::generation_input::GenerationInput;
pub use self::metrics_service::{METRICS_PERIOD, MetricsService};
pub use self::tracking_error::{
    GENERATION_EXHAUSTED_MESSAGE, INVALID_PARAMETERS_MESSAGE, TrackingError,
};
pub use self::tracking_number::{
    TRACKING_NUMBER_MAX_LEN, TrackingNumber, TrackingNumberFormatError, generate_tracking_number,
    to_base36,
};
pub use self::tracking_record::TrackingRecord;
pub use self::tracking_service::{DEFAULT_MAX_GENERATION_ATTEMPTS, TrackingNumberService};
pub use self::weight::{Weight, WeightError};

