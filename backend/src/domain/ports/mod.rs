//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, `TrackingAuditLog`) describe the stores the
//! domain writes to; driving ports (`*Command`, `*Query`) describe the use
//! cases inbound adapters call. Each driven port exposes a typed error so
//! adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod api_metrics_repository;
mod metrics_query;
mod tracking_audit_log;
mod tracking_number_command;
mod tracking_number_repository;

#[cfg(test)]
pub use api_metrics_repository::MockApiMetricsRepository;
pub use api_metrics_repository::{
    ApiMetricsRepository, ApiMetricsRepositoryError, FixtureApiMetricsRepository,
};
#[cfg(test)]
pub use metrics_query::MockMetricsQuery;
pub use metrics_query::{MetricsQuery, MetricsSnapshot};
#[cfg(test)]
pub use tracking_audit_log::MockTrackingAuditLog;
pub use tracking_audit_log::{FixtureTrackingAuditLog, TrackingAuditLog, TrackingAuditLogError};
#[cfg(test)]
pub use tracking_number_command::MockTrackingNumberCommand;
pub use tracking_number_command::{
    CreateTrackingNumberRequest, RequestMetadata, TrackingNumberCommand, TrackingNumberIssued,
};
#[cfg(test)]
pub use tracking_number_repository::MockTrackingNumberRepository;
pub use tracking_number_repository::{
    FixtureTrackingNumberRepository, TrackingNumberRepository, TrackingNumberRepositoryError,
};
