//! Port for the tracking request audit trail.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::TrackingRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by audit log adapters.
    pub enum TrackingAuditLogError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "tracking audit log connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "tracking audit log query failed: {message}",
    }
}

/// Port for appending and counting audit entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackingAuditLog: Send + Sync {
    /// Append one audit entry for an issued tracking number.
    async fn append(&self, record: &TrackingRecord) -> Result<(), TrackingAuditLogError>;

    /// Count entries appended at or after `cutoff`.
    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<u64, TrackingAuditLogError>;
}

/// Fixture implementation that discards entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTrackingAuditLog;

#[async_trait]
impl TrackingAuditLog for FixtureTrackingAuditLog {
    async fn append(&self, _record: &TrackingRecord) -> Result<(), TrackingAuditLogError> {
        Ok(())
    }

    async fn count_since(&self, _cutoff: DateTime<Utc>) -> Result<u64, TrackingAuditLogError> {
        Ok(0)
    }
}
