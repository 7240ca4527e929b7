//! Port for the uniqueness-enforcing tracking number store.

use async_trait::async_trait;

use crate::domain::TrackingRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by tracking number store adapters.
    pub enum TrackingNumberRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "tracking number store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "tracking number store query failed: {message}",
        /// The tracking number was already issued.
        DuplicateTrackingNumber { tracking_number: String } =>
            "tracking number {tracking_number} already issued",
    }
}

/// Port for claiming tracking numbers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackingNumberRepository: Send + Sync {
    /// Persist `record` unless its tracking number is already taken.
    ///
    /// Returns [`TrackingNumberRepositoryError::DuplicateTrackingNumber`] when
    /// another record holds the same number. Exactly one of several concurrent
    /// writers of the same number succeeds.
    async fn insert_if_absent(
        &self,
        record: &TrackingRecord,
    ) -> Result<(), TrackingNumberRepositoryError>;
}

/// Fixture implementation that accepts every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTrackingNumberRepository;

#[async_trait]
impl TrackingNumberRepository for FixtureTrackingNumberRepository {
    async fn insert_if_absent(
        &self,
        _record: &TrackingRecord,
    ) -> Result<(), TrackingNumberRepositoryError> {
        Ok(())
    }
}
