//! Tracking number issuance service.
//!
//! Implements the [`TrackingNumberCommand`] driving port: derive a candidate
//! number, claim it in the store, and retry with a fresh correlation
//! identifier when the number is already taken. Successful issues are
//! appended to the audit log on a best-effort basis.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    CreateTrackingNumberRequest, RequestMetadata, TrackingAuditLog, TrackingNumberCommand,
    TrackingNumberIssued, TrackingNumberRepository, TrackingNumberRepositoryError,
};
use crate::domain::{CorrelationId, TrackingError, TrackingRecord, generate_tracking_number};

/// Default number of generation attempts per request.
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 3;

/// Service issuing unique tracking numbers.
#[derive(Clone)]
pub struct TrackingNumberService<R, A> {
    numbers: Arc<R>,
    audit_log: Arc<A>,
    clock: Arc<dyn Clock>,
    max_attempts: u32,
}

impl<R, A> TrackingNumberService<R, A> {
    /// Create a service with the default attempt budget.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use tracking_backend::domain::TrackingNumberService;
    /// # use tracking_backend::domain::ports::{FixtureTrackingAuditLog, FixtureTrackingNumberRepository};
    /// let service = TrackingNumberService::new(
    ///     Arc::new(FixtureTrackingNumberRepository),
    ///     Arc::new(FixtureTrackingAuditLog),
    ///     Arc::new(DefaultClock),
    /// );
    /// assert_eq!(service.max_attempts(), 3);
    /// ```
    pub fn new(numbers: Arc<R>, audit_log: Arc<A>, clock: Arc<dyn Clock>) -> Self {
        Self {
            numbers,
            audit_log,
            clock,
            max_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
        }
    }

    /// Override the attempt budget. Values below one are raised to one.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Number of attempts made before giving up.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl<R, A> TrackingNumberService<R, A>
where
    R: TrackingNumberRepository,
    A: TrackingAuditLog,
{
    async fn audit(&self, record: &TrackingRecord) {
        if let Err(err) = self.audit_log.append(record).await {
            let failure = TrackingError::AuditLog {
                message: err.to_string(),
            };
            warn!(
                correlation_id = %record.correlation_id,
                tracking_number = %record.tracking_number,
                error = %failure,
                "failed to log tracking request"
            );
        }
    }
}

#[async_trait]
impl<R, A> TrackingNumberCommand for TrackingNumberService<R, A>
where
    R: TrackingNumberRepository,
    A: TrackingAuditLog,
{
    async fn create_tracking_number(
        &self,
        request: CreateTrackingNumberRequest,
    ) -> Result<TrackingNumberIssued, TrackingError> {
        let CreateTrackingNumberRequest {
            input,
            mut correlation_id,
        } = request;

        info!(
            %correlation_id,
            customer_id = %input.customer_id,
            origin = %input.origin,
            destination = %input.destination,
            "received tracking number request"
        );

        for attempt in 1..=self.max_attempts {
            let tracking_number = generate_tracking_number(&input, &correlation_id);
            let record = TrackingRecord {
                tracking_number,
                input: input.clone(),
                correlation_id,
                recorded_at: self.clock.utc(),
            };

            match self.numbers.insert_if_absent(&record).await {
                Ok(()) => {
                    self.audit(&record).await;
                    info!(
                        %correlation_id,
                        attempt,
                        customer_id = %record.input.customer_id,
                        tracking_number = %record.tracking_number,
                        "issued tracking number"
                    );
                    return Ok(TrackingNumberIssued {
                        metadata: RequestMetadata::from(&record.input),
                        tracking_number: record.tracking_number,
                        created_at: self.clock.utc(),
                        correlation_id,
                    });
                }
                Err(TrackingNumberRepositoryError::DuplicateTrackingNumber { tracking_number }) => {
                    let collision = TrackingError::Collision { tracking_number };
                    warn!(
                        %correlation_id,
                        attempt,
                        error = %collision,
                        "tracking number collision, retrying"
                    );
                    correlation_id = CorrelationId::generate();
                }
                Err(err) => {
                    error!(%correlation_id, attempt, error = %err, "tracking number store failed");
                    return Err(TrackingError::Unexpected {
                        message: err.to_string(),
                    });
                }
            }
        }

        error!(
            %correlation_id,
            attempts = self.max_attempts,
            "failed to create a unique tracking number"
        );
        Err(TrackingError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
#[path = "tracking_service_tests.rs"]
mod tests;
