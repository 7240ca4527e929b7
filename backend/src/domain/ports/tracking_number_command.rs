//! Driving port for issuing tracking numbers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    CorrelationId, CountryCode, CustomerSlug, GenerationInput, TrackingError, TrackingNumber,
    Weight,
};

/// Request to issue one tracking number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTrackingNumberRequest {
    pub input: GenerationInput,
    /// Correlation identifier for the first attempt.
    pub correlation_id: CorrelationId,
}

/// Request attributes echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetadata {
    pub origin_country: CountryCode,
    pub destination_country: CountryCode,
    pub weight: Weight,
    pub customer_slug: CustomerSlug,
}

impl From<&GenerationInput> for RequestMetadata {
    fn from(input: &GenerationInput) -> Self {
        Self {
            origin_country: input.origin,
            destination_country: input.destination,
            weight: input.weight,
            customer_slug: input.customer_slug.clone(),
        }
    }
}

/// Successful issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingNumberIssued {
    pub tracking_number: TrackingNumber,
    /// Server-assigned issue time.
    pub created_at: DateTime<Utc>,
    /// Correlation identifier of the attempt that succeeded.
    pub correlation_id: CorrelationId,
    pub metadata: RequestMetadata,
}

/// Domain use-case port for issuing tracking numbers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackingNumberCommand: Send + Sync {
    /// Generate, persist, and audit a unique tracking number.
    async fn create_tracking_number(
        &self,
        request: CreateTrackingNumberRequest,
    ) -> Result<TrackingNumberIssued, TrackingError>;
}
