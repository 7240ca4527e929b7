//! Persisted record of one issued tracking number.

use chrono::{DateTime, Utc};

use super::{CorrelationId, GenerationInput, TrackingNumber};

/// Issued tracking number together with the input it was derived from.
///
/// Created once per successful attempt and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingRecord {
    pub tracking_number: TrackingNumber,
    pub input: GenerationInput,
    /// Correlation identifier of the attempt that produced the number.
    pub correlation_id: CorrelationId,
    /// Server-assigned issue time.
    pub recorded_at: DateTime<Utc>,
}
