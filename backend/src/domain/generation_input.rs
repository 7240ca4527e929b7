//! Validated input tuple for tracking number generation.

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use super::{CountryCode, CustomerName, CustomerSlug, Weight};

/// Validated request attributes hashed into a tracking number.
///
/// Values are validated at construction of each field type; the generator
/// trusts them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput {
    pub origin: CountryCode,
    pub destination: CountryCode,
    pub weight: Weight,
    /// Caller-supplied creation instant, offset preserved.
    pub created_at: DateTime<FixedOffset>,
    pub customer_id: Uuid,
    pub customer_name: CustomerName,
    pub customer_slug: CustomerSlug,
}
