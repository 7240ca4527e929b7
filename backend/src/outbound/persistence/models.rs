//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use uuid::Uuid;

use super::schema::{api_metrics, tracking_numbers, tracking_requests};

/// Insertable struct claiming a tracking number.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tracking_numbers)]
pub(crate) struct NewTrackingNumberRow<'a> {
    pub tracking_number: &'a str,
    pub correlation_id: Uuid,
    pub issued_at: DateTime<Utc>,
}

/// Insertable struct for one audit entry.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tracking_requests)]
pub(crate) struct NewTrackingRequestRow<'a> {
    pub id: Uuid,
    pub tracking_number: &'a str,
    pub origin_country: &'a str,
    pub destination_country: &'a str,
    pub weight_grams: i64,
    pub customer_id: Uuid,
    pub customer_name: &'a str,
    pub customer_slug: &'a str,
    pub request_timestamp: DateTime<Utc>,
    pub correlation_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for one API call measurement.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = api_metrics)]
pub(crate) struct NewApiMetricRow<'a> {
    pub id: Uuid,
    pub endpoint: &'a str,
    pub method: &'a str,
    pub status_code: i32,
    pub response_time_ms: i64,
    pub correlation_id: Uuid,
    pub recorded_at: DateTime<Utc>,
}

/// Aggregate row returned by the API metrics summary query.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct ApiMetricsSummaryRow {
    #[diesel(sql_type = BigInt)]
    pub total_calls: i64,
    #[diesel(sql_type = BigInt)]
    pub successful_calls: i64,
    #[diesel(sql_type = BigInt)]
    pub total_response_time_ms: i64,
}
