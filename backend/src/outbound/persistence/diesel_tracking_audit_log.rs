//! PostgreSQL-backed `TrackingAuditLog` over the `tracking_requests` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::TrackingRecord;
use crate::domain::ports::{TrackingAuditLog, TrackingAuditLogError};

use super::diesel_error_mapping::{
    DieselFailure, classify_diesel_error, non_negative, pool_error_message,
};
use super::models::NewTrackingRequestRow;
use super::pool::{DbPool, PoolError};
use super::schema::tracking_requests;

/// Diesel-backed audit trail of issued tracking numbers.
#[derive(Clone)]
pub struct DieselTrackingAuditLog {
    pool: DbPool,
}

impl DieselTrackingAuditLog {
    /// Create a new audit log with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TrackingAuditLogError {
    TrackingAuditLogError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> TrackingAuditLogError {
    match classify_diesel_error(error, operation) {
        DieselFailure::Connection(message) => TrackingAuditLogError::connection(message),
        DieselFailure::UniqueViolation => TrackingAuditLogError::query("duplicate audit entry"),
        DieselFailure::Query(message) => TrackingAuditLogError::query(message),
    }
}

fn to_row(record: &TrackingRecord) -> Result<NewTrackingRequestRow<'_>, TrackingAuditLogError> {
    let input = &record.input;
    let weight_grams = i64::try_from(input.weight.grams())
        .map_err(|_| TrackingAuditLogError::query("weight exceeds column range"))?;
    Ok(NewTrackingRequestRow {
        id: Uuid::new_v4(),
        tracking_number: record.tracking_number.as_ref(),
        origin_country: input.origin.as_ref(),
        destination_country: input.destination.as_ref(),
        weight_grams,
        customer_id: input.customer_id,
        customer_name: input.customer_name.as_ref(),
        customer_slug: input.customer_slug.as_ref(),
        request_timestamp: input.created_at.with_timezone(&Utc),
        correlation_id: *record.correlation_id.as_uuid(),
        created_at: record.recorded_at,
    })
}

#[async_trait]
impl TrackingAuditLog for DieselTrackingAuditLog {
    async fn append(&self, record: &TrackingRecord) -> Result<(), TrackingAuditLogError> {
        let row = to_row(record)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(tracking_requests::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "append tracking request"))
    }

    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<u64, TrackingAuditLogError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = tracking_requests::table
            .filter(tracking_requests::created_at.ge(cutoff))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "count tracking requests"))?;

        Ok(non_negative(count))
    }
}
