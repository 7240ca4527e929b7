//! PostgreSQL-backed `TrackingNumberRepository` using the `tracking_numbers`
//! primary key as the uniqueness index.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::TrackingRecord;
use crate::domain::ports::{TrackingNumberRepository, TrackingNumberRepositoryError};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::NewTrackingNumberRow;
use super::pool::{DbPool, PoolError};
use super::schema::tracking_numbers;

/// Diesel-backed tracking number claim store.
#[derive(Clone)]
pub struct DieselTrackingNumberRepository {
    pool: DbPool,
}

impl DieselTrackingNumberRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TrackingNumberRepositoryError {
    TrackingNumberRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(
    error: diesel::result::Error,
    tracking_number: &str,
) -> TrackingNumberRepositoryError {
    match classify_diesel_error(error, "claim tracking number") {
        DieselFailure::UniqueViolation => {
            TrackingNumberRepositoryError::duplicate_tracking_number(tracking_number)
        }
        DieselFailure::Connection(message) => TrackingNumberRepositoryError::connection(message),
        DieselFailure::Query(message) => TrackingNumberRepositoryError::query(message),
    }
}

#[async_trait]
impl TrackingNumberRepository for DieselTrackingNumberRepository {
    async fn insert_if_absent(
        &self,
        record: &TrackingRecord,
    ) -> Result<(), TrackingNumberRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let tracking_number = record.tracking_number.as_ref();

        let row = NewTrackingNumberRow {
            tracking_number,
            correlation_id: *record.correlation_id.as_uuid(),
            issued_at: record.recorded_at,
        };

        diesel::insert_into(tracking_numbers::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, tracking_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn unique_violation_maps_to_duplicate() {
        let err = map_diesel_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                Box::new("duplicate key value violates unique constraint".to_owned()),
            ),
            "MYIDF50EDWNIQ",
        );
        assert_eq!(
            err,
            TrackingNumberRepositoryError::duplicate_tracking_number("MYIDF50EDWNIQ")
        );
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(err, TrackingNumberRepositoryError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let err = map_diesel_error(
            DieselError::DatabaseError(
                DatabaseErrorKind::ClosedConnection,
                Box::new("server closed the connection".to_owned()),
            ),
            "MYIDF50EDWNIQ",
        );
        assert!(matches!(err, TrackingNumberRepositoryError::Connection { .. }));
    }
}
