//! PostgreSQL-backed `ApiMetricsRepository` over the `api_metrics` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::sql_query;
use diesel::sql_types::Timestamptz;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ApiMetricsRepository, ApiMetricsRepositoryError};
use crate::domain::{ApiCallSummary, ApiMetric};

use super::diesel_error_mapping::{
    DieselFailure, classify_diesel_error, non_negative, pool_error_message,
};
use super::models::{ApiMetricsSummaryRow, NewApiMetricRow};
use super::pool::{DbPool, PoolError};
use super::schema::api_metrics;

const SUMMARY_SQL: &str = r#"
SELECT
    COUNT(*)::int8 AS total_calls,
    COUNT(*) FILTER (WHERE status_code < 400)::int8 AS successful_calls,
    COALESCE(SUM(response_time_ms), 0)::int8 AS total_response_time_ms
FROM api_metrics
WHERE recorded_at >= $1
"#;

/// Diesel-backed store of per-request measurements.
#[derive(Clone)]
pub struct DieselApiMetricsRepository {
    pool: DbPool,
}

impl DieselApiMetricsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ApiMetricsRepositoryError {
    ApiMetricsRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> ApiMetricsRepositoryError {
    match classify_diesel_error(error, operation) {
        DieselFailure::Connection(message) => ApiMetricsRepositoryError::connection(message),
        DieselFailure::UniqueViolation => ApiMetricsRepositoryError::query("duplicate metric"),
        DieselFailure::Query(message) => ApiMetricsRepositoryError::query(message),
    }
}

fn to_row(metric: &ApiMetric) -> NewApiMetricRow<'_> {
    NewApiMetricRow {
        id: Uuid::new_v4(),
        endpoint: &metric.endpoint,
        method: &metric.method,
        status_code: i32::from(metric.status_code),
        response_time_ms: i64::try_from(metric.response_time_ms).unwrap_or(i64::MAX),
        correlation_id: *metric.correlation_id.as_uuid(),
        recorded_at: metric.recorded_at,
    }
}

fn to_summary(row: ApiMetricsSummaryRow) -> ApiCallSummary {
    ApiCallSummary {
        total_calls: non_negative(row.total_calls),
        successful_calls: non_negative(row.successful_calls),
        total_response_time_ms: non_negative(row.total_response_time_ms),
    }
}

#[async_trait]
impl ApiMetricsRepository for DieselApiMetricsRepository {
    async fn record(&self, metric: &ApiMetric) -> Result<(), ApiMetricsRepositoryError> {
        let row = to_row(metric);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(api_metrics::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, "record api metric"))
    }

    async fn summarize_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<ApiCallSummary, ApiMetricsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ApiMetricsSummaryRow = sql_query(SUMMARY_SQL)
            .bind::<Timestamptz, _>(cutoff)
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "summarise api metrics"))?;

        Ok(to_summary(row))
    }
}
