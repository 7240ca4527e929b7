//! Port for per-request API metrics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{ApiCallSummary, ApiMetric};

use super::define_port_error;

define_port_error! {
    /// Errors raised by API metrics adapters.
    pub enum ApiMetricsRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "api metrics store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "api metrics store query failed: {message}",
    }
}

/// Port for recording and summarising API calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiMetricsRepository: Send + Sync {
    /// Store one request measurement.
    async fn record(&self, metric: &ApiMetric) -> Result<(), ApiMetricsRepositoryError>;

    /// Aggregate measurements recorded at or after `cutoff`.
    async fn summarize_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<ApiCallSummary, ApiMetricsRepositoryError>;
}

/// Fixture implementation that records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureApiMetricsRepository;

#[async_trait]
impl ApiMetricsRepository for FixtureApiMetricsRepository {
    async fn record(&self, _metric: &ApiMetric) -> Result<(), ApiMetricsRepositoryError> {
        Ok(())
    }

    async fn summarize_since(
        &self,
        _cutoff: DateTime<Utc>,
    ) -> Result<ApiCallSummary, ApiMetricsRepositoryError> {
        Ok(ApiCallSummary::default())
    }
}
