//! Per-request API call measurements and their aggregate.

use chrono::{DateTime, Utc};

use super::CorrelationId;

/// One served HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMetric {
    pub endpoint: String,
    pub method: String,
    pub status_code: u16,
    pub response_time_ms: u64,
    pub correlation_id: CorrelationId,
    pub recorded_at: DateTime<Utc>,
}

impl ApiMetric {
    /// Whether the request completed without a client or server error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code < 400
    }
}

/// Aggregate over a window of [`ApiMetric`] rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiCallSummary {
    pub total_calls: u64,
    pub successful_calls: u64,
    pub total_response_time_ms: u64,
}

impl ApiCallSummary {
    /// Fold one metric into the summary.
    pub fn record(&mut self, metric: &ApiMetric) {
        self.total_calls += 1;
        if metric.is_success() {
            self.successful_calls += 1;
        }
        self.total_response_time_ms += metric.response_time_ms;
    }
}
