//! Driving port for the request metrics summary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::Error;

/// Summary of the trailing metrics window.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    /// Window label, e.g. `24h`.
    pub period: &'static str,
    pub tracking_requests: u64,
    pub api_calls: u64,
    pub avg_response_time_ms: f64,
    pub success_rate_percent: f64,
    pub generated_at: DateTime<Utc>,
}

/// Domain use-case port for reading request metrics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsQuery: Send + Sync {
    /// Summarise tracking requests and API calls in the trailing window.
    async fn snapshot(&self) -> Result<MetricsSnapshot, Error>;
}
