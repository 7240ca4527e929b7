//! Request metrics summary service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use mockable::Clock;
use tracing::error;

use crate::domain::Error;
use crate::domain::ports::{ApiMetricsRepository, MetricsQuery, MetricsSnapshot, TrackingAuditLog};

/// Label of the summarised window.
pub const METRICS_PERIOD: &str = "24h";

fn window() -> Duration {
    Duration::hours(24)
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// Call counts stay far below 2^52, so the float conversion is exact.
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Service implementing the [`MetricsQuery`] driving port.
#[derive(Clone)]
pub struct MetricsService<A, M> {
    audit_log: Arc<A>,
    api_metrics: Arc<M>,
    clock: Arc<dyn Clock>,
}

impl<A, M> MetricsService<A, M> {
    /// Create a metrics service over the audit log and API metrics store.
    pub fn new(audit_log: Arc<A>, api_metrics: Arc<M>, clock: Arc<dyn Clock>) -> Self {
        Self {
            audit_log,
            api_metrics,
            clock,
        }
    }
}

#[async_trait]
impl<A, M> MetricsQuery for MetricsService<A, M>
where
    A: TrackingAuditLog,
    M: ApiMetricsRepository,
{
    async fn snapshot(&self) -> Result<MetricsSnapshot, Error> {
        let now = self.clock.utc();
        let cutoff = now - window();

        let tracking_requests = self.audit_log.count_since(cutoff).await.map_err(|err| {
            error!(error = %err, "error retrieving tracking request count");
            Error::internal(format!("unable to retrieve metrics: {err}"))
        })?;
        let calls = self
            .api_metrics
            .summarize_since(cutoff)
            .await
            .map_err(|err| {
                error!(error = %err, "error retrieving api call summary");
                Error::internal(format!("unable to retrieve metrics: {err}"))
            })?;

        Ok(MetricsSnapshot {
            period: METRICS_PERIOD,
            tracking_requests,
            api_calls: calls.total_calls,
            avg_response_time_ms: round_two(ratio(
                calls.total_response_time_ms,
                calls.total_calls,
            )),
            success_rate_percent: round_two(
                ratio(calls.successful_calls, calls.total_calls) * 100.0,
            ),
            generated_at: now,
        })
    }
}
