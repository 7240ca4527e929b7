//! Builders wiring domain services to Diesel or in-memory adapters.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use tracking_backend::domain::ports::{
    ApiMetricsRepository, TrackingAuditLog, TrackingNumberRepository,
};
use tracking_backend::domain::{MetricsService, TrackingNumberService};
use tracking_backend::inbound::http::state::HttpState;
use tracking_backend::outbound::memory::{InMemoryApiMetrics, InMemoryTrackingStore};
use tracking_backend::outbound::persistence::{
    DieselApiMetricsRepository, DieselTrackingAuditLog, DieselTrackingNumberRepository,
};

use super::ServerConfig;

/// Handler state plus the metrics store consumed by the request logger.
pub(crate) struct AppState {
    pub(crate) http: HttpState,
    pub(crate) api_metrics: Arc<dyn ApiMetricsRepository>,
    pub(crate) clock: Arc<dyn Clock>,
}

fn assemble<R, A, M>(
    numbers: Arc<R>,
    audit_log: Arc<A>,
    api_metrics: Arc<M>,
    max_attempts: u32,
) -> AppState
where
    R: TrackingNumberRepository + 'static,
    A: TrackingAuditLog + 'static,
    M: ApiMetricsRepository + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let tracking = TrackingNumberService::new(numbers, Arc::clone(&audit_log), Arc::clone(&clock))
        .with_max_attempts(max_attempts);
    let metrics = MetricsService::new(audit_log, Arc::clone(&api_metrics), Arc::clone(&clock));

    AppState {
        http: HttpState::new(Arc::new(tracking), Arc::new(metrics)),
        api_metrics,
        clock,
    }
}

/// Build adapter-backed state: Diesel when a pool is configured, otherwise
/// process-local stores.
pub(crate) fn build_app_state(config: &ServerConfig) -> AppState {
    match &config.db_pool {
        Some(pool) => assemble(
            Arc::new(DieselTrackingNumberRepository::new(pool.clone())),
            Arc::new(DieselTrackingAuditLog::new(pool.clone())),
            Arc::new(DieselApiMetricsRepository::new(pool.clone())),
            config.max_generation_attempts,
        ),
        None => {
            let store = Arc::new(InMemoryTrackingStore::default());
            assemble(
                Arc::clone(&store),
                store,
                Arc::new(InMemoryApiMetrics::default()),
                config.max_generation_attempts,
            )
        }
    }
}
