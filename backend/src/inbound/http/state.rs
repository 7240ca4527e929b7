//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{MetricsQuery, TrackingNumberCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tracking: Arc<dyn TrackingNumberCommand>,
    pub metrics: Arc<dyn MetricsQuery>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use tracking_backend::domain::{MetricsService, TrackingNumberService};
    /// use tracking_backend::inbound::http::state::HttpState;
    /// use tracking_backend::outbound::memory::{InMemoryApiMetrics, InMemoryTrackingStore};
    ///
    /// let store = Arc::new(InMemoryTrackingStore::default());
    /// let api_metrics = Arc::new(InMemoryApiMetrics::default());
    /// let state = HttpState::new(
    ///     Arc::new(TrackingNumberService::new(
    ///         store.clone(),
    ///         store.clone(),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     Arc::new(MetricsService::new(store, api_metrics, Arc::new(DefaultClock))),
    /// );
    /// let _tracking = state.tracking.clone();
    /// ```
    pub fn new(tracking: Arc<dyn TrackingNumberCommand>, metrics: Arc<dyn MetricsQuery>) -> Self {
        Self { tracking, metrics }
    }
}
