//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod cache_control;
pub mod error;
pub mod health;
pub mod metrics;
pub mod schemas;
pub mod state;
pub mod tracking;
pub mod validation;

pub use error::ApiResult;

/// Register the REST endpoints and the query rejection handler.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(tracking::next_tracking_number)
        .service(metrics::metrics)
        .service(health::health)
        .service(health::ready)
        .service(health::live);
}
