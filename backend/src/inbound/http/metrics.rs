//! Request metrics HTTP handler.

use actix_web::{HttpResponse, get, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::MetricsSnapshot;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Trailing-window metrics summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricsResponse {
    #[schema(example = "24h")]
    pub period: String,
    pub tracking_requests: u64,
    pub api_calls: u64,
    #[schema(example = 12.5)]
    pub avg_response_time_ms: f64,
    #[schema(example = 99.2)]
    pub success_rate_percent: f64,
    #[schema(format = "date-time")]
    pub timestamp: String,
}

impl From<MetricsSnapshot> for MetricsResponse {
    fn from(value: MetricsSnapshot) -> Self {
        Self {
            period: value.period.to_owned(),
            tracking_requests: value.tracking_requests,
            api_calls: value.api_calls,
            avg_response_time_ms: value.avg_response_time_ms,
            success_rate_percent: value.success_rate_percent,
            timestamp: value
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Summarise tracking requests and API calls over the last 24 hours.
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Metrics summary", body = MetricsResponse),
        (status = 500, description = "Metrics unavailable", body = ErrorSchema)
    ),
    tags = ["monitoring"],
    operation_id = "getMetrics",
    security([])
)]
#[get("/metrics")]
pub async fn metrics(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let snapshot = state.metrics.snapshot().await?;
    Ok(HttpResponse::Ok().json(MetricsResponse::from(snapshot)))
}
