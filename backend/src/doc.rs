//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together with
//! the schema wrappers from [`crate::inbound::http::schemas`], which keep the
//! domain types free of utoipa derives. Swagger UI serves the document in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::metrics::MetricsResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tracking::{NextTrackingNumberResponse, RequestMetadataBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tracking number API",
        description = "Issues unique parcel tracking numbers and reports service metrics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tracking::next_tracking_number,
        crate::inbound::http::metrics::metrics,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        NextTrackingNumberResponse,
        RequestMetadataBody,
        MetricsResponse,
        HealthResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "tracking", description = "Tracking number issuance"),
        (name = "monitoring", description = "Request statistics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
