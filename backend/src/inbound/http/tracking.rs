//! Tracking number HTTP handler.
//!
//! ```text
//! GET /next-tracking-number?origin_country_id=MY&destination_country_id=ID&weight=1.234
//!     &created_at=2018-11-20T19:29:32%2B08:00&customer_id=<uuid>
//!     &customer_name=RedBox%20Logistics&customer_slug=redbox-logistics
//! ```

use actix_web::{HttpResponse, get, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ports::{CreateTrackingNumberRequest, TrackingNumberIssued};
use crate::domain::{
    CorrelationId, CountryCode, CountryRole, CustomerName, CustomerSlug, GenerationInput,
    TrackingError, Weight,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldErrors, FieldName, parse_rfc3339_timestamp, parse_uuid,
};

const ORIGIN: FieldName = FieldName::new("origin_country_id");
const DESTINATION: FieldName = FieldName::new("destination_country_id");
const WEIGHT: FieldName = FieldName::new("weight");
const CREATED_AT: FieldName = FieldName::new("created_at");
const CUSTOMER_ID: FieldName = FieldName::new("customer_id");
const CUSTOMER_NAME: FieldName = FieldName::new("customer_name");
const CUSTOMER_SLUG: FieldName = FieldName::new("customer_slug");

/// Raw query parameters. Every field is required; absence is reported by
/// validation rather than by deserialisation.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct NextTrackingNumberQuery {
    pub origin_country_id: Option<String>,
    pub destination_country_id: Option<String>,
    pub weight: Option<String>,
    pub created_at: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_slug: Option<String>,
}

/// Request attributes echoed in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RequestMetadataBody {
    #[schema(example = "MY")]
    pub origin_country: String,
    #[schema(example = "ID")]
    pub destination_country: String,
    /// Weight in kilograms with three decimals.
    #[schema(example = "1.234")]
    pub weight_kg: String,
    #[schema(example = "redbox-logistics")]
    pub customer_slug: String,
}

/// Successful tracking number response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NextTrackingNumberResponse {
    #[schema(example = "MYIDF50EDWNIQ")]
    pub tracking_number: String,
    #[schema(format = "date-time", example = "2024-01-01T00:00:00.000000Z")]
    pub created_at: String,
    /// Correlation identifier of the attempt that produced the number.
    #[schema(format = "uuid")]
    pub correlation_id: String,
    pub request_metadata: RequestMetadataBody,
}

impl From<TrackingNumberIssued> for NextTrackingNumberResponse {
    fn from(value: TrackingNumberIssued) -> Self {
        Self {
            tracking_number: value.tracking_number.into(),
            created_at: value
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            correlation_id: value.correlation_id.to_string(),
            request_metadata: RequestMetadataBody {
                origin_country: value.metadata.origin_country.to_string(),
                destination_country: value.metadata.destination_country.to_string(),
                weight_kg: value.metadata.weight.to_string(),
                customer_slug: value.metadata.customer_slug.into(),
            },
        }
    }
}

/// Validate raw query parameters, reporting every invalid field at once.
pub fn parse_generation_input(
    query: NextTrackingNumberQuery,
) -> Result<GenerationInput, TrackingError> {
    let mut errors = FieldErrors::default();

    let origin = errors.check(ORIGIN, query.origin_country_id, |raw| {
        CountryCode::parse(raw, CountryRole::Origin)
    });
    let destination = errors.check(DESTINATION, query.destination_country_id, |raw| {
        CountryCode::parse(raw, CountryRole::Destination)
    });
    let weight = errors.check(WEIGHT, query.weight, Weight::parse);
    let created_at = errors.check(CREATED_AT, query.created_at, parse_rfc3339_timestamp);
    let customer_id = errors.check(CUSTOMER_ID, query.customer_id, parse_uuid);
    let customer_name = errors.check(CUSTOMER_NAME, query.customer_name, |raw| {
        CustomerName::new(raw)
    });
    let customer_slug = errors.check(CUSTOMER_SLUG, query.customer_slug, |raw| {
        CustomerSlug::new(raw)
    });

    match (
        origin,
        destination,
        weight,
        created_at,
        customer_id,
        customer_name,
        customer_slug,
    ) {
        (
            Some(origin),
            Some(destination),
            Some(weight),
            Some(created_at),
            Some(customer_id),
            Some(customer_name),
            Some(customer_slug),
        ) if errors.is_empty() => Ok(GenerationInput {
            origin,
            destination,
            weight,
            created_at,
            customer_id,
            customer_name,
            customer_slug,
        }),
        _ => Err(errors.into_error()),
    }
}

/// Generate the next unique tracking number for a parcel.
#[utoipa::path(
    get,
    path = "/next-tracking-number",
    params(
        ("origin_country_id" = String, Query, description = "ISO 3166-1 alpha-2 origin, e.g. MY"),
        ("destination_country_id" = String, Query, description = "ISO 3166-1 alpha-2 destination, e.g. ID"),
        ("weight" = String, Query, description = "Weight in kg, up to 3 decimal places, e.g. 1.234"),
        ("created_at" = String, Query, description = "RFC 3339 timestamp, e.g. 2018-11-20T19:29:32+08:00"),
        ("customer_id" = String, Query, description = "Customer UUID"),
        ("customer_name" = String, Query, description = "Customer display name"),
        ("customer_slug" = String, Query, description = "Kebab-case customer slug")
    ),
    responses(
        (status = 200, description = "Tracking number issued", body = NextTrackingNumberResponse),
        (status = 400, description = "Invalid request parameters", body = ErrorSchema),
        (status = 500, description = "Generation failed or internal error", body = ErrorSchema)
    ),
    tags = ["tracking"],
    operation_id = "nextTrackingNumber",
    security([])
)]
#[get("/next-tracking-number")]
pub async fn next_tracking_number(
    state: web::Data<HttpState>,
    query: web::Query<NextTrackingNumberQuery>,
) -> ApiResult<HttpResponse> {
    let correlation_id = CorrelationId::current_or_generate();
    let input = parse_generation_input(query.into_inner()).inspect_err(|err| {
        warn!(%correlation_id, error = %err, "invalid tracking number request");
    })?;

    let issued = state
        .tracking
        .create_tracking_number(CreateTrackingNumberRequest {
            input,
            correlation_id,
        })
        .await?;

    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(NextTrackingNumberResponse::from(issued)))
}

#[cfg(test)]
#[path = "tracking_tests.rs"]
mod tests;
