use crate::api::responses::{
    ApiErrorCode, ApiErrorResponse, GuidanceSuccessResponse, HealthStatus, HealthSuccessResponse,
    LotStatusResponse, LotsSuccessResponse, ZonesSuccessResponse,
};
use crate::geo::GeoPoint;
use crate::places::{NominatimPlace, ProviderPlace};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{error, info, warn};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const FALLBACK_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

#[derive(Debug)]
enum TimestampError {
    Format(time::error::Format),
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::Format(err) => write!(f, "timestamp format error: {err}"),
        }
    }
}

/// Body of `POST /api/parking/guidance`.
#[derive(Debug, Deserialize)]
pub struct GuidanceRequest {
    /// Takes precedence over `search_hit`. One of the two is required.
    #[serde(default)]
    pub user_location: Option<GeoPoint>,
    /// Geocoder hit for a searched location, used as the user's position.
    #[serde(default)]
    pub search_hit: Option<NominatimPlace>,
    /// Places-search results; the catalog lots are used when absent.
    /// Entries without usable geometry are dropped, never rejected.
    #[serde(default)]
    pub places: Option<Vec<ProviderPlace>>,
    /// RFC 3339 analysis time; the server clock is used when absent. The
    /// response `timestamp` echoes this instant in the configured local
    /// offset, so it is the time the estimate applies to, not when the
    /// response was produced.
    #[serde(default)]
    pub now: Option<String>,
}

/// A JSON body with a status code, success or error alike.
pub struct ApiResponse<T> {
    status: StatusCode,
    body: Result<T, ApiErrorResponse>,
}

impl<T> ApiResponse<T> {
    fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: Ok(body),
        }
    }

    fn error(status: StatusCode, error_code: ApiErrorCode, message: String) -> Self {
        Self {
            status,
            body: Err(ApiErrorResponse {
                error_code,
                error_message: message,
                timestamp: now_timestamp(),
            }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Result<&T, &ApiErrorResponse> {
        self.body.as_ref()
    }
}

impl<T: serde::Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self.body {
            Ok(body) => (self.status, Json(body)).into_response(),
            Err(body) => (self.status, Json(body)).into_response(),
        }
    }
}

pub async fn post_guidance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GuidanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    match payload {
        Ok(Json(request)) => build_guidance_response(&state, request, state.local_now()),
        Err(rejection) => invalid_input(rejection.body_text()),
    }
}

pub async fn get_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    build_health_response(&state, state.local_now())
}

pub async fn get_zones(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    build_zones_response(&state, state.local_now())
}

pub async fn get_lots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    build_lots_response(&state, state.local_now())
}

fn build_guidance_response(
    state: &AppState,
    request: GuidanceRequest,
    fallback_now: OffsetDateTime,
) -> ApiResponse<GuidanceSuccessResponse> {
    let now = match request.now.as_deref() {
        Some(raw) => match OffsetDateTime::parse(raw, &Rfc3339) {
            Ok(parsed) => parsed.to_offset(state.local_offset()),
            Err(err) => return invalid_input(format!("invalid now timestamp {raw:?}: {err}")),
        },
        None => fallback_now,
    };

    let origin = match (request.user_location, request.search_hit.as_ref()) {
        (Some(location), _) => location,
        (None, Some(hit)) => match hit.to_geo_point() {
            Ok(point) => point,
            Err(err) => return invalid_input(err.to_string()),
        },
        (None, None) => {
            return invalid_input("either user_location or search_hit is required".to_string());
        }
    };

    let analyzer = state.analyzer();
    let result = match request.places.as_deref() {
        Some(places) => analyzer.analyze_provider_places(origin, places, now),
        None => analyzer.analyze_catalog(origin, now),
    };

    info!(
        lat = origin.latitude(),
        lng = origin.longitude(),
        alert = result.pressure_alert.is_some(),
        recommendations = result.recommendations.len(),
        "Parking guidance computed"
    );

    match format_timestamp(now) {
        Ok(timestamp) => ApiResponse::ok(GuidanceSuccessResponse { result, timestamp }),
        Err(_err) => internal_error("/api/parking/guidance", "timestamp formatting failure"),
    }
}

fn build_health_response(
    state: &AppState,
    now: OffsetDateTime,
) -> ApiResponse<HealthSuccessResponse> {
    let status = if state.analyzer().registry().is_empty() {
        HealthStatus::Degraded
    } else {
        HealthStatus::Ok
    };

    match format_timestamp(now) {
        Ok(timestamp) => ApiResponse::ok(HealthSuccessResponse {
            status,
            availability_model: state.analyzer().estimator().model_name().to_string(),
            timestamp,
        }),
        Err(_err) => internal_error("/api/health", "timestamp formatting failure"),
    }
}

fn build_zones_response(
    state: &AppState,
    now: OffsetDateTime,
) -> ApiResponse<ZonesSuccessResponse> {
    let registry = state.analyzer().registry();
    match format_timestamp(now) {
        Ok(timestamp) => ApiResponse::ok(ZonesSuccessResponse {
            pressure_zones: registry.pressure_zones().to_vec(),
            no_parking_zones: registry.no_parking_zones().to_vec(),
            timestamp,
        }),
        Err(_err) => internal_error("/api/parking/zones", "timestamp formatting failure"),
    }
}

fn build_lots_response(state: &AppState, now: OffsetDateTime) -> ApiResponse<LotsSuccessResponse> {
    let analyzer = state.analyzer();
    let lots = analyzer
        .registry()
        .parking_lots()
        .iter()
        .map(|lot| LotStatusResponse {
            lot: lot.clone(),
            availability: analyzer.estimator().estimate(&lot.to_candidate(), now),
        })
        .collect();

    match format_timestamp(now) {
        Ok(timestamp) => ApiResponse::ok(LotsSuccessResponse { lots, timestamp }),
        Err(_err) => internal_error("/api/parking/lots", "timestamp formatting failure"),
    }
}

fn invalid_input<T>(message: String) -> ApiResponse<T> {
    warn!(message = %message, "Rejected invalid guidance request");
    ApiResponse::error(StatusCode::BAD_REQUEST, ApiErrorCode::InvalidInput, message)
}

fn internal_error<T>(route: &str, message: &str) -> ApiResponse<T> {
    error!(route = route, message = message, "Internal error while handling request");
    ApiResponse::error(
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiErrorCode::InternalError,
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}

fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, TimestampError> {
    timestamp.format(&Rfc3339).map_err(TimestampError::Format)
}

fn now_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc()).unwrap_or_else(|err| {
        error!(error = %err, "Failed to format error timestamp");
        FALLBACK_TIMESTAMP.to_string()
    })
}
