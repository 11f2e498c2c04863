use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::request::PropertyRequest;
use super::response::EstimateResponse;
use super::service::{EstimateService, EstimateServiceError};
use super::validation::InvalidPropertyAttributes;
use crate::reference::{ReferenceRepository, ResolutionError};
use crate::valuation::BuildingKind;

/// Router exposing estimates and the reference data behind them.
pub fn estimate_router<R>(service: Arc<EstimateService<R>>) -> Router
where
    R: ReferenceRepository + 'static,
{
    Router::new()
        .route("/api/estimate", post(estimate_handler::<R>))
        .route("/api/areas", get(areas_handler::<R>))
        .route("/api/amenities/:property_type", get(amenities_handler::<R>))
        .with_state(service)
}

pub(crate) async fn estimate_handler<R>(
    State(service): State<Arc<EstimateService<R>>>,
    Json(request): Json<PropertyRequest>,
) -> Response
where
    R: ReferenceRepository + 'static,
{
    match service.estimate_now(&request) {
        Ok(estimate) => (StatusCode::OK, Json(EstimateResponse::from(estimate))).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn areas_handler<R>(State(service): State<Arc<EstimateService<R>>>) -> Response
where
    R: ReferenceRepository + 'static,
{
    match service.repository().areas() {
        Ok(areas) => (StatusCode::OK, Json(json!({ "areas": areas }))).into_response(),
        Err(error) => internal_error(error.to_string()),
    }
}

pub(crate) async fn amenities_handler<R>(
    State(service): State<Arc<EstimateService<R>>>,
    Path(property_type): Path<String>,
) -> Response
where
    R: ReferenceRepository + 'static,
{
    let Some(kind) = BuildingKind::parse(&property_type) else {
        let payload = json!({
            "error": format!("amenities exist only for apartment or house, not '{property_type}'"),
        });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    };

    match service.repository().amenities(kind) {
        Ok(amenities) => {
            (StatusCode::OK, Json(json!({ "amenities": amenities }))).into_response()
        }
        Err(error) => internal_error(error.to_string()),
    }
}

fn rejection(error: EstimateServiceError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        return internal_error(error.to_string());
    }

    warn!(%status, %error, "estimate rejected");
    let mut payload = json!({ "error": error.to_string() });
    if let EstimateServiceError::Resolution(ResolutionError::UnknownAmenity(names)) = &error {
        payload["unknown_amenities"] = json!(names);
    }
    (status, Json(payload)).into_response()
}

pub(crate) fn status_for(error: &EstimateServiceError) -> StatusCode {
    match error {
        EstimateServiceError::Resolution(ResolutionError::Repository(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        EstimateServiceError::Resolution(_) => StatusCode::BAD_REQUEST,
        EstimateServiceError::Invalid(
            InvalidPropertyAttributes::YearOutOfRange { .. }
            | InvalidPropertyAttributes::TooClassic { .. },
        ) => StatusCode::BAD_REQUEST,
        EstimateServiceError::Invalid(_) | EstimateServiceError::Valuation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

fn internal_error(message: String) -> Response {
    tracing::error!(error = %message, "reference data unavailable");
    let payload = json!({ "error": message });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
