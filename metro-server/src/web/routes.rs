//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::board::Lookup;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rail/timetable", get(station_timetable))
        .route("/bus/timetable", get(stop_timetable))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Rail timetable for a free-text station name.
async fn station_timetable(
    State(state): State<AppState>,
    Query(req): Query<StationQuery>,
) -> Response {
    match state.timetable.station_timetable(&req.station).await {
        Lookup::Found(timetable) => {
            Json(StationTimetableResponse::from(timetable)).into_response()
        }
        Lookup::NotFound => not_found(format!("no station matching {:?}", req.station)),
        Lookup::Unavailable => unavailable(),
    }
}

/// Bus timetable for a stop id.
async fn stop_timetable(State(state): State<AppState>, Query(req): Query<StopQuery>) -> Response {
    match state.timetable.stop_timetable(&req.stop).await {
        Lookup::Found(timetable) => Json(StopTimetableResponse::from(timetable)).into_response(),
        Lookup::NotFound => not_found(format!("no stop matching {:?}", req.stop)),
        Lookup::Unavailable => unavailable(),
    }
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message })).into_response()
}

fn unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "upstream transit feed unavailable".to_string(),
        }),
    )
        .into_response()
}
