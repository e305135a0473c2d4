//! Health, version, and diagnostic endpoints.

use axum::extract::State;
use axum::Json;

use crate::dto::response::{HealthResponse, RootResponse, VersionResponse};
use crate::error::{ApiError, ApiResult};
use crate::http::server::AppState;

/// `GET /` — liveness probe.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::ok())
}

/// `GET /health` — status, current timestamp, and configured version.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(&state.settings))
}

/// `GET /version` — configured version and application name.
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse::new(&state.settings))
}

/// `GET /error` — always fails, for exercising the error translator.
pub async fn simulate_error() -> ApiResult<RootResponse> {
    tracing::warn!("Simulated error endpoint triggered");
    Err(ApiError::simulated())
}

/// Fallback for unknown paths; keeps 404s inside the JSON envelope.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
