//! Route registration.

pub mod echo;
pub mod system;

use axum::routing::{get, post};
use axum::Router;

use crate::http::server::AppState;

/// Builds the application router with all endpoints registered.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/version", get(system::version))
        .route("/echo", post(echo::echo))
        .route("/v1/echo", post(echo::echo_simple))
        .route("/error", get(system::simulate_error))
        .fallback(system::not_found)
        .with_state(state)
}
