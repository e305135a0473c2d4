//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, CORS, panic boundary)
//! - Bind server to listener
//! - Graceful shutdown on Ctrl+C

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::any::Any as AnyValue;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::error::ApiError;
use crate::http::request::RequestIdLayer;
use crate::routes;

/// Per-request handler timeout.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application state injected into handlers.
///
/// Settings are read-only for the lifetime of the process; nothing
/// mutable is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

/// HTTP server for the echo service.
pub struct HttpServer {
    router: Router,
    settings: Arc<Settings>,
}

impl HttpServer {
    /// Create a new HTTP server with the given settings.
    pub fn new(settings: Settings) -> Self {
        let settings = Arc::new(settings);
        let state = AppState {
            settings: settings.clone(),
        };
        let router = Self::build_router(&settings, state);
        Self { router, settings }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(settings: &Settings, state: AppState) -> Router {
        routes::api_router(state)
            .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .layer(cors_layer(settings))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            app_name = %self.settings.app_name,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Translate a handler panic into the uniform error envelope.
///
/// This is the sole producer of the unclassified-fault path: the panic
/// payload is logged server-side by the translator and the client only
/// sees the generic envelope.
fn handle_panic(panic: Box<dyn AnyValue + Send + 'static>) -> Response {
    let cause = if let Some(text) = panic.downcast_ref::<String>() {
        text.clone()
    } else if let Some(text) = panic.downcast_ref::<&str>() {
        (*text).to_string()
    } else {
        "non-string panic payload".to_string()
    };
    ApiError::internal(cause).into_response()
}

/// Build the CORS layer from the configured origins.
fn cors_layer(settings: &Settings) -> CorsLayer {
    if settings.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
