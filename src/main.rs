//! Minimal HTTP echo service.
//!
//! Exposes health, version, and echo endpoints with input validation,
//! structured error responses, and request logging. Configuration is
//! read once at startup from environment variables (or CLI flags), and
//! every request is handled independently with no shared mutable state.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use echo_service::config::Settings;
use echo_service::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::parse();

    // Initialize tracing subscriber; RUST_LOG wins over LOG_LEVEL
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("echo_service={},tower_http=info", settings.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        app_name = %settings.app_name,
        app_version = %settings.app_version,
        "echo-service starting"
    );

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        allowed_origins = ?settings.allowed_origins,
        allowed_hosts = ?settings.allowed_hosts,
        debug = settings.debug,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(settings);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
