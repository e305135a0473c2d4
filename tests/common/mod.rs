//! Shared utilities for integration testing.

use std::net::SocketAddr;

use clap::Parser;
use echo_service::config::Settings;
use echo_service::http::HttpServer;
use tokio::net::TcpListener;

/// Start the service on an ephemeral port and return its address.
pub async fn spawn_server() -> SocketAddr {
    spawn_server_with(Settings::parse_from(["echo-service"])).await
}

/// Start the service with explicit settings.
pub async fn spawn_server_with(settings: Settings) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let server = HttpServer::new(settings);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Non-pooled client, one per test.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .expect("build client")
}
