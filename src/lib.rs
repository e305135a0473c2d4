//! Minimal HTTP echo service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 ECHO SERVICE                  │
//!                    │                                               │
//!  Client Request    │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!  ──────────────────┼─▶│  http   │───▶│ routes  │───▶│validation│  │
//!                    │  │ server  │    │handlers │    │          │  │
//!                    │  └─────────┘    └────┬────┘    └──────────┘  │
//!                    │                      │                       │
//!  Client Response   │  ┌─────────┐    ┌────▼────┐                  │
//!  ◀─────────────────┼──│  error  │◀───│   dto   │                  │
//!                    │  │translate│    │ shapes  │                  │
//!                    │  └─────────┘    └─────────┘                  │
//!                    │                                               │
//!                    │  Cross-cutting: config (env settings),        │
//!                    │  tracing + request IDs, CORS, timeouts        │
//!                    └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod http;
pub mod routes;
pub mod validation;

pub use config::Settings;
pub use error::ApiError;
pub use http::HttpServer;
