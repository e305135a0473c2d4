//! Outbound response bodies.

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Settings;

/// Seconds since the Unix epoch, captured at response construction.
pub fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}

/// `GET /` response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl RootResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            message: "Service is running",
        }
    }
}

/// `GET /health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: f64,
    pub version: String,
}

impl HealthResponse {
    pub fn new(settings: &Settings) -> Self {
        Self {
            status: "healthy",
            timestamp: epoch_seconds(),
            version: settings.app_version.clone(),
        }
    }
}

/// `GET /version` response.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub name: String,
}

impl VersionResponse {
    pub fn new(settings: &Settings) -> Self {
        Self {
            version: settings.app_version.clone(),
            name: settings.app_name.clone(),
        }
    }
}

/// `POST /echo` success response (metadata mode).
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub echo: String,
    pub length: usize,
    pub timestamp: f64,
}

impl EchoResponse {
    /// Builds the response around the validated, untrimmed message.
    pub fn new(message: String) -> Self {
        Self {
            length: message.chars().count(),
            echo: message,
            timestamp: epoch_seconds(),
        }
    }
}

/// `POST /v1/echo` success response (simple mode).
#[derive(Debug, Serialize)]
pub struct EchoMessage {
    pub message: String,
}

/// Uniform JSON envelope for reporting any failure to a client.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<FieldIssue>>,
}

/// One structural validation issue, tied to a field path.
#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub msg: String,
    pub loc: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldIssue {
    /// Issue against the echo request's `message` field.
    pub fn message_field(msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            loc: vec!["body".to_string(), "message".to_string()],
            kind: kind.into(),
        }
    }
}
