//! Centralized error translation.
//!
//! Handlers return `Result<_, ApiError>`; this module is the only place
//! that maps failures to HTTP status codes and response bodies. Every
//! error path produces a well-formed JSON envelope.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dto::response::{ErrorEnvelope, FieldIssue};
use crate::validation::EchoViolation;

/// Failure raised by a handler or an extractor.
#[derive(Debug)]
pub enum ApiError {
    /// Carries an explicit status code and client-visible message.
    Known { status: StatusCode, message: String },

    /// Request body violated declared field constraints.
    Structural { issues: Vec<FieldIssue> },

    /// Unclassified fault. The cause is logged server-side and never
    /// returned to the client.
    Internal { cause: String },
}

impl ApiError {
    pub fn known(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Known {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::known(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::known(StatusCode::NOT_FOUND, message)
    }

    pub fn structural(issues: Vec<FieldIssue>) -> Self {
        Self::Structural { issues }
    }

    pub fn internal(cause: impl Into<String>) -> Self {
        Self::Internal {
            cause: cause.into(),
        }
    }

    /// The fault `GET /error` raises to exercise the translator.
    pub fn simulated() -> Self {
        Self::known(
            StatusCode::INTERNAL_SERVER_ERROR,
            "This is a simulated error",
        )
    }
}

impl From<EchoViolation> for ApiError {
    fn from(violation: EchoViolation) -> Self {
        match &violation {
            EchoViolation::TooShort { .. } => Self::structural(vec![FieldIssue::message_field(
                violation.to_string(),
                "string_too_short",
            )]),
            EchoViolation::TooLong { .. } => Self::structural(vec![FieldIssue::message_field(
                violation.to_string(),
                "string_too_long",
            )]),
            EchoViolation::WhitespaceOnly => Self::bad_request(violation.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "json_invalid",
        };
        Self::structural(vec![FieldIssue::message_field(rejection.body_text(), kind)])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Known { status, message } => {
                let body = ErrorEnvelope {
                    error: message,
                    status_code: status.as_u16(),
                    detail: None,
                };
                (status, Json(body)).into_response()
            }
            Self::Structural { issues } => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let body = ErrorEnvelope {
                    error: "Request validation failed".to_string(),
                    status_code: status.as_u16(),
                    detail: Some(issues),
                };
                (status, Json(body)).into_response()
            }
            Self::Internal { cause } => {
                tracing::error!(cause = %cause, "Unhandled error while serving request");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ErrorEnvelope {
                    error: "Internal server error".to_string(),
                    status_code: status.as_u16(),
                    detail: None,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Result alias for handler functions.
pub type ApiResult<T> = Result<Json<T>, ApiError>;
