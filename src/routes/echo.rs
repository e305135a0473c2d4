//! Echo endpoints.
//!
//! Two response modes are exposed. `POST /echo` is the canonical
//! metadata mode, returning the echoed message with its character count
//! and a response timestamp. `POST /v1/echo` is the simple mode kept
//! from the versioned API, returning the bare message. Both share one
//! validation contract: structural violations are rejected by the
//! [`ValidatedEcho`] extractor with 422, the whitespace-only rule maps
//! to 400 here.

use axum::Json;

use crate::dto::request::ValidatedEcho;
use crate::dto::response::{EchoMessage, EchoResponse};
use crate::error::ApiResult;
use crate::validation;

/// `POST /echo` — metadata mode.
pub async fn echo(ValidatedEcho(request): ValidatedEcho) -> ApiResult<EchoResponse> {
    let message = validation::validate_message(request.message)?;
    tracing::debug!(length = message.chars().count(), "Echoing message");
    Ok(Json(EchoResponse::new(message)))
}

/// `POST /v1/echo` — simple mode.
///
/// Logs the inbound message verbatim; redaction of user-supplied
/// content is a deployment concern, not applied here.
pub async fn echo_simple(ValidatedEcho(request): ValidatedEcho) -> ApiResult<EchoMessage> {
    tracing::info!(message = %request.message, "Received message to echo");
    let message = validation::validate_message(request.message)?;
    Ok(Json(EchoMessage { message }))
}
