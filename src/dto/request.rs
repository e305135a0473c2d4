//! Inbound request bodies and their boundary validation.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::validation;

/// Body of `POST /echo`.
#[derive(Debug, Clone, Deserialize)]
pub struct EchoRequest {
    /// Message to be echoed, 1 to 500 characters.
    pub message: String,
}

/// Extractor that deserializes an [`EchoRequest`] and applies the
/// structural bounds check before the handler runs.
///
/// Rejections (malformed JSON, missing field, out-of-bounds length) are
/// surfaced as HTTP 422 with a per-field detail list. The semantic
/// whitespace check is deliberately not applied here; it belongs to the
/// handler and maps to HTTP 400.
#[derive(Debug, Clone)]
pub struct ValidatedEcho(pub EchoRequest);

impl<S> FromRequest<S> for ValidatedEcho
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<EchoRequest>::from_request(req, state).await?;
        validation::check_bounds(&payload.message)?;
        Ok(Self(payload))
    }
}
