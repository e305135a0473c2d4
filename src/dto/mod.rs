//! Request and response shapes for the JSON API.

pub mod request;
pub mod response;

pub use request::{EchoRequest, ValidatedEcho};
pub use response::{
    EchoMessage, EchoResponse, ErrorEnvelope, FieldIssue, HealthResponse, RootResponse,
    VersionResponse,
};
