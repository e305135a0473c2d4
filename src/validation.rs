//! Echo message validation.
//!
//! Validation runs in two tiers with distinct error codes:
//! - Structural: length bounds on the field itself, enforced at the
//!   deserialization boundary before a handler runs (HTTP 422).
//! - Semantic: content-level rule layered on top, checked inside the
//!   handler (HTTP 400). A length check alone admits all-whitespace
//!   strings, so this tier inspects the trimmed content.
//!
//! The trimmed view is used for the check only; a valid message is
//! returned untrimmed, byte-for-byte.

use thiserror::Error;

/// Minimum message length in characters.
pub const MIN_MESSAGE_CHARS: usize = 1;

/// Maximum message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Violations the echo validator can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EchoViolation {
    /// Message is shorter than the minimum (structural).
    #[error("String should have at least {min} character")]
    TooShort { min: usize },

    /// Message exceeds the maximum length (structural).
    #[error("String should have at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    /// Message has no non-whitespace content (semantic).
    #[error("Message cannot be empty or contain only whitespace")]
    WhitespaceOnly,
}

impl EchoViolation {
    /// True for violations of the field's declared bounds.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::TooShort { .. } | Self::TooLong { .. })
    }
}

/// Structural bounds check, applied at the transport boundary.
pub fn check_bounds(message: &str) -> Result<(), EchoViolation> {
    let chars = message.chars().count();
    if chars < MIN_MESSAGE_CHARS {
        return Err(EchoViolation::TooShort {
            min: MIN_MESSAGE_CHARS,
        });
    }
    if chars > MAX_MESSAGE_CHARS {
        return Err(EchoViolation::TooLong {
            max: MAX_MESSAGE_CHARS,
            actual: chars,
        });
    }
    Ok(())
}

/// Semantic check: the message must contain at least one non-whitespace
/// character. Returns the original, untrimmed message when valid.
pub fn validate_message(message: String) -> Result<String, EchoViolation> {
    if message.trim().is_empty() {
        return Err(EchoViolation::WhitespaceOnly);
    }
    Ok(message)
}
