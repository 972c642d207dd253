//! Error types for double token issuing.
//!
//! Ordinary token invalidity is not an error: `check_validity` reports it
//! through its boolean result. These variants cover the faults that must reach
//! the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token issuing and verification errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signing primitive could not produce a token.
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// The token could not be parsed or verified.
    #[error("Token parse failed: {0}")]
    Parse(String),
}

impl TokenError {
    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Signing(_) => "TOKEN_SIGNING_FAILED",
            TokenError::Parse(_) => "TOKEN_PARSE_FAILED",
        }
    }
}

/// Error response for API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        // Primitive details stay server-side.
        let message = match err {
            TokenError::Signing(_) => "Failed to create token",
            TokenError::Parse(_) => "Invalid token",
        };
        Self::new(err.code(), message)
    }
}

impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias using TokenError.
pub type Result<T> = std::result::Result<T, TokenError>;
