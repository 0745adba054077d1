//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status. `payload` is the full
    /// parsed body and `field_errors` is the list found under its `errors`
    /// key, when present.
    #[error("Server returned {status}: {message}")]
    Api {
        status: u16,
        message: String,
        payload: serde_json::Value,
        field_errors: Vec<serde_json::Value>,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status code, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Field-level validation errors reported by the server.
    pub fn field_errors(&self) -> &[serde_json::Value] {
        match self {
            ClientError::Api { field_errors, .. } => field_errors,
            _ => &[],
        }
    }
}
