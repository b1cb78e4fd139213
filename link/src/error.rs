//! Error types for tabula-link
//!
//! Transport-level failures surfaced by the client. Consumers that need
//! richer context (which action triggered the failure) wrap these in their
//! own error type.

use std::fmt;

/// Result type for link operations
pub type Result<T> = std::result::Result<T, LinkError>;

/// Errors that can occur while talking to the query service
#[derive(Debug)]
pub enum LinkError {
    /// Transport failure (connect, timeout, DNS, ...)
    NetworkError(String),

    /// Client was misconfigured (e.g. missing base URL)
    ConfigurationError(String),

    /// Response body could not be parsed
    SerializationError(String),

    /// The backend rejected or failed to execute a request
    ServerError { status_code: u16, message: String },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            LinkError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            LinkError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            LinkError::ServerError {
                status_code,
                message,
            } => write!(f, "Server error ({}): {}", status_code, message),
        }
    }
}

impl std::error::Error for LinkError {}

impl From<reqwest::Error> for LinkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            LinkError::NetworkError(err.to_string())
        } else if err.is_decode() {
            LinkError::SerializationError(err.to_string())
        } else {
            LinkError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        LinkError::SerializationError(err.to_string())
    }
}
