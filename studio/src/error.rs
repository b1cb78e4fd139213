//! Error types for tabula-studio
//!
//! Every failure is recovered at the boundary of the action that
//! triggered it (one edit, one run) and reported to the operator; no
//! failure leaves a store partially updated.

use std::fmt;
use tabula_link::LinkError;

/// Result type for studio operations
pub type Result<T> = std::result::Result<T, StudioError>;

/// Errors that can occur in the workbench core
#[derive(Debug)]
pub enum StudioError {
    /// Error from the tabula-link transport layer
    LinkError(LinkError),

    /// Table/column metadata could not be fetched
    MetadataUnavailable(String),

    /// The named table is unknown to the metadata collaborator
    TableNotFound(String),

    /// A raw row's length disagrees with the known column count
    RowShapeMismatch { expected: usize, actual: usize },

    /// The backend rejected or failed to execute a statement
    QueryExecution(LinkError),

    /// A statement could not be built from the given rows
    StatementError(String),

    /// Command history could not be read or persisted
    HistoryError(String),

    /// File I/O error
    FileError(String),

    /// Configuration file error
    ConfigurationError(String),
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioError::LinkError(e) => write!(f, "{}", e),
            StudioError::MetadataUnavailable(msg) => {
                write!(f, "Table metadata unavailable: {}", msg)
            }
            StudioError::TableNotFound(name) => write!(f, "Unknown table: {}", name),
            StudioError::RowShapeMismatch { expected, actual } => write!(
                f,
                "Row shape mismatch: expected {} values, got {}",
                expected, actual
            ),
            StudioError::QueryExecution(e) => write!(f, "Query execution failed: {}", e),
            StudioError::StatementError(msg) => write!(f, "Statement error: {}", msg),
            StudioError::HistoryError(msg) => write!(f, "History error: {}", msg),
            StudioError::FileError(msg) => write!(f, "File error: {}", msg),
            StudioError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for StudioError {}

impl From<LinkError> for StudioError {
    fn from(err: LinkError) -> Self {
        StudioError::LinkError(err)
    }
}

impl From<std::io::Error> for StudioError {
    fn from(err: std::io::Error) -> Self {
        StudioError::FileError(err.to_string())
    }
}

impl From<toml::de::Error> for StudioError {
    fn from(err: toml::de::Error) -> Self {
        StudioError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}
