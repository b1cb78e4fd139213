use serde::{Deserialize, Serialize};

/// Request payload for `POST /db/query`.
///
/// The statement text is sent verbatim; the client performs no SQL
/// parsing or validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// SQL statement text
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}
