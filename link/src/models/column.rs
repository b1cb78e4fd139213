use serde::{Deserialize, Serialize};

use super::constraint::Constraint;

/// One column position in a table, as reported by `GET /db`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Backend type name (e.g. "TEXT", "INTEGER")
    pub data_type: String,

    /// Constraints on this column, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl Column {
    /// Create a column with no constraints
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            constraints: Vec::new(),
        }
    }
}
