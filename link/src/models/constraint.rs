use serde::{Deserialize, Serialize};

/// A column-level constraint reported by the metadata endpoint.
///
/// Informational only; the client does not enforce constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Constraint kind as named by the backend (e.g. "PRIMARY KEY")
    pub constraint_type: String,

    /// Table the constraint belongs to
    pub table_name: String,

    /// Constrained column
    pub column_name: String,
}
