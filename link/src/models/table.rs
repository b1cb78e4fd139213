use serde::{Deserialize, Serialize};

use super::column::Column;

/// Table metadata as reported by `GET /db`.
///
/// Identity is the table name; the column sequence fixes the positional
/// layout of every raw row fetched for this table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name (unique within the backend)
    pub name: String,

    /// Ordered column list
    pub columns: Vec<Column>,
}

impl Table {
    /// Get column names in declaration order
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            names.push(column.name.clone());
        }
        names
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
