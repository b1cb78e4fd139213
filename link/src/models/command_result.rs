use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Result grid of an executed statement.
///
/// An untyped matrix of strings: the executed command may not target a
/// known table, so no column metadata is attached. Consumers that want
/// labeled access must supply a column list themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Result rows, each an ordered sequence of raw string values
    pub rows: Vec<Vec<String>>,
}

impl CommandResult {
    /// Build a result grid from backend JSON rows.
    ///
    /// JSON strings are taken verbatim; any other scalar keeps its JSON
    /// rendering (`null`, `42`, `true`).
    pub fn from_json_rows(rows: Vec<Vec<JsonValue>>) -> Self {
        let mut converted = Vec::with_capacity(rows.len());
        for row in rows {
            let mut values = Vec::with_capacity(row.len());
            for value in row {
                values.push(render_value(value));
            }
            converted.push(values);
        }
        Self { rows: converted }
    }

    /// Number of rows in the grid
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.rows.iter()
    }

    /// Borrow the raw grid
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

fn render_value(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        other => other.to_string(),
    }
}
