//! Labeled rows
//!
//! A raw row is an ordered sequence of string values, positionally
//! aligned to its table's columns. Labeling zips position to column name,
//! keeping the column order intact so statement rendering stays
//! deterministic.

use tabula_link::Column;

use crate::error::{Result, StudioError};

/// A row as column-name → value pairs, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledRow {
    entries: Vec<(String, String)>,
}

impl LabeledRow {
    /// Empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (name, value) pairs, keeping their order
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    /// Append a (name, value) pair
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Value for a column name, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate (name, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the row holds no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Label a raw positional row against a column list.
///
/// Fails with [`StudioError::RowShapeMismatch`] when the lengths disagree;
/// a partially-labeled row is never produced.
pub fn label_row(raw: &[String], columns: &[Column]) -> Result<LabeledRow> {
    if raw.len() != columns.len() {
        return Err(StudioError::RowShapeMismatch {
            expected: columns.len(),
            actual: raw.len(),
        });
    }

    let mut row = LabeledRow::new();
    for (column, value) in columns.iter().zip(raw) {
        row.push(column.name.clone(), value.clone());
    }
    Ok(row)
}

/// Label a batch of raw rows. Any shape mismatch fails the whole batch.
pub fn label_rows(raw_rows: &[Vec<String>], columns: &[Column]) -> Result<Vec<LabeledRow>> {
    let mut labeled = Vec::with_capacity(raw_rows.len());
    for raw in raw_rows {
        labeled.push(label_row(raw, columns)?);
    }
    Ok(labeled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![Column::new("id", "INTEGER"), Column::new("name", "TEXT")]
    }

    #[test]
    fn test_label_row_preserves_order_and_values() {
        let raw = vec!["1".to_string(), "alice".to_string()];
        let row = label_row(&raw, &columns()).unwrap();

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("id"), Some("1"));
        assert_eq!(row.get("name"), Some("alice"));

        let order: Vec<&str> = row.iter().map(|(n, _)| n).collect();
        assert_eq!(order, vec!["id", "name"]);
    }

    #[test]
    fn test_label_row_rejects_shape_mismatch() {
        let raw = vec!["1".to_string()];
        let err = label_row(&raw, &columns()).unwrap_err();
        match err {
            StudioError::RowShapeMismatch { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_label_rows_fails_whole_batch() {
        let raw_rows = vec![
            vec!["1".to_string(), "alice".to_string()],
            vec!["2".to_string()],
        ];
        assert!(label_rows(&raw_rows, &columns()).is_err());
    }

    #[test]
    fn test_empty_row_against_empty_columns() {
        let row = label_row(&[], &[]).unwrap();
        assert!(row.is_empty());
    }
}
