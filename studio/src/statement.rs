//! Mutation statement rendering
//!
//! Turns grid-level row diffs into SQL statement text. Row identity for
//! the WHERE clause is full equality over every originally-fetched column
//! value, not a primary key: generic metadata gives no key to assume, so
//! two rows with identical values are indistinguishable and a mutation
//! against one affects both.
//!
//! Values are interpolated into the statement with single quotes and no
//! escaping; a value containing a quote character corrupts the statement.
//! Both limitations are isolated here: swapping in a key-aware
//! [`RowPredicate`] or a parameterized builder touches no call sites.

use crate::row::LabeledRow;

/// Strategy for rendering the WHERE clause that identifies a row.
pub trait RowPredicate {
    /// Render a WHERE-clause fragment for the given row
    fn predicate(&self, row: &LabeledRow) -> String;
}

/// Default strategy: equality over every column value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullRowEquality;

impl RowPredicate for FullRowEquality {
    fn predicate(&self, row: &LabeledRow) -> String {
        build_equality_predicate(row)
    }
}

/// Render `col = 'value'` for each pair in row order, joined by ` AND `.
///
/// An empty row yields an empty string; the caller must guard against
/// building a statement with no WHERE clause.
pub fn build_equality_predicate(row: &LabeledRow) -> String {
    row.iter()
        .map(|(name, value)| format!("{} = '{}'", name, value))
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn build_assignments(row: &LabeledRow) -> String {
    row.iter()
        .map(|(name, value)| format!("{} = '{}'", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `DELETE FROM <table> WHERE <predicate(row)>` with the default strategy.
pub fn build_delete_statement(table_name: &str, row: &LabeledRow) -> String {
    build_delete_with(&FullRowEquality, table_name, row)
}

/// `DELETE FROM <table> WHERE <predicate(row)>` with a custom strategy.
pub fn build_delete_with<P: RowPredicate>(
    strategy: &P,
    table_name: &str,
    row: &LabeledRow,
) -> String {
    format!(
        "DELETE FROM {} WHERE {}",
        table_name,
        strategy.predicate(row)
    )
}

/// `UPDATE <table> SET <assignments(new)> WHERE <predicate(old)>` with the
/// default strategy.
pub fn build_update_statement(table_name: &str, old_row: &LabeledRow, new_row: &LabeledRow) -> String {
    build_update_with(&FullRowEquality, table_name, old_row, new_row)
}

/// `UPDATE <table> SET <assignments(new)> WHERE <predicate(old)>` with a
/// custom strategy.
pub fn build_update_with<P: RowPredicate>(
    strategy: &P,
    table_name: &str,
    old_row: &LabeledRow,
    new_row: &LabeledRow,
) -> String {
    format!(
        "UPDATE {} SET {} WHERE {}",
        table_name,
        build_assignments(new_row),
        strategy.predicate(old_row)
    )
}

/// A pending grid mutation: a delete (`new_row` absent) or an update.
///
/// Created at edit time, rendered once into statement text, and
/// discarded after the backend responds.
#[derive(Debug, Clone)]
pub struct Mutation {
    pub table_name: String,
    pub old_row: LabeledRow,
    pub new_row: Option<LabeledRow>,
}

impl Mutation {
    /// An in-place edit of a displayed row
    pub fn update(
        table_name: impl Into<String>,
        old_row: LabeledRow,
        new_row: LabeledRow,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            old_row,
            new_row: Some(new_row),
        }
    }

    /// A deletion of a displayed row
    pub fn delete(table_name: impl Into<String>, old_row: LabeledRow) -> Self {
        Self {
            table_name: table_name.into(),
            old_row,
            new_row: None,
        }
    }

    /// Render the statement with the default predicate strategy.
    pub fn statement(&self) -> String {
        self.statement_with(&FullRowEquality)
    }

    /// Render the statement with a custom predicate strategy.
    pub fn statement_with<P: RowPredicate>(&self, strategy: &P) -> String {
        match &self.new_row {
            Some(new_row) => {
                build_update_with(strategy, &self.table_name, &self.old_row, new_row)
            }
            None => build_delete_with(strategy, &self.table_name, &self.old_row),
        }
    }
}

/// `INSERT INTO <table> (<names>) VALUES (<values>)`, in row order.
pub fn build_insert_statement(table_name: &str, row: &LabeledRow) -> String {
    let names = row.iter().map(|(n, _)| n).collect::<Vec<_>>().join(", ");
    let values = row
        .iter()
        .map(|(_, v)| format!("'{}'", v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO {} ({}) VALUES ({})", table_name, names, values)
}
