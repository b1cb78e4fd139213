//! Table metadata catalog
//!
//! Read-only snapshot of the metadata collaborator (`GET /db`). The
//! catalog is fetched once per session and treated as immutable; a
//! refresh replaces the whole snapshot.

use log::debug;
use tabula_link::{Table, TabulaClient};

use crate::error::{Result, StudioError};
use crate::row::{label_rows, LabeledRow};

/// Snapshot of the tables known to the backend.
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    tables: Vec<Table>,
}

impl TableCatalog {
    /// Fetch the catalog from the metadata endpoint.
    ///
    /// A fetch failure surfaces as [`StudioError::MetadataUnavailable`]:
    /// dependent row labeling cannot proceed, but nothing crashes.
    pub async fn load(client: &TabulaClient) -> Result<Self> {
        let tables = client
            .fetch_tables()
            .await
            .map_err(|e| StudioError::MetadataUnavailable(e.to_string()))?;
        debug!("[META] Catalog loaded with {} tables", tables.len());
        Ok(Self { tables })
    }

    /// Build a catalog from pre-fetched metadata.
    pub fn from_tables(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// All known tables
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| StudioError::TableNotFound(name.to_string()))
    }

    /// Label a batch of raw rows against the named table's columns.
    pub fn label_rows(&self, table_name: &str, raw_rows: &[Vec<String>]) -> Result<Vec<LabeledRow>> {
        let table = self.table(table_name)?;
        label_rows(raw_rows, &table.columns)
    }
}
