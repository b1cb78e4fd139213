//! # tabula-studio: query/mutation reconciliation core
//!
//! The logic behind the Tabula admin workbench: turning in-place grid
//! edits into SQL statements, keeping per-table row caches consistent
//! after mutations, and maintaining the operator's command workspace,
//! persisted history and most-recent result grid.
//!
//! The surrounding UI (layout, theme, the editor widget, grid rendering)
//! and the backend's metadata endpoint are external collaborators; this
//! crate owns every piece of state they reconcile against.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tabula_link::TabulaClient;
//! use tabula_studio::{CommandSessionStore, LabeledRow, Workbench};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TabulaClient::builder()
//!         .base_url("http://localhost:8000")
//!         .build()?;
//!     let mut bench = Workbench::new(client, CommandSessionStore::new());
//!
//!     // Grid edit: name "alice" -> "bob"
//!     let old = LabeledRow::from_pairs([("id", "1"), ("name", "alice")]);
//!     let new = LabeledRow::from_pairs([("id", "1"), ("name", "bob")]);
//!     bench.update_row("users", &old, &new).await?;
//!
//!     // Free-text command from the workspace
//!     bench.session_mut().set_current_command("SELECT * FROM users");
//!     let result = bench.run_current().await?;
//!     println!("{} rows", result.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod result;
pub mod row;
pub mod session;
pub mod statement;
pub mod workbench;

// Re-export main types for convenience
pub use cache::{RowSource, TableDataCache, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use catalog::TableCatalog;
pub use config::StudioConfiguration;
pub use error::{Result, StudioError};
pub use gateway::QueryGateway;
pub use result::CommandResultStore;
pub use row::{label_row, label_rows, LabeledRow};
pub use session::CommandSessionStore;
pub use statement::{
    build_delete_statement, build_equality_predicate, build_insert_statement,
    build_update_statement, FullRowEquality, Mutation, RowPredicate,
};
pub use workbench::Workbench;
