//! # tabula-link: Tabula query service client
//!
//! HTTP client library for the Tabula query service. Exposes the three
//! backend operations the workbench is built on:
//!
//! - **Table metadata**: `GET /db` returns tables with their ordered columns
//! - **Row fetch**: `GET /db/{table}/rows?offset&limit` returns one
//!   pagination window of raw positional rows
//! - **Statement execution**: `POST /db/query` runs arbitrary SQL and
//!   returns an untyped result grid
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tabula_link::TabulaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TabulaClient::builder()
//!         .base_url("http://localhost:8000")
//!         .build()?;
//!
//!     let tables = client.fetch_tables().await?;
//!     println!("{} tables", tables.len());
//!
//!     let result = client.execute("SELECT * FROM users").await?;
//!     println!("{} rows", result.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod query;

// Re-export main types for convenience
pub use client::{TabulaClient, TabulaClientBuilder};
pub use error::{LinkError, Result};
pub use models::{
    Column, CommandResult, Constraint, ErrorDetail, QueryRequest, Table, TablesResponse,
};
pub use query::QueryExecutor;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
