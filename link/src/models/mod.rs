//! Data models for the tabula-link client library.
//!
//! Defines the wire structures of the query service: table metadata,
//! query requests, result grids and error payloads.

pub mod column;
pub mod command_result;
pub mod constraint;
pub mod error_detail;
pub mod query_request;
pub mod table;
pub mod tables_response;


pub use column::Column;
pub use command_result::CommandResult;
pub use constraint::Constraint;
pub use error_detail::ErrorDetail;
pub use query_request::QueryRequest;
pub use table::Table;
pub use tables_response::TablesResponse;
