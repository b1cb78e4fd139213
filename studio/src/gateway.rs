//! Query execution seam
//!
//! The workbench drives statement execution through this trait so the
//! transport can be swapped for a scripted fake in tests. The gateway
//! itself never invalidates any table cache: it cannot know which tables
//! a free-text command affected.

use async_trait::async_trait;
use tabula_link::{CommandResult, TabulaClient};

/// Executes statement text against the backend query endpoint.
#[async_trait]
pub trait QueryGateway: Send + Sync {
    async fn execute(&self, sql: &str) -> tabula_link::Result<CommandResult>;
}

#[async_trait]
impl QueryGateway for TabulaClient {
    async fn execute(&self, sql: &str) -> tabula_link::Result<CommandResult> {
        TabulaClient::execute(self, sql).await
    }
}
