//! Main Tabula client with builder pattern.
//!
//! Provides the primary interface for talking to the query service:
//! table metadata, paginated row fetches and statement execution.

use crate::{
    error::{LinkError, Result},
    models::{CommandResult, ErrorDetail, Table, TablesResponse},
    query::QueryExecutor,
};
use log::debug;
use std::time::{Duration, Instant};

/// HTTP client for the Tabula query service.
///
/// Use [`TabulaClientBuilder`] to construct instances with custom
/// configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use tabula_link::TabulaClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TabulaClient::builder()
///     .base_url("http://localhost:8000")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
///
/// let tables = client.fetch_tables().await?;
/// let rows = client.fetch_rows("users", 0, 100).await?;
/// let result = client.execute("SELECT * FROM users").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TabulaClient {
    base_url: String,
    http_client: reqwest::Client,
    query_executor: QueryExecutor,
}

impl TabulaClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> TabulaClientBuilder {
        TabulaClientBuilder::new()
    }

    /// Fetch table and column metadata (`GET /db`).
    pub async fn fetch_tables(&self) -> Result<Vec<Table>> {
        let url = format!("{}/db", self.base_url);
        debug!("[META] Fetching table metadata from url={}", url);

        let start = Instant::now();
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        debug!(
            "[META] Response received in {:?}, status={}",
            start.elapsed(),
            status
        );

        if !status.is_success() {
            return Err(Self::server_error(status.as_u16(), response).await);
        }

        let tables_response = response.json::<TablesResponse>().await?;
        debug!("[META] Parsed {} tables", tables_response.tables.len());
        Ok(tables_response.tables)
    }

    /// Fetch one pagination window of raw rows
    /// (`GET /db/{table}/rows?offset&limit`).
    ///
    /// Rows come back as positional string arrays aligned to the table's
    /// column order; labeling is the consumer's concern.
    pub async fn fetch_rows(
        &self,
        table_name: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Vec<String>>> {
        let url = format!(
            "{}/db/{}/rows?offset={}&limit={}",
            self.base_url, table_name, offset, limit
        );
        debug!("[ROWS] Fetching from url={}", url);

        let start = Instant::now();
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        debug!(
            "[ROWS] Response received in {:?}, status={}",
            start.elapsed(),
            status
        );

        if !status.is_success() {
            return Err(Self::server_error(status.as_u16(), response).await);
        }

        let rows = response.json::<Vec<Vec<String>>>().await?;
        debug!("[ROWS] Parsed {} rows for table={}", rows.len(), table_name);
        Ok(rows)
    }

    /// Execute a statement (`POST /db/query`).
    pub async fn execute(&self, sql: &str) -> Result<CommandResult> {
        self.query_executor.execute(sql).await
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn server_error(status_code: u16, response: reqwest::Response) -> LinkError {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        LinkError::ServerError {
            status_code,
            message: ErrorDetail::message_from_body(&body),
        }
    }
}

/// Builder for configuring [`TabulaClient`] instances.
pub struct TabulaClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    connect_timeout: Duration,
}

impl TabulaClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Set the base URL of the query service
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<TabulaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| LinkError::ConfigurationError("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        // Keep-alive connections avoid a TCP handshake per grid action
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| LinkError::ConfigurationError(e.to_string()))?;

        let query_executor = QueryExecutor::new(base_url.clone(), http_client.clone());

        Ok(TabulaClient {
            base_url,
            http_client,
            query_executor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let result = TabulaClient::builder()
            .base_url("http://localhost:8000")
            .timeout(Duration::from_secs(10))
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_missing_url() {
        let result = TabulaClient::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = TabulaClient::builder()
            .base_url("http://localhost:8000/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
