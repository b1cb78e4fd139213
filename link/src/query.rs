//! SQL statement execution with HTTP transport.

use crate::{
    error::{LinkError, Result},
    models::{CommandResult, ErrorDetail, QueryRequest},
};
use log::{debug, warn};
use serde_json::Value as JsonValue;
use std::time::Instant;

/// Handles statement execution via `POST /db/query`.
///
/// One request per statement, no automatic retry: a failed execution is
/// reported to the caller, who decides whether to re-issue the action.
#[derive(Clone)]
pub struct QueryExecutor {
    base_url: String,
    http_client: reqwest::Client,
}

impl QueryExecutor {
    pub(crate) fn new(base_url: String, http_client: reqwest::Client) -> Self {
        Self {
            base_url,
            http_client,
        }
    }

    /// Execute a statement and parse the response into a result grid.
    ///
    /// The executor never touches any table cache; invalidation is the
    /// caller's responsibility since an arbitrary statement gives no
    /// reliable way to know which tables it affected.
    pub async fn execute(&self, sql: &str) -> Result<CommandResult> {
        let request = QueryRequest::new(sql);

        let sql_preview = if sql.len() > 80 {
            format!("{}...", &sql[..80])
        } else {
            sql.to_string()
        };
        debug!(
            "[QUERY] Executing: \"{}\" (len={})",
            sql_preview.replace('\n', " "),
            sql.len()
        );

        let url = format!("{}/db/query", self.base_url);
        let start = Instant::now();
        let response = self.http_client.post(&url).json(&request).send().await?;

        let status = response.status();
        debug!(
            "[QUERY] Response received: status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        if status.is_success() {
            let rows: Vec<Vec<JsonValue>> = response.json().await?;
            let result = CommandResult::from_json_rows(rows);
            debug!(
                "[QUERY] Success: rows={} total_ms={}",
                result.len(),
                start.elapsed().as_millis()
            );
            return Ok(result);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = ErrorDetail::message_from_body(&body);

        warn!(
            "[QUERY] Server error: status={} message=\"{}\"",
            status, message
        );

        Err(LinkError::ServerError {
            status_code: status.as_u16(),
            message,
        })
    }
}
