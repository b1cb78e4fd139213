//! Workbench orchestration
//!
//! Ties the gateway, the table cache and the two command stores into one
//! context object. Constructed once and passed by reference to every
//! consumer; tests instantiate isolated instances instead of sharing a
//! global.
//!
//! Within one action the request, its response and the resulting state
//! update happen in order. Between independently triggered actions there
//! is no ordering guarantee: two in-flight mutations may complete in
//! either order, and the cache refetch triggered by the later completion
//! wins. That race is accepted; no optimistic-concurrency token exists.

use log::debug;
use tabula_link::CommandResult;

use crate::cache::{RowSource, TableDataCache};
use crate::error::{Result, StudioError};
use crate::gateway::QueryGateway;
use crate::result::CommandResultStore;
use crate::row::LabeledRow;
use crate::session::CommandSessionStore;
use crate::statement::{build_insert_statement, Mutation};

/// One operator's workbench: gateway, cache and stores.
pub struct Workbench<C: QueryGateway + RowSource + Clone> {
    gateway: C,
    cache: TableDataCache<C>,
    session: CommandSessionStore,
    results: CommandResultStore,
}

impl<C: QueryGateway + RowSource + Clone> Workbench<C> {
    /// Build a workbench around a client and a session store.
    pub fn new(client: C, session: CommandSessionStore) -> Self {
        Self {
            cache: TableDataCache::new(client.clone()),
            gateway: client,
            session,
            results: CommandResultStore::new(),
        }
    }

    /// Apply an in-place edit of a displayed row.
    ///
    /// Builds `UPDATE <table> SET <new> WHERE <old>` from the old/new row
    /// pair and sends it. On success every cached window of the table is
    /// invalidated so the next read reflects the change; on failure the
    /// error is surfaced and the cache is left untouched.
    pub async fn update_row(
        &mut self,
        table_name: &str,
        old_row: &LabeledRow,
        new_row: &LabeledRow,
    ) -> Result<()> {
        self.apply(Mutation::update(table_name, old_row.clone(), new_row.clone()))
            .await
    }

    /// Delete a displayed row, identified by all of its fetched values.
    pub async fn delete_row(&mut self, table_name: &str, row: &LabeledRow) -> Result<()> {
        self.apply(Mutation::delete(table_name, row.clone())).await
    }

    /// Send a pending mutation, consuming it.
    ///
    /// Refuses a mutation whose old row is empty: its predicate would
    /// render as an empty string and the statement would have no WHERE
    /// clause.
    pub async fn apply(&mut self, mutation: Mutation) -> Result<()> {
        if mutation.old_row.is_empty() {
            return Err(StudioError::StatementError(
                "refusing to build a mutation with an empty WHERE clause".into(),
            ));
        }
        let statement = mutation.statement();
        self.execute_mutation(&mutation.table_name, &statement).await
    }

    /// Insert a new row into a table.
    pub async fn insert_row(&mut self, table_name: &str, row: &LabeledRow) -> Result<()> {
        if row.is_empty() {
            return Err(StudioError::StatementError(
                "refusing to build an INSERT with no values".into(),
            ));
        }
        let statement = build_insert_statement(table_name, row);
        self.execute_mutation(table_name, &statement).await
    }

    /// Run a free-text command.
    ///
    /// On success the result grid replaces the result store's value and
    /// the text is appended to the persisted history. No table cache is
    /// invalidated on this path: there is no reliable table inference
    /// from arbitrary SQL, so refreshing cached grids is left to the
    /// operator. On failure neither store changes.
    pub async fn run_command(&mut self, text: &str) -> Result<&CommandResult> {
        let result = self
            .gateway
            .execute(text)
            .await
            .map_err(StudioError::QueryExecution)?;

        debug!("[RUN] Command returned {} rows", result.len());
        self.results.set_result(result);
        self.session.save_command(text)?;
        Ok(self.results.result())
    }

    /// Run the current workspace text.
    pub async fn run_current(&mut self) -> Result<&CommandResult> {
        let text = self.session.current_command().to_string();
        self.run_command(&text).await
    }

    /// The per-table row cache.
    pub fn cache(&self) -> &TableDataCache<C> {
        &self.cache
    }

    /// The command session store.
    pub fn session(&self) -> &CommandSessionStore {
        &self.session
    }

    /// Mutable access for the editing surface (workspace text, history).
    pub fn session_mut(&mut self) -> &mut CommandSessionStore {
        &mut self.session
    }

    /// The command result store.
    pub fn results(&self) -> &CommandResultStore {
        &self.results
    }

    async fn execute_mutation(&mut self, table_name: &str, statement: &str) -> Result<()> {
        self.gateway
            .execute(statement)
            .await
            .map_err(StudioError::QueryExecution)?;

        debug!(
            "[RUN] Mutation succeeded, invalidating cache for table={}",
            table_name
        );
        self.cache.invalidate(table_name).await;
        Ok(())
    }
}
