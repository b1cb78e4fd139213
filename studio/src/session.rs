//! Command session store
//!
//! Process-wide session state: the operator's current workspace text and
//! an append-only history of executed commands, persisted to a JSON file
//! of `{ "command": ... }` entries. History is loaded once at startup and
//! rewritten in full on every append; the store lives for the process
//! lifetime and is never explicitly torn down.

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};

/// Default number of entries kept in the persisted file.
pub const DEFAULT_PERSISTED_HISTORY: usize = 1000;

/// One persisted history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HistoryEntry {
    command: String,
}

/// Workspace text plus persisted command history.
pub struct CommandSessionStore {
    /// History file path
    path: PathBuf,

    /// Cap on persisted entries; in-memory history is unbounded
    max_persisted: usize,

    current_command: String,
    history: Vec<String>,
}

impl CommandSessionStore {
    /// Open a session store backed by the default history file
    /// (`~/.tabula/history.json`).
    pub fn new() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let path = PathBuf::from(home).join(".tabula").join("history.json");
        Self::open(path)
    }

    /// Open a session store backed by a custom history file.
    ///
    /// A missing or malformed file loads as empty history rather than
    /// failing: persisted state has no schema versioning, so unreadable
    /// data is treated as "no history".
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let history = Self::load_history(&path);
        Self {
            path,
            max_persisted: DEFAULT_PERSISTED_HISTORY,
            current_command: String::new(),
            history,
        }
    }

    /// Cap the number of entries rewritten to disk.
    pub fn with_max_persisted(mut self, max: usize) -> Self {
        self.max_persisted = max;
        self
    }

    fn load_history(path: &Path) -> Vec<String> {
        if !path.exists() {
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("[HISTORY] Failed to read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&contents) {
            Ok(entries) => entries.into_iter().map(|e| e.command).collect(),
            Err(e) => {
                warn!(
                    "[HISTORY] Malformed history file {}, starting empty: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// The operator's current, not-yet-executed workspace text.
    pub fn current_command(&self) -> &str {
        &self.current_command
    }

    /// Replace the workspace text. Touches neither history nor disk.
    pub fn set_current_command(&mut self, text: impl Into<String>) {
        self.current_command = text.into();
    }

    /// Executed commands, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Append an executed command and persist the full history
    /// synchronously before returning.
    ///
    /// No deduplication and no empty-command filtering: history records
    /// exactly what was executed, in order. If the write fails the
    /// in-memory append is rolled back so memory and disk stay in step.
    pub fn save_command(&mut self, command: impl Into<String>) -> Result<()> {
        self.history.push(command.into());
        if let Err(e) = self.persist() {
            self.history.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Drop all history, in memory and on disk.
    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| StudioError::HistoryError(format!("Failed to remove history file: {}", e)))?;
        }
        Ok(())
    }

    /// History file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StudioError::HistoryError(format!("Failed to create history dir: {}", e)))?;
        }

        let skip = self.history.len().saturating_sub(self.max_persisted);
        let entries: Vec<HistoryEntry> = self
            .history
            .iter()
            .skip(skip)
            .map(|command| HistoryEntry {
                command: command.clone(),
            })
            .collect();

        let contents = serde_json::to_string(&entries)
            .map_err(|e| StudioError::HistoryError(format!("Failed to encode history: {}", e)))?;

        std::fs::write(&self.path, contents)
            .map_err(|e| StudioError::HistoryError(format!("Failed to write history file: {}", e)))
    }
}

impl Default for CommandSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn test_history_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = CommandSessionStore::open(&path);
        store.save_command("SELECT 1").unwrap();
        store.save_command("SELECT 2").unwrap();
        drop(store);

        let reopened = CommandSessionStore::open(&path);
        assert_eq!(reopened.history(), &["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_no_dedup_and_empty_allowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = CommandSessionStore::open(&path);
        store.save_command("SELECT 1").unwrap();
        store.save_command("SELECT 1").unwrap();
        store.save_command("").unwrap();

        assert_eq!(store.history(), &["SELECT 1", "SELECT 1", ""]);
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = CommandSessionStore::open(&path);
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_persisted_format_is_command_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = CommandSessionStore::open(&path);
        store.save_command("SELECT 1").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, r#"[{"command":"SELECT 1"}]"#);
    }

    #[test]
    fn test_persisted_history_is_capped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = CommandSessionStore::open(&path).with_max_persisted(2);
        store.save_command("SELECT 1").unwrap();
        store.save_command("SELECT 2").unwrap();
        store.save_command("SELECT 3").unwrap();

        // In-memory history keeps everything
        assert_eq!(store.history().len(), 3);

        // Disk keeps the last two
        let reopened = CommandSessionStore::open(&path);
        assert_eq!(reopened.history(), &["SELECT 2", "SELECT 3"]);
    }

    #[test]
    fn test_failed_persist_rolls_back_memory() {
        let dir = tempdir().unwrap();
        // A directory at the file path makes the write fail
        let path = dir.path().join("history.json");
        std::fs::create_dir_all(&path).unwrap();

        let mut store = CommandSessionStore::open(&path);
        assert!(store.save_command("SELECT 1").is_err());
        assert!(store.history().is_empty());
    }

    #[test]
    fn test_clear_history_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = CommandSessionStore::open(&path);
        store.save_command("SELECT 1").unwrap();
        assert!(path.exists());

        store.clear_history().unwrap();
        assert!(store.history().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_workspace_text_does_not_touch_history() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = CommandSessionStore::open(&path);
        store.set_current_command("SELECT * FROM users");

        assert_eq!(store.current_command(), "SELECT * FROM users");
        assert!(store.history().is_empty());
        assert!(!path.exists());
    }
}
