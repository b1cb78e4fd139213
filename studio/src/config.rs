//! Configuration file management
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! url = "http://localhost:8000"  # Query service URL
//! timeout = 30                   # Request timeout in seconds
//!
//! [workspace]
//! history_path = "~/.tabula/history.json"
//! history_size = 1000            # Persisted history entries
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Studio configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudioConfiguration {
    /// Server connection settings
    pub server: Option<ServerConfig>,

    /// Workspace/history settings
    pub workspace: Option<WorkspaceConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Query service URL (e.g. http://localhost:8000)
    pub url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Command history file location
    pub history_path: Option<String>,

    /// Number of history entries kept on disk
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

fn default_timeout() -> u64 {
    30
}

fn default_history_size() -> usize {
    1000
}

fn default_server_url() -> String {
    "http://localhost:8000".to_string()
}

impl StudioConfiguration {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a malformed file is a
    /// configuration error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: StudioConfiguration = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Effective server URL.
    pub fn server_url(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.url.clone())
            .unwrap_or_else(default_server_url)
    }

    /// Effective request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.server
            .as_ref()
            .map(|s| s.timeout)
            .unwrap_or_else(default_timeout)
    }

    /// Effective history file path, `~`-expanded.
    pub fn history_path(&self) -> PathBuf {
        let raw = self
            .workspace
            .as_ref()
            .and_then(|w| w.history_path.clone())
            .unwrap_or_else(|| "~/.tabula/history.json".to_string());
        expand_path(&raw)
    }

    /// Effective persisted-history cap.
    pub fn history_size(&self) -> usize {
        self.workspace
            .as_ref()
            .map(|w| w.history_size)
            .unwrap_or_else(default_history_size)
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(path)
}
