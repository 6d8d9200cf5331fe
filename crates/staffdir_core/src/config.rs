//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve store location and logging settings from `STAFFDIR_*` variables.
//! - Open the configured store.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - Without `STAFFDIR_DB_PATH` the store is in-memory and starts empty.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::{default_log_level, init_logging};
use rusqlite::Connection;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "STAFFDIR_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "STAFFDIR_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "STAFFDIR_LOG_DIR";

/// Resolved runtime configuration for the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file location; `None` selects an in-memory store.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute log directory; `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_VAR).map(PathBuf::from),
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_VAR).map(PathBuf::from),
        }
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays off.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log_dir is not valid UTF-8: {}", log_dir.display()))?;
        init_logging(&self.log_level, log_dir)?;
        Ok(true)
    }

    /// Opens the configured store with migrations applied.
    pub fn open_store(&self) -> DbResult<Connection> {
        match &self.db_path {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }
}
