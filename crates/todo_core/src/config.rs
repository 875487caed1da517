//! Session configuration.
//!
//! # Responsibility
//! - Resolve where the three store files live.
//! - Carry logging options from the front-end into core bootstrap.
//!
//! # Invariants
//! - File names are fixed: `tasks.json`, `history.json`, `settings.json`.
//! - The default data directory is the process working directory.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const TASKS_FILE_NAME: &str = "tasks.json";
pub const HISTORY_FILE_NAME: &str = "history.json";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Locations of the store files for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub tasks: PathBuf,
    pub history: PathBuf,
    pub settings: PathBuf,
}

impl StorePaths {
    /// Resolves the fixed file names against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            tasks: dir.join(TASKS_FILE_NAME),
            history: dir.join(HISTORY_FILE_NAME),
            settings: dir.join(SETTINGS_FILE_NAME),
        }
    }
}

impl Default for StorePaths {
    /// Bare file names, resolved by the OS against the working directory.
    fn default() -> Self {
        Self {
            tasks: PathBuf::from(TASKS_FILE_NAME),
            history: PathBuf::from(HISTORY_FILE_NAME),
            settings: PathBuf::from(SETTINGS_FILE_NAME),
        }
    }
}

/// Front-end supplied options for one process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the store files. `None` means working directory.
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logs.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn store_paths(&self) -> StorePaths {
        match &self.data_dir {
            Some(dir) => StorePaths::in_dir(dir),
            None => StorePaths::default(),
        }
    }
}
