//! JSON file persistence for stores.
//!
//! # Responsibility
//! - Serialize stores to UTF-8 JSON files and read them back.
//! - Keep the best-effort contract: unreadable or malformed files leave the
//!   store untouched, write failures are not surfaced.
//!
//! # Invariants
//! - Every file holds a top-level JSON array.
//! - `save`/`load` never return errors; `try_save`/`try_load` report them.

use log::{debug, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod list;
mod settings;

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    NotAnArray {
        path: PathBuf,
    },
}

impl PersistError {
    /// File the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } | Self::NotAnArray { path } => path,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Json { .. } => "json",
            Self::NotAnArray { .. } => "not_an_array",
        }
    }
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "`{}` is not valid JSON: {source}", path.display())
            }
            Self::NotAnArray { path } => {
                write!(f, "`{}` does not hold a JSON array", path.display())
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::NotAnArray { .. } => None,
        }
    }
}

/// Store that can be written to and restored from a JSON file.
pub trait JsonPersist {
    /// Renders the store as its on-disk JSON value.
    fn to_json(&self) -> serde_json::Result<Value>;

    /// Replaces store state from a parsed top-level array.
    fn apply_json(&mut self, items: Vec<Value>);

    /// Writes the store to `path`, overwriting existing content.
    fn try_save(&self, path: &Path) -> PersistResult<()> {
        let value = self.to_json().map_err(|source| PersistError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        write_json(path, &value)
    }

    /// Reads `path` and applies it. On error the store is untouched.
    fn try_load(&mut self, path: &Path) -> PersistResult<()> {
        let items = read_array(path)?;
        self.apply_json(items);
        Ok(())
    }

    /// Best-effort save; failures are logged and dropped.
    fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match self.try_save(path) {
            Ok(()) => debug!(
                "event=store_save module=persist status=ok path={}",
                path.display()
            ),
            Err(err) => warn!(
                "event=store_save module=persist status=error error_code={} error={}",
                err.error_code(),
                err
            ),
        }
    }

    /// Best-effort load; a missing or malformed file keeps the current state.
    fn load(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(()) => debug!(
                "event=store_load module=persist status=ok path={}",
                path.display()
            ),
            Err(PersistError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(
                    "event=store_load module=persist status=skip reason=not_found path={}",
                    path.display()
                )
            }
            Err(err) => warn!(
                "event=store_load module=persist status=skip error_code={} error={}",
                err.error_code(),
                err
            ),
        }
    }
}

fn write_json(path: &Path, value: &Value) -> PersistResult<()> {
    let mut body = serde_json::to_string_pretty(value).map_err(|source| PersistError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    body.push('\n');

    std::fs::write(path, body).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_array(path: &Path) -> PersistResult<Vec<Value>> {
    let raw = std::fs::read(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_slice(&raw).map_err(|source| PersistError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(PersistError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}
