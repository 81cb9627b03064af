//! Configuration file loading (`.mdtables.toml`).
//!
//! The config file is optional. It is discovered by walking up from a
//! starting directory, nearest file wins. Callers merge it under their
//! own flags: the first non-absent value decides.
//!
//! ```toml
//! compact_tables = true
//! exclude = ["**/vendor/**"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::MdtablesError;
use crate::Result;

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = ".mdtables.toml";

/// Values read from `.mdtables.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Format tables without cell padding
    pub compact_tables: Option<bool>,
    /// Glob patterns to include
    pub include: Vec<String>,
    /// Glob patterns to exclude
    pub exclude: Vec<String>,
}

impl Config {
    /// Load a config file, returning `Ok(None)` when it does not exist.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(path).map_err(|e| MdtablesError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = toml::from_str(&raw).map_err(|e| MdtablesError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Some(config))
    }

    /// Discover and load the nearest config file at or above `start`.
    ///
    /// Returns `Ok(None)` when no directory on the way to the
    /// filesystem root carries a `.mdtables.toml`.
    pub fn discover(start: impl AsRef<Path>) -> Result<Option<Self>> {
        match Self::discover_path(start) {
            Some(path) => Self::load_from_path(path),
            None => Ok(None),
        }
    }

    /// Path the nearest config file would be loaded from, if any.
    pub fn discover_path(start: impl AsRef<Path>) -> Option<PathBuf> {
        let mut dir: Option<&Path> = Some(start.as_ref());

        while let Some(current) = dir {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                return Some(candidate);
            }
            dir = current.parent();
        }

        None
    }
}
