//! Formatting options.
//!
//! A single explicit value controls table output. Hosts resolve it
//! once (flag, then config file, then default) and thread it through;
//! nothing here reads ambient state.

use serde::{Deserialize, Serialize};

/// Options controlling table output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Skip cell padding; columns keep their natural width
    pub compact_tables: bool,
}

impl FormatOptions {
    /// Create default options (padded tables).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set compact mode.
    pub fn compact_tables(mut self, compact: bool) -> Self {
        self.compact_tables = compact;
        self
    }
}
