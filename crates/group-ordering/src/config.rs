//! Configuration for the ordering engine

use serde::{Deserialize, Serialize};

/// Ordering configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Maximum entries the engine may hold (unbounded when `None`)
    pub max_entries: Option<usize>,
    /// Maximum edges in the expanded constraint graph (unbounded when `None`)
    pub max_edge_count: Option<usize>,
    /// Report unplaced entries on dependency conflicts
    pub cycle_diagnostics: bool,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            max_entries: None,
            max_edge_count: None,
            cycle_diagnostics: true,
        }
    }
}
