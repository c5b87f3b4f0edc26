//! Expand/collapse state for the summary rows of the markets table.
//!
//! Keyed by group key (`ETH`, `BAT`, ...) rather than row position so a
//! row keeps its state when the feed reorders or adds groups.

use std::collections::HashMap;

/// Per-group expanded flags. Unknown groups are collapsed.
#[derive(Debug, Clone, Default)]
pub struct ExpandedRows {
    rows: HashMap<String, bool>,
}

impl ExpandedRows {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    pub fn is_expanded(&self, gem: &str) -> bool {
        self.rows.get(gem).copied().unwrap_or(false)
    }

    /// Flip a group's state and return the new one.
    pub fn toggle(&mut self, gem: &str) -> bool {
        let expanded = !self.is_expanded(gem);
        self.rows.insert(gem.to_string(), expanded);
        tracing::debug!(gem, expanded, "Toggled market row");
        expanded
    }

    /// Number of groups currently expanded.
    pub fn expanded_count(&self) -> usize {
        self.rows.values().filter(|expanded| **expanded).count()
    }
}
