//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls into the recursive value function, root included.
    pub nodes_visited: u64,

    /// Nodes whose children were generated.
    pub nodes_expanded: u64,

    /// Calls to the evaluation function.
    pub evaluations: u64,

    /// Sibling loops cut short by alpha-beta pruning.
    pub cutoffs: u64,

    /// Deepest ply reached.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average number of children per expanded node.
    #[must_use]
    pub fn effective_branching(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.nodes_visited.saturating_sub(1) as f64 / self.nodes_expanded as f64
        }
    }
}
