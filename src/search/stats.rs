//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes_visited: u64,

    /// Nodes scored by the evaluator or as terminal.
    pub leaves: u64,

    /// Cache probes that returned or narrowed a score.
    pub cache_hits: u64,

    /// Entries written to the cache.
    pub cache_stores: u64,

    /// Child loops cut short by alpha-beta.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u8,

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

    /// Fraction of visited nodes answered from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes_visited as f64
        }
    }
}
