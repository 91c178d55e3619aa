//! Per-search transposition cache.
//!
//! A score is only valid for the remaining depth it was computed at, so the
//! key pairs the state fingerprint with that depth. Scores found inside a
//! narrowed alpha-beta window are bounds, not exact values, and are tagged
//! as such.

use rustc_hash::FxHashMap;

use super::state::Fingerprint;

/// How a cached score relates to the true value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// True value is at least the score (a beta cutoff).
    Lower,
    /// True value is at most the score (nothing beat alpha).
    Upper,
}

impl Bound {
    /// Classify a fail-soft result against the window it was searched in.
    #[must_use]
    pub fn classify(score: f64, alpha: f64, beta: f64) -> Self {
        if score <= alpha {
            Self::Upper
        } else if score >= beta {
            Self::Lower
        } else {
            Self::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CacheEntry {
    pub score: f64,
    pub bound: Bound,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub depth: u8,
    pub fingerprint: Fingerprint,
}

/// Cache for one top-level search. Never shared between calls.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    map: FxHashMap<CacheKey, CacheEntry>,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn probe(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.map.get(key).copied()
    }

    /// Insert or overwrite. The latest search of a key is at least as
    /// informed as an earlier one at the same depth.
    #[inline]
    pub fn store(&mut self, key: CacheKey, entry: CacheEntry) {
        self.map.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
