//! Opponent search: minimax with alpha-beta pruning over value snapshots.
//!
//! The search never sees the live session. `SearchContext` copies the board
//! shape once, `SearchState` copies the ownership map, and everything after
//! that runs on those copies through the same rules functions the session
//! uses.

pub mod cache;
pub mod config;
pub mod context;
pub mod evaluator;
pub mod minimax;
pub mod state;
pub mod stats;

pub use cache::{Bound, CacheEntry, CacheKey, TranspositionCache};
pub use config::{Difficulty, SearchConfig, MAX_DEPTH};
pub use context::SearchContext;
pub use evaluator::{evaluate, Evaluator, LineEvaluator};
pub use minimax::{choose_move, choose_move_for, MinimaxSearch, WIN_SCORE};
pub use state::{Fingerprint, SearchState};
pub use stats::SearchStats;
