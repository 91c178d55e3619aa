//! # tahir
//!
//! Rules and opponent search for a two-phase alignment game played on a
//! nine-position golden-ratio board.
//!
//! ## Game
//!
//! Two players take turns placing three pieces each. Once all six are on
//! the board, turns become slides: pick one of your pieces, then move it
//! to an adjacent empty position. Three of a kind along any of the nine
//! lines wins.
//!
//! ## Design Principles
//!
//! 1. **One Rule Set**: Legality, move application and win detection live
//!    in `rules` as pure functions over two capability traits. The live
//!    session and the search both call them; neither keeps its own copy.
//!
//! 2. **Isolated Search**: The search works on value snapshots and never
//!    holds a reference to the session it was asked about.
//!
//! 3. **Deterministic**: Same snapshot, same player, same depth, same move.
//!
//! ## Modules
//!
//! - `core`: Players, phases, ids, moves, ruleset
//! - `board`: Board graph, canonical geometry, topology trait
//! - `rules`: Shared rules over `Topology` + `Occupancy`
//! - `session`: The live game state machine and its view
//! - `search`: Minimax with alpha-beta pruning and a transposition cache
//! - `error`: Crate error type

pub mod core;
pub mod board;
pub mod rules;
pub mod session;
pub mod search;
pub mod error;

// Re-export commonly used types
pub use crate::core::{LineId, Move, Phase, Player, PositionId, Ruleset};

pub use crate::board::{BoardGraph, BoardGraphBuilder, Point, Topology};

pub use crate::rules::Occupancy;

pub use crate::session::{Outcome, Rejection, Session, Status, View};

pub use crate::search::{
    choose_move, choose_move_for, Difficulty, Evaluator, LineEvaluator, MinimaxSearch,
    SearchConfig, SearchContext, SearchState, SearchStats,
};

pub use crate::error::BoardError;
