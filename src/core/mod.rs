//! Core types: players, phases, identifiers, moves, ruleset.
//!
//! These are plain values shared by the board graph, the live session and
//! the search engine. None of them carries a reference to mutable state.

pub mod player;
pub mod position;
pub mod action;
pub mod config;

pub use player::{owner_code, Phase, Player};
pub use position::{LineId, PositionId};
pub use action::Move;
pub use config::Ruleset;
