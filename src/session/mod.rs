//! The rules engine: a live, mutable game session.
//!
//! `Session` is an explicitly constructed value. Create one per game, drive
//! it with `attempt` (or `interact` / `play`), read it with `view`, and reset
//! it with `clear`. It is never shared with the search engine, which works
//! on its own copies of the ownership map.

pub mod board;
pub mod game;
pub mod view;

pub use board::Board;
pub use game::{Outcome, Rejection, Session};
pub use view::{LineView, MoveRecord, PositionView, Status, View};
