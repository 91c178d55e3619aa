//! Rules shared by the live session and the search engine.
//!
//! - `occupancy`: the storage capability both sides implement
//! - `engine`: win detection, legal move generation and move application
//!
//! Nothing here owns state; callers pass in the board shape and ownership.

pub mod engine;
pub mod occupancy;

pub use engine::{
    apply_move, destinations, is_legal, legal_moves, mobility, piece_count, winner, winning_line,
};
pub use occupancy::Occupancy;
