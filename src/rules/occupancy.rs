//! Ownership storage capability.
//!
//! The live session keeps a mutable ownership vector and edits it in place;
//! the search engine keeps a persistent vector and copies it before every
//! edit. Both expose the same two operations, which is all the shared rules
//! need.

use crate::core::{Player, PositionId};

/// Per-position ownership.
pub trait Occupancy {
    /// Owner of the piece on `pos`, `None` if empty.
    fn owner(&self, pos: PositionId) -> Option<Player>;

    /// Replace the owner of `pos`.
    fn set_owner(&mut self, pos: PositionId, owner: Option<Player>);

    /// Whether no piece sits on `pos`.
    fn is_empty(&self, pos: PositionId) -> bool {
        self.owner(pos).is_none()
    }
}
