//! Position and line identifiers.
//!
//! Positions live in an arena owned by the board graph. Everything else in
//! the crate refers to them by `PositionId`, their index in that arena, so no
//! component ever holds a reference into another component's storage.
//!
//! String ids (`"v1"`, `"v1_v2"`, ...) exist only at the boundary and are
//! resolved through `BoardGraph::position_id`.

use serde::{Deserialize, Serialize};

/// Index of a position in the board graph's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionId(pub u8);

impl PositionId {
    /// Create a new position ID.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.0)
    }
}

/// Index of a line in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineId(pub u8);

impl LineId {
    /// Create a new line ID.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the declaration index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({})", self.0)
    }
}
