//! Read-only view of a board's shape.
//!
//! Both the live `BoardGraph` and the search engine's `SearchContext`
//! implement `Topology`, so the shared rules in `crate::rules` can run
//! against either without caring which one owns the data.

use crate::core::{LineId, PositionId};

/// Positions, lines-of-three and slide adjacency.
pub trait Topology {
    /// Number of positions in the arena.
    fn position_count(&self) -> usize;

    /// Number of winning lines.
    fn line_count(&self) -> usize;

    /// The three positions of a line, endpoint / midpoint / endpoint.
    fn line(&self, line: LineId) -> [PositionId; 3];

    /// Positions reachable by one slide from `pos`, in insertion order.
    fn neighbors(&self, pos: PositionId) -> &[PositionId];

    /// Positions sorted by their string id.
    fn sorted_positions(&self) -> &[PositionId];

    // === Provided ===

    /// All positions in arena order.
    fn positions(&self) -> impl Iterator<Item = PositionId> {
        (0..self.position_count()).map(|i| PositionId(i as u8))
    }

    /// All lines in declaration order.
    fn lines(&self) -> impl Iterator<Item = (LineId, [PositionId; 3])> {
        (0..self.line_count()).map(move |i| {
            let id = LineId(i as u8);
            (id, self.line(id))
        })
    }

    /// Whether a single slide connects `a` and `b`.
    fn is_adjacent(&self, a: PositionId, b: PositionId) -> bool {
        self.neighbors(a).contains(&b)
    }
}
