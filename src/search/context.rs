//! Immutable board snapshot for the search engine.
//!
//! Built once per search from the live graph. It copies out everything the
//! search reads (ids, sort order, adjacency, line triples, capacity) so the
//! search never touches the session again.

use crate::board::{BoardGraph, Neighbors, Topology};
use crate::core::{LineId, PositionId, Ruleset};
use crate::session::Session;

/// Search-side view of the board shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchContext {
    /// Position ids in arena order.
    ids: Vec<String>,
    /// Positions sorted by id; fixes placement order and fingerprint layout.
    sorted: Vec<PositionId>,
    adjacency: Vec<Neighbors>,
    lines: Vec<[PositionId; 3]>,
    capacity: u8,
}

impl SearchContext {
    /// Snapshot a graph under the given ruleset. Reads only.
    #[must_use]
    pub fn new(graph: &BoardGraph, rules: &Ruleset) -> Self {
        Self {
            ids: graph.position_list().iter().map(|p| p.id.clone()).collect(),
            sorted: graph.sorted_positions().to_vec(),
            adjacency: graph
                .positions()
                .map(|pos| graph.neighbors(pos).iter().copied().collect())
                .collect(),
            lines: graph.lines().map(|(_, triple)| triple).collect(),
            capacity: rules.capacity(),
        }
    }

    /// Snapshot the board a session is played on.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self::new(session.graph(), session.rules())
    }

    /// Placements before the movement phase.
    #[must_use]
    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    /// String id of `pos`.
    #[must_use]
    pub fn id_of(&self, pos: PositionId) -> &str {
        &self.ids[pos.index()]
    }

    /// Position ids in arena order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl Topology for SearchContext {
    fn position_count(&self) -> usize {
        self.ids.len()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, line: LineId) -> [PositionId; 3] {
        self.lines[line.index()]
    }

    fn neighbors(&self, pos: PositionId) -> &[PositionId] {
        &self.adjacency[pos.index()]
    }

    fn sorted_positions(&self) -> &[PositionId] {
        &self.sorted
    }
}
