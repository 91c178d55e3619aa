//! Board graph: a position arena plus lines stored as index triples.
//!
//! ## Construction
//!
//! `BoardGraphBuilder` accepts positions and lines by string id and checks
//! the invariants before anything is derived:
//! - position ids are unique
//! - every line names three distinct, known positions
//! - every position belongs to at least one line
//!
//! ## Adjacency
//!
//! Derived, never declared. Two positions are adjacent iff they are
//! consecutive within some line (endpoint and midpoint). The two endpoints
//! of a line are not adjacent through that line.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::topology::Topology;
use crate::core::{LineId, PositionId};
use crate::error::BoardError;

/// Rendering coordinate. Game logic never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance.
    #[must_use]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// A node of the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Stable string id used at the boundary.
    pub id: String,
    /// Where a renderer should draw it.
    pub point: Point,
}

/// An endpoint / midpoint / endpoint triple that wins when uniformly owned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: String,
    pub positions: [PositionId; 3],
}

/// Neighbour list. Six covers the densest node of the canonical board.
pub type Neighbors = SmallVec<[PositionId; 6]>;

/// Immutable board shape.
#[derive(Clone, Debug)]
pub struct BoardGraph {
    positions: Vec<Position>,
    lines: Vec<Line>,
    adjacency: Vec<Neighbors>,
    sorted: Vec<PositionId>,
    by_id: FxHashMap<String, PositionId>,
}

impl BoardGraph {
    /// Start building a custom graph.
    #[must_use]
    pub fn builder() -> BoardGraphBuilder {
        BoardGraphBuilder::new()
    }

    /// Derive adjacency, sort order and the id index from validated parts.
    fn assemble(positions: Vec<Position>, lines: Vec<Line>) -> Self {
        let mut adjacency: Vec<Neighbors> = vec![Neighbors::new(); positions.len()];
        let mut add_edge = |from: PositionId, to: PositionId| {
            let neighbors = &mut adjacency[from.index()];
            if !neighbors.contains(&to) {
                neighbors.push(to);
            }
        };
        for line in &lines {
            let [first, middle, last] = line.positions;
            add_edge(first, middle);
            add_edge(middle, first);
            add_edge(middle, last);
            add_edge(last, middle);
        }

        let mut sorted: Vec<PositionId> = (0..positions.len()).map(|i| PositionId(i as u8)).collect();
        sorted.sort_by(|a, b| positions[a.index()].id.cmp(&positions[b.index()].id));

        let by_id = positions
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), PositionId(i as u8)))
            .collect();

        Self {
            positions,
            lines,
            adjacency,
            sorted,
            by_id,
        }
    }

    /// Resolve a boundary id. Unknown ids are a caller bug and fail fast.
    pub fn position_id(&self, id: &str) -> Result<PositionId, BoardError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| BoardError::UnknownPosition { id: id.to_string() })
    }

    /// The position stored at `pos`.
    #[must_use]
    pub fn position(&self, pos: PositionId) -> &Position {
        &self.positions[pos.index()]
    }

    /// String id of `pos`.
    #[must_use]
    pub fn id_of(&self, pos: PositionId) -> &str {
        &self.positions[pos.index()].id
    }

    /// All positions in arena order.
    #[must_use]
    pub fn position_list(&self) -> &[Position] {
        &self.positions
    }

    /// All lines in declaration order.
    #[must_use]
    pub fn line_list(&self) -> &[Line] {
        &self.lines
    }

    /// Line metadata by id.
    #[must_use]
    pub fn line_info(&self, line: LineId) -> &Line {
        &self.lines[line.index()]
    }

    /// Adjacency by string id: every position one slide away from `id`.
    pub fn adjacency(&self, id: &str) -> Result<Vec<&str>, BoardError> {
        let pos = self.position_id(id)?;
        Ok(self.adjacency[pos.index()].iter().map(|&n| self.id_of(n)).collect())
    }

    /// The two positions of a line that lie farthest apart.
    ///
    /// Midpoints on the golden-ratio board are off-centre, so a winning
    /// stroke must be drawn between the true extremes, not the first and
    /// last entries.
    #[must_use]
    pub fn line_span(&self, line: LineId) -> [PositionId; 2] {
        let [first, second, third] = self.lines[line.index()].positions;
        let point = |p: PositionId| self.positions[p.index()].point;
        let first_second = point(first).distance_sq(point(second));
        let second_third = point(second).distance_sq(point(third));
        let first_third = point(first).distance_sq(point(third));

        if first_second >= second_third && first_second >= first_third {
            [first, second]
        } else if second_third >= first_second && second_third >= first_third {
            [second, third]
        } else {
            [first, third]
        }
    }
}

impl Topology for BoardGraph {
    fn position_count(&self) -> usize {
        self.positions.len()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, line: LineId) -> [PositionId; 3] {
        self.lines[line.index()].positions
    }

    fn neighbors(&self, pos: PositionId) -> &[PositionId] {
        &self.adjacency[pos.index()]
    }

    fn sorted_positions(&self) -> &[PositionId] {
        &self.sorted
    }
}

/// Builder for arbitrary lines-of-three topologies.
#[derive(Clone, Debug, Default)]
pub struct BoardGraphBuilder {
    positions: Vec<Position>,
    lines: Vec<(String, [String; 3])>,
}

impl BoardGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a position.
    pub fn position(mut self, id: impl Into<String>, point: Point) -> Self {
        self.positions.push(Position { id: id.into(), point });
        self
    }

    /// Declare a line as endpoint, midpoint, endpoint.
    pub fn line(mut self, id: impl Into<String>, positions: [&str; 3]) -> Self {
        self.lines.push((id.into(), positions.map(str::to_string)));
        self
    }

    /// Validate and derive the graph.
    pub fn build(self) -> Result<BoardGraph, BoardError> {
        if self.positions.len() > usize::from(u8::MAX) {
            return Err(BoardError::TooManyPositions {
                count: self.positions.len(),
            });
        }
        if self.lines.len() > usize::from(u8::MAX) {
            return Err(BoardError::TooManyLines {
                count: self.lines.len(),
            });
        }

        let mut index: FxHashMap<&str, PositionId> = FxHashMap::default();
        for (i, position) in self.positions.iter().enumerate() {
            if index.insert(position.id.as_str(), PositionId(i as u8)).is_some() {
                return Err(BoardError::DuplicatePosition {
                    id: position.id.clone(),
                });
            }
        }

        let mut covered = vec![false; self.positions.len()];
        let mut lines = Vec::with_capacity(self.lines.len());
        for (line_id, ids) in &self.lines {
            let mut resolved = [PositionId(0); 3];
            for (slot, id) in ids.iter().enumerate() {
                let pos = index.get(id.as_str()).copied().ok_or_else(|| {
                    BoardError::UnknownLinePosition {
                        line: line_id.clone(),
                        id: id.clone(),
                    }
                })?;
                if resolved[..slot].contains(&pos) {
                    return Err(BoardError::DegenerateLine {
                        line: line_id.clone(),
                        id: id.clone(),
                    });
                }
                resolved[slot] = pos;
                covered[pos.index()] = true;
            }
            lines.push(Line {
                id: line_id.clone(),
                positions: resolved,
            });
        }

        if let Some(orphan) = covered.iter().position(|&c| !c) {
            return Err(BoardError::OrphanPosition {
                id: self.positions[orphan].id.clone(),
            });
        }

        Ok(BoardGraph::assemble(self.positions, lines))
    }
}
