//! Board graph: positions, lines and derived adjacency.
//!
//! - `graph`: the arena, the builder and the validation rules
//! - `geometry`: the canonical golden-ratio board
//! - `topology`: the read-only trait shared with the search snapshot

pub mod graph;
pub mod geometry;
pub mod topology;

pub use graph::{BoardGraph, BoardGraphBuilder, Line, Neighbors, Point, Position};
pub use geometry::{golden_cut, GOLDEN_RATIO};
pub use topology::Topology;
