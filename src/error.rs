//! Error types.
//!
//! Only genuinely invalid input is an error: an id that is not on the
//! board, or a graph/ruleset that breaks the construction invariants.
//! Illegal-but-foreseeable interactions are reported as
//! `session::Outcome::Rejected` instead.

/// Errors raised at the crate boundary.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("unknown position id `{id}`")]
    UnknownPosition { id: String },

    #[display("position id `{id}` declared more than once")]
    DuplicatePosition { id: String },

    #[display("line `{line}` references unknown position `{id}`")]
    UnknownLinePosition { line: String, id: String },

    #[display("line `{line}` repeats position `{id}`")]
    DegenerateLine { line: String, id: String },

    #[display("position `{id}` belongs to no line")]
    OrphanPosition { id: String },

    #[display("board has {count} positions, at most 255 are supported")]
    TooManyPositions { count: usize },

    #[display("board has {count} lines, at most 255 are supported")]
    TooManyLines { count: usize },

    #[display("{pieces_per_player} pieces per player does not fit a board of {positions} positions")]
    InvalidRuleset { pieces_per_player: u8, positions: usize },
}
