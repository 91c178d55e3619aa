//! Move representation.
//!
//! A move is either a placement onto an empty position or a slide of an
//! owned piece to an adjacent empty position. The search engine produces
//! moves; the session consumes them through one or two interactions.

use serde::{Deserialize, Serialize};

use super::position::PositionId;

/// A complete move for the player to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    /// Add a new piece at `to`.
    Place { to: PositionId },
    /// Move the piece at `from` to the adjacent empty `to`.
    Slide { from: PositionId, to: PositionId },
}

impl Move {
    /// Position the moved piece ends up on.
    #[must_use]
    pub const fn destination(self) -> PositionId {
        match self {
            Move::Place { to } | Move::Slide { to, .. } => to,
        }
    }

    /// Position vacated by the move, if any.
    #[must_use]
    pub const fn origin(self) -> Option<PositionId> {
        match self {
            Move::Place { .. } => None,
            Move::Slide { from, .. } => Some(from),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { to } => write!(f, "place {to}"),
            Move::Slide { from, to } => write!(f, "slide {from} -> {to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let place = Move::Place { to: PositionId(3) };
        assert_eq!(place.destination(), PositionId(3));
        assert_eq!(place.origin(), None);
        assert!(place.is_place());

        let slide = Move::Slide { from: PositionId(0), to: PositionId(1) };
        assert_eq!(slide.destination(), PositionId(1));
        assert_eq!(slide.origin(), Some(PositionId(0)));
        assert!(slide.is_slide());
    }

    #[test]
    fn test_serialization_is_tagged() {
        let slide = Move::Slide { from: PositionId(0), to: PositionId(1) };
        let json = serde_json::to_string(&slide).unwrap();
        assert!(json.contains("\"kind\":\"slide\""));
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slide);
    }
}
