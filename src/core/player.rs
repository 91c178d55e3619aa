//! Players and game phases.
//!
//! ## Player
//!
//! The game is strictly two-sided: `Player::A` and `Player::B` alternate
//! after every accepted placement or slide.
//!
//! ## Phase
//!
//! `Placement` while fewer pieces than the ruleset's capacity have been
//! placed, `Movement` afterwards. The transition happens exactly once.

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The opposing side.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Compact encoding used in state fingerprints (0 is reserved for empty).
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Player::A => 1,
            Player::B => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "player A"),
            Player::B => write!(f, "player B"),
        }
    }
}

/// Encode an optional owner as a fingerprint byte.
#[inline]
#[must_use]
pub const fn owner_code(owner: Option<Player>) -> u8 {
    match owner {
        Some(player) => player.code(),
        None => 0,
    }
}

/// Game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Pieces are added to empty positions.
    #[default]
    Placement,
    /// Existing pieces slide to adjacent empty positions.
    Movement,
}

impl Phase {
    /// Phase implied by the number of pieces placed so far.
    #[inline]
    #[must_use]
    pub const fn for_placed(placed: u8, capacity: u8) -> Self {
        if placed < capacity {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Movement => write!(f, "movement"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_alternates() {
        assert_eq!(Player::A.other(), Player::B);
        assert_eq!(Player::B.other(), Player::A);
        assert_eq!(Player::A.other().other(), Player::A);
    }

    #[test]
    fn test_owner_codes_are_distinct() {
        assert_eq!(owner_code(None), 0);
        assert_eq!(owner_code(Some(Player::A)), 1);
        assert_eq!(owner_code(Some(Player::B)), 2);
    }

    #[test]
    fn test_phase_for_placed() {
        assert_eq!(Phase::for_placed(0, 6), Phase::Placement);
        assert_eq!(Phase::for_placed(5, 6), Phase::Placement);
        assert_eq!(Phase::for_placed(6, 6), Phase::Movement);
        assert!(Phase::for_placed(6, 6).is_movement());
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::B.to_string(), "player B");
        assert_eq!(Phase::Movement.to_string(), "movement");
    }
}
