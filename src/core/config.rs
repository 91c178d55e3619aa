//! Ruleset configuration.
//!
//! The canonical game gives each side three pieces, so the placement phase
//! lasts six moves. Player A opens. Both are configurable for variants, and
//! `validate` checks a ruleset against the board it will be played on.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::BoardError;

/// Game-wide rules fixed at session creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Pieces each side places before the movement phase.
    pub pieces_per_player: u8,

    /// Side that moves first after every clear.
    pub starting_player: Player,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            pieces_per_player: 3,
            starting_player: Player::A,
        }
    }
}

impl Ruleset {
    /// Create a ruleset with custom piece count.
    #[must_use]
    pub fn with_pieces_per_player(mut self, pieces: u8) -> Self {
        self.pieces_per_player = pieces;
        self
    }

    /// Create a ruleset with a custom opening player.
    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Total placements before the movement phase begins.
    #[must_use]
    pub const fn capacity(&self) -> u8 {
        self.pieces_per_player.saturating_mul(2)
    }

    /// Check the ruleset fits a board with `position_count` positions.
    ///
    /// At least one position must stay empty once every piece is down,
    /// otherwise no slide could ever be legal.
    pub fn validate(&self, position_count: usize) -> Result<(), BoardError> {
        let capacity = usize::from(self.capacity());
        if self.pieces_per_player == 0 || capacity >= position_count {
            return Err(BoardError::InvalidRuleset {
                pieces_per_player: self.pieces_per_player,
                positions: position_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ruleset() {
        let rules = Ruleset::default();
        assert_eq!(rules.pieces_per_player, 3);
        assert_eq!(rules.capacity(), 6);
        assert_eq!(rules.starting_player, Player::A);
    }

    #[test]
    fn test_builder_pattern() {
        let rules = Ruleset::default()
            .with_pieces_per_player(2)
            .with_starting_player(Player::B);
        assert_eq!(rules.capacity(), 4);
        assert_eq!(rules.starting_player, Player::B);
    }

    #[test]
    fn test_validate() {
        assert!(Ruleset::default().validate(9).is_ok());
        assert!(Ruleset::default().validate(6).is_err());
        assert!(Ruleset::default().with_pieces_per_player(0).validate(9).is_err());
        assert!(Ruleset::default().with_pieces_per_player(4).validate(9).is_ok());
        assert!(Ruleset::default().with_pieces_per_player(5).validate(9).is_err());
    }

    #[test]
    fn test_serialization() {
        let rules = Ruleset::default().with_starting_player(Player::B);
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: Ruleset = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
