//! Read-only game view handed to the presentation layer.
//!
//! A `View` is a plain value: string ids, owners and coordinates, with no
//! references back into the session.

use serde::{Deserialize, Serialize};

use crate::board::Point;
use crate::core::{Phase, Player};

/// Game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Won(Player),
}

impl Status {
    /// The winner, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Status::Playing => None,
            Status::Won(player) => Some(player),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Playing => write!(f, "playing"),
            Status::Won(player) => write!(f, "{player} wins"),
        }
    }
}

/// The most recent accepted move, by string id. Display only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MoveRecord {
    Place { to: String },
    Slide { from: String, to: String },
}

/// One board position with its current owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionView {
    pub id: String,
    pub point: Point,
    pub owner: Option<Player>,
}

/// One line by string ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    pub id: String,
    pub positions: [String; 3],
}

/// Complete observable game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Every position in arena order.
    pub positions: Vec<PositionView>,

    /// Every line in declaration order.
    pub lines: Vec<LineView>,

    pub status: Status,

    /// Side whose interaction is expected next.
    pub active_player: Player,

    pub phase: Phase,

    /// Pieces placed since the last clear.
    pub placed: u8,

    /// Selected piece awaiting a destination (movement phase only).
    pub pending_origin: Option<String>,

    /// Empty neighbours of the pending origin; empty without one.
    pub legal_destinations: Vec<String>,

    pub last_move: Option<MoveRecord>,

    /// Line that decided the game.
    pub winning_line: Option<String>,

    /// The two farthest-apart positions of the winning line.
    pub win_span: Option<[String; 2]>,
}

impl View {
    /// Owner of the position with string id `id`.
    ///
    /// Returns `None` both for empty and for unknown positions.
    #[must_use]
    pub fn owner(&self, id: &str) -> Option<Player> {
        self.positions.iter().find(|p| p.id == id).and_then(|p| p.owner)
    }

    /// Owners in arena order.
    #[must_use]
    pub fn owners(&self) -> Vec<Option<Player>> {
        self.positions.iter().map(|p| p.owner).collect()
    }
}
