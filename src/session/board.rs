//! Live ownership storage for a session.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PositionId};
use crate::rules::Occupancy;

/// Mutable per-position ownership, edited in place by the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    owners: Vec<Option<Player>>,
}

impl Board {
    /// An empty board with `position_count` positions.
    #[must_use]
    pub fn new(position_count: usize) -> Self {
        Self {
            owners: vec![None; position_count],
        }
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.owners.fill(None);
    }

    /// Owners in arena order.
    #[must_use]
    pub fn owners(&self) -> &[Option<Player>] {
        &self.owners
    }

    /// Pieces belonging to `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.owners.iter().filter(|&&o| o == Some(player)).count()
    }
}

impl Occupancy for Board {
    fn owner(&self, pos: PositionId) -> Option<Player> {
        self.owners[pos.index()]
    }

    fn set_owner(&mut self, pos: PositionId, owner: Option<Player>) {
        self.owners[pos.index()] = owner;
    }
}
