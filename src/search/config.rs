//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Phase;

/// Deepest search accepted. A win `ply` moves away scores
/// `WIN_SCORE - ply`, which must stay above anything the default evaluator
/// can return (nine lines at +4 plus mobility, under 40).
pub const MAX_DEPTH: u8 = 32;

/// Depth settings for the minimax search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed depth for every phase. Overrides the per-phase depths.
    pub max_depth: Option<u8>,

    /// Default depth while pieces are still being placed.
    pub placement_depth: u8,

    /// Default depth once pieces slide.
    /// Movement branches wider, so this is shallower.
    pub movement_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            placement_depth: 6,
            movement_depth: 4,
        }
    }
}

impl SearchConfig {
    /// Pin the depth for all phases.
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the placement-phase depth.
    pub fn with_placement_depth(mut self, depth: u8) -> Self {
        self.placement_depth = depth;
        self
    }

    /// Set the movement-phase depth.
    pub fn with_movement_depth(mut self, depth: u8) -> Self {
        self.movement_depth = depth;
        self
    }

    /// Depth to search from a root in `phase`, within `1..=MAX_DEPTH`.
    #[must_use]
    pub fn depth_for(&self, phase: Phase) -> u8 {
        let depth = self.max_depth.unwrap_or(match phase {
            Phase::Placement => self.placement_depth,
            Phase::Movement => self.movement_depth,
        });
        depth.clamp(1, MAX_DEPTH)
    }
}

/// Named depth presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// `(placement, movement)` depths for this preset.
    #[must_use]
    pub fn depths(self) -> (u8, u8) {
        match self {
            Self::Easy => (3, 3),
            Self::Medium => (5, 4),
            Self::Hard => (7, 6),
        }
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        let (placement, movement) = difficulty.depths();
        Self::default()
            .with_placement_depth(placement)
            .with_movement_depth(movement)
    }
}
