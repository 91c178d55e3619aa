//! Static evaluation of non-terminal positions.
//!
//! ## Line pressure
//!
//! Each line is scored by who occupies it:
//! - only the perspective player: +4 for two pieces, +1 for one
//! - only the opponent: -4 / -1
//! - both sides, or nobody: 0
//!
//! ## Mobility
//!
//! In the movement phase the difference in available slide destinations is
//! added at weight 0.2. During placement every empty position is open to
//! both sides, so the term carries no information and is left out.

use serde::{Deserialize, Serialize};

use super::context::SearchContext;
use super::state::SearchState;
use crate::board::Topology;
use crate::core::{Phase, Player};
use crate::rules::{self, Occupancy};

/// Heuristic scoring seam for the search.
pub trait Evaluator: Send + Sync {
    /// Score `state` from `perspective`'s point of view. Higher is better.
    fn evaluate(&self, context: &SearchContext, state: &SearchState, perspective: Player) -> f64;
}

/// Default heuristic: line pressure plus movement-phase mobility.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineEvaluator {
    /// Value of an uncontested line holding two of a side's pieces.
    pub two_in_line: f64,
    /// Value of an uncontested line holding one piece.
    pub one_in_line: f64,
    /// Weight of the slide-destination difference.
    pub mobility_weight: f64,
}

impl Default for LineEvaluator {
    fn default() -> Self {
        Self {
            two_in_line: 4.0,
            one_in_line: 1.0,
            mobility_weight: 0.2,
        }
    }
}

impl LineEvaluator {
    /// Score any board, live or snapshot.
    pub fn score<T, O>(&self, topology: &T, board: &O, phase: Phase, perspective: Player) -> f64
    where
        T: Topology + ?Sized,
        O: Occupancy + ?Sized,
    {
        let opponent = perspective.other();
        let mut score = 0.0;

        for (_, line) in topology.lines() {
            let mut own = 0;
            let mut theirs = 0;
            for pos in line {
                match board.owner(pos) {
                    Some(p) if p == perspective => own += 1,
                    Some(_) => theirs += 1,
                    None => {}
                }
            }
            if own > 0 && theirs == 0 {
                score += self.pressure(own);
            } else if theirs > 0 && own == 0 {
                score -= self.pressure(theirs);
            }
        }

        if phase.is_movement() {
            let mine = rules::mobility(topology, board, perspective) as f64;
            let yours = rules::mobility(topology, board, opponent) as f64;
            score += self.mobility_weight * (mine - yours);
        }

        score
    }

    fn pressure(&self, pieces: u8) -> f64 {
        if pieces == 2 {
            self.two_in_line
        } else {
            self.one_in_line
        }
    }
}

impl Evaluator for LineEvaluator {
    fn evaluate(&self, context: &SearchContext, state: &SearchState, perspective: Player) -> f64 {
        self.score(context, state, state.phase(), perspective)
    }
}

/// Evaluate with the default weights.
#[must_use]
pub fn evaluate(context: &SearchContext, state: &SearchState, perspective: Player) -> f64 {
    LineEvaluator::default().evaluate(context, state, perspective)
}
