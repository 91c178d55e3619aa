//! Value-type game state used only inside the search.
//!
//! Ownership is kept in an `im::Vector`, so `apply` produces a new state
//! that shares structure with its parent instead of aliasing it. The live
//! session is read once, in `from_session`, and never again.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::context::SearchContext;
use crate::board::Topology;
use crate::core::{owner_code, Move, Phase, Player, PositionId};
use crate::rules::{self, Occupancy};
use crate::session::Session;

/// Canonical state identity for the transposition cache.
///
/// Side to move, phase, placed count, then one byte per position in the
/// context's sorted id order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub to_move: Player,
    pub phase: Phase,
    pub placed: u8,
    pub cells: SmallVec<[u8; 16]>,
}

/// Immutable search node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchState {
    owners: Vector<Option<Player>>,
    to_move: Player,
    phase: Phase,
    placed: u8,
}

impl SearchState {
    /// Empty board in the placement phase.
    #[must_use]
    pub fn empty(context: &SearchContext, to_move: Player) -> Self {
        Self {
            owners: std::iter::repeat(None).take(context.position_count()).collect(),
            to_move,
            phase: Phase::for_placed(0, context.capacity()),
            placed: 0,
        }
    }

    /// Copy a live session's board, asking the search to move for `to_move`.
    #[must_use]
    pub fn from_session(session: &Session, to_move: Player) -> Self {
        Self {
            owners: session.board().owners().iter().copied().collect(),
            to_move,
            phase: session.phase(),
            placed: session.placed(),
        }
    }

    /// Build an arbitrary position from a list of owned positions.
    ///
    /// The placed count is the number of pieces listed; the phase follows
    /// from it.
    #[must_use]
    pub fn from_pieces(context: &SearchContext, pieces: &[(PositionId, Player)], to_move: Player) -> Self {
        let mut state = Self::empty(context, to_move);
        for &(pos, player) in pieces {
            state.owners.set(pos.index(), Some(player));
        }
        state.placed = rules::piece_count(context, &state) as u8;
        state.phase = Phase::for_placed(state.placed, context.capacity());
        state
    }

    /// Same board with a different side to move.
    #[must_use]
    pub fn with_to_move(mut self, player: Player) -> Self {
        self.to_move = player;
        self
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn placed(&self) -> u8 {
        self.placed
    }

    /// Owners in arena order.
    #[must_use]
    pub fn owners(&self) -> Vec<Option<Player>> {
        self.owners.iter().copied().collect()
    }

    /// Winner, if a line is complete.
    #[must_use]
    pub fn winner(&self, context: &SearchContext) -> Option<Player> {
        rules::winner(context, self)
    }

    /// Candidate moves for the side to move, in generation order.
    #[must_use]
    pub fn legal_moves(&self, context: &SearchContext) -> Vec<Move> {
        rules::legal_moves(context, self, self.phase, self.to_move)
    }

    /// Successor state after `mv`. The receiver is left untouched.
    ///
    /// Placements bump the placed count and flip the phase exactly at
    /// capacity; slides never change the count.
    #[must_use]
    pub fn apply(&self, context: &SearchContext, mv: Move) -> Self {
        let mut next = self.clone();
        rules::apply_move(&mut next, mv, self.to_move);
        if mv.is_place() {
            next.placed += 1;
        }
        if next.phase.is_placement() && next.placed >= context.capacity() {
            next.phase = Phase::Movement;
        }
        next.to_move = self.to_move.other();
        next
    }

    /// Canonical identity, independent of the path that reached it.
    #[must_use]
    pub fn fingerprint(&self, context: &SearchContext) -> Fingerprint {
        Fingerprint {
            to_move: self.to_move,
            phase: self.phase,
            placed: self.placed,
            cells: context
                .sorted_positions()
                .iter()
                .map(|&pos| owner_code(self.owner(pos)))
                .collect(),
        }
    }
}

impl Occupancy for SearchState {
    fn owner(&self, pos: PositionId) -> Option<Player> {
        self.owners[pos.index()]
    }

    fn set_owner(&mut self, pos: PositionId, owner: Option<Player>) {
        self.owners.set(pos.index(), owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardGraph;
    use crate::core::Ruleset;

    fn context() -> SearchContext {
        SearchContext::new(&BoardGraph::canonical(), &Ruleset::default())
    }

    #[test]
    fn test_apply_does_not_touch_parent() {
        let context = context();
        let root = SearchState::empty(&context, Player::A);
        let child = root.apply(&context, Move::Place { to: PositionId(0) });

        assert_eq!(root.owner(PositionId(0)), None);
        assert_eq!(root.placed(), 0);
        assert_eq!(child.owner(PositionId(0)), Some(Player::A));
        assert_eq!(child.placed(), 1);
        assert_eq!(child.to_move(), Player::B);
    }

    #[test]
    fn test_phase_flips_at_capacity() {
        let context = context();
        let mut state = SearchState::empty(&context, Player::A);
        for i in 0..6 {
            assert!(state.phase().is_placement());
            state = state.apply(&context, Move::Place { to: PositionId(i) });
        }
        assert_eq!(state.placed(), 6);
        assert!(state.phase().is_movement());
    }

    #[test]
    fn test_slide_keeps_placed_count() {
        let context = context();
        let pieces: Vec<_> = (0..6u8)
            .map(|i| (PositionId(i), if i % 2 == 0 { Player::A } else { Player::B }))
            .collect();
        let state = SearchState::from_pieces(&context, &pieces, Player::A);
        assert!(state.phase().is_movement());

        let mv = state.legal_moves(&context)[0];
        let next = state.apply(&context, mv);
        assert_eq!(next.placed(), 6);
        assert!(next.phase().is_movement());
    }

    #[test]
    fn test_fingerprint_ignores_path() {
        let context = context();
        let root = SearchState::empty(&context, Player::A);
        let a = root
            .apply(&context, Move::Place { to: PositionId(0) })
            .apply(&context, Move::Place { to: PositionId(1) })
            .apply(&context, Move::Place { to: PositionId(2) });
        let b = root
            .apply(&context, Move::Place { to: PositionId(2) })
            .apply(&context, Move::Place { to: PositionId(1) })
            .apply(&context, Move::Place { to: PositionId(0) });
        assert_eq!(a.fingerprint(&context), b.fingerprint(&context));

        let c = root
            .apply(&context, Move::Place { to: PositionId(1) })
            .apply(&context, Move::Place { to: PositionId(0) })
            .apply(&context, Move::Place { to: PositionId(2) });
        assert_ne!(a.fingerprint(&context), c.fingerprint(&context));
    }

    #[test]
    fn test_from_session_copies_board() {
        let mut session = Session::new();
        session.attempt("v1").unwrap();
        let state = SearchState::from_session(&session, Player::B);
        assert_eq!(state.owners(), session.board().owners().to_vec());
        assert_eq!(state.placed(), 1);
        assert_eq!(state.to_move(), Player::B);
    }
}
