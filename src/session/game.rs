//! The live game: the single source of truth for an in-progress match.
//!
//! ## State machine
//!
//! - `placement`: an interaction on an empty position places a piece for
//!   the active player, then the turn passes. When the placed count reaches
//!   the ruleset's capacity the phase becomes `movement`, once and for good.
//! - `movement`: interactions come in pairs. The first picks one of the
//!   active player's pieces as the pending origin. The second either
//!   deselects it (same position), replaces it (another own piece), is
//!   ignored (empty but not adjacent, or an opponent piece), or completes
//!   a slide onto an adjacent empty position, after which the turn passes.
//! - `won`: checked after every placement and every completed slide. No
//!   interaction is accepted until `clear`.
//!
//! Illegal interactions are silent no-ops reported as
//! `Outcome::Rejected`; only ids that are not on the board are errors.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::board::Board;
use super::view::{LineView, MoveRecord, PositionView, Status, View};
use crate::board::{BoardGraph, Topology};
use crate::core::{LineId, Move, Phase, Player, PositionId, Ruleset};
use crate::error::BoardError;
use crate::rules::{self, Occupancy};

/// Why an interaction changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The game has been won; only `clear` is accepted.
    GameOver,
    /// Placement onto an occupied position.
    Occupied,
    /// Movement phase, no piece selected, and the position is empty.
    NothingSelected,
    /// The position holds the opponent's piece.
    OpponentPiece,
    /// Slide destination is empty but not adjacent to the pending origin.
    NotAdjacent,
}

/// Effect of a single interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum Outcome {
    Placed { at: PositionId },
    Selected { at: PositionId },
    Deselected { at: PositionId },
    Reselected { from: PositionId, to: PositionId },
    Slid { from: PositionId, to: PositionId },
    Rejected(Rejection),
}

impl Outcome {
    /// Whether the interaction completed a move and passed the turn.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Outcome::Placed { .. } | Outcome::Slid { .. })
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    graph: BoardGraph,
    rules: Ruleset,
    board: Board,
    active: Player,
    placed: u8,
    pending: Option<PositionId>,
    last_move: Option<Move>,
    status: Status,
    winning_line: Option<LineId>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh game on the canonical board with the default ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::fresh(BoardGraph::canonical(), Ruleset::default())
    }

    /// A fresh game on a custom board.
    pub fn with_ruleset(graph: BoardGraph, rules: Ruleset) -> Result<Self, BoardError> {
        rules.validate(graph.position_count())?;
        Ok(Self::fresh(graph, rules))
    }

    fn fresh(graph: BoardGraph, rules: Ruleset) -> Self {
        let board = Board::new(graph.position_count());
        Self {
            graph,
            rules,
            board,
            active: rules.starting_player,
            placed: 0,
            pending: None,
            last_move: None,
            status: Status::Playing,
            winning_line: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }

    #[must_use]
    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[must_use]
    pub fn placed(&self) -> u8 {
        self.placed
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::for_placed(self.placed, self.rules.capacity())
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn pending_origin(&self) -> Option<PositionId> {
        self.pending
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Empty neighbours of the pending origin, in adjacency order.
    ///
    /// Empty unless a piece is selected during the movement phase.
    #[must_use]
    pub fn legal_destinations(&self) -> Vec<PositionId> {
        match self.pending {
            Some(origin) if self.phase().is_movement() && self.status.is_playing() => {
                rules::destinations(&self.graph, &self.board, origin).collect()
            }
            _ => Vec::new(),
        }
    }

    // === Commands ===

    /// Interact with the position named `id` and return the resulting view.
    ///
    /// Illegal interactions leave the game untouched and still return the
    /// current view. Unknown ids are rejected with an error.
    #[instrument(skip(self))]
    pub fn attempt(&mut self, id: &str) -> Result<View, BoardError> {
        let pos = self.graph.position_id(id)?;
        self.interact(pos)?;
        Ok(self.view())
    }

    /// Interact with a position by arena index.
    #[instrument(skip(self))]
    pub fn interact(&mut self, pos: PositionId) -> Result<Outcome, BoardError> {
        if pos.index() >= self.graph.position_count() {
            return Err(BoardError::UnknownPosition { id: pos.to_string() });
        }
        let outcome = self.step(pos);
        debug!(position = self.graph.id_of(pos), ?outcome, "interaction");
        Ok(outcome)
    }

    /// Replay a complete move as the one or two interactions it takes.
    ///
    /// A slide selects its origin first unless it is already pending. A move
    /// that is not legal for the active player right now changes nothing,
    /// pending selection included, and the unchanged view is returned.
    #[instrument(skip(self))]
    pub fn play(&mut self, mv: Move) -> Result<View, BoardError> {
        let count = self.graph.position_count();
        if let Some(pos) = [Some(mv.destination()), mv.origin()]
            .into_iter()
            .flatten()
            .find(|pos| pos.index() >= count)
        {
            return Err(BoardError::UnknownPosition { id: pos.to_string() });
        }

        if !self.status.is_playing()
            || !rules::is_legal(&self.graph, &self.board, self.phase(), self.active, mv)
        {
            debug!(%mv, "illegal move ignored");
            return Ok(self.view());
        }

        match mv {
            Move::Place { to } => {
                self.interact(to)?;
            }
            Move::Slide { from, to } => {
                if self.pending != Some(from) {
                    let selected = self.interact(from)?;
                    if !matches!(selected, Outcome::Selected { .. } | Outcome::Reselected { .. }) {
                        return Ok(self.view());
                    }
                }
                self.interact(to)?;
            }
        }
        Ok(self.view())
    }

    /// Reset to an empty board in the placement phase.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.board.clear();
        self.active = self.rules.starting_player;
        self.placed = 0;
        self.pending = None;
        self.last_move = None;
        self.status = Status::Playing;
        self.winning_line = None;
        info!("session cleared");
    }

    fn step(&mut self, pos: PositionId) -> Outcome {
        if self.status.is_won() {
            return Outcome::Rejected(Rejection::GameOver);
        }

        match self.phase() {
            Phase::Placement => {
                if !self.board.is_empty(pos) {
                    return Outcome::Rejected(Rejection::Occupied);
                }
                self.commit(Move::Place { to: pos });
                Outcome::Placed { at: pos }
            }
            Phase::Movement => match (self.pending, self.board.owner(pos)) {
                (Some(origin), _) if origin == pos => {
                    self.pending = None;
                    Outcome::Deselected { at: pos }
                }
                (pending, Some(owner)) if owner == self.active => {
                    self.pending = Some(pos);
                    match pending {
                        Some(origin) => Outcome::Reselected { from: origin, to: pos },
                        None => Outcome::Selected { at: pos },
                    }
                }
                (_, Some(_)) => Outcome::Rejected(Rejection::OpponentPiece),
                (None, None) => Outcome::Rejected(Rejection::NothingSelected),
                (Some(origin), None) => {
                    if !self.graph.is_adjacent(origin, pos) {
                        return Outcome::Rejected(Rejection::NotAdjacent);
                    }
                    self.commit(Move::Slide { from: origin, to: pos });
                    Outcome::Slid { from: origin, to: pos }
                }
            },
        }
    }

    /// Apply an already-validated move, pass the turn and check for a win.
    fn commit(&mut self, mv: Move) {
        debug_assert!(rules::is_legal(&self.graph, &self.board, self.phase(), self.active, mv));

        rules::apply_move(&mut self.board, mv, self.active);
        if mv.is_place() {
            self.placed += 1;
        }
        self.pending = None;
        self.last_move = Some(mv);
        self.active = self.active.other();

        if let Some((line, player)) = rules::winning_line(&self.graph, &self.board) {
            self.status = Status::Won(player);
            self.winning_line = Some(line);
            info!(winner = %player, line = %self.graph.line_info(line).id, "game won");
        }
    }

    // === View ===

    /// Snapshot of everything a presentation layer needs.
    #[must_use]
    pub fn view(&self) -> View {
        let id = |pos: PositionId| self.graph.id_of(pos).to_string();

        let positions = self
            .graph
            .positions()
            .map(|pos| PositionView {
                id: id(pos),
                point: self.graph.position(pos).point,
                owner: self.board.owner(pos),
            })
            .collect();

        let lines = self
            .graph
            .line_list()
            .iter()
            .map(|line| LineView {
                id: line.id.clone(),
                positions: line.positions.map(id),
            })
            .collect();

        let last_move = self.last_move.map(|mv| match mv {
            Move::Place { to } => MoveRecord::Place { to: id(to) },
            Move::Slide { from, to } => MoveRecord::Slide {
                from: id(from),
                to: id(to),
            },
        });

        View {
            positions,
            lines,
            status: self.status,
            active_player: self.active,
            phase: self.phase(),
            placed: self.placed,
            pending_origin: self.pending.map(id),
            legal_destinations: self.legal_destinations().into_iter().map(id).collect(),
            last_move,
            winning_line: self.winning_line.map(|line| self.graph.line_info(line).id.clone()),
            win_span: self.winning_line.map(|line| self.graph.line_span(line).map(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(session: &Session, id: &str) -> PositionId {
        session.graph().position_id(id).unwrap()
    }

    /// A: v1, v2_v3, v3_v1_v2   B: v2, v3, v1_v2_v3, no line complete.
    fn filled_session() -> Session {
        let mut session = Session::new();
        for id in ["v1", "v2", "v2_v3", "v3", "v3_v1_v2", "v1_v2_v3"] {
            session.attempt(id).unwrap();
        }
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Placement);
        assert_eq!(session.active_player(), Player::A);
        assert_eq!(session.status(), Status::Playing);
        assert!(session.board().owners().iter().all(Option::is_none));
    }

    #[test]
    fn test_place_occupied_is_rejected() {
        let mut session = Session::new();
        let v1 = pos(&session, "v1");
        assert_eq!(session.interact(v1).unwrap(), Outcome::Placed { at: v1 });
        assert_eq!(session.interact(v1).unwrap(), Outcome::Rejected(Rejection::Occupied));
        assert_eq!(session.active_player(), Player::B);
        assert_eq!(session.placed(), 1);
    }

    #[test]
    fn test_phase_switches_at_capacity() {
        let session = filled_session();
        assert_eq!(session.placed(), 6);
        assert_eq!(session.phase(), Phase::Movement);
        assert_eq!(session.status(), Status::Playing);
        assert_eq!(session.active_player(), Player::A);
    }

    #[test]
    fn test_select_deselect_reselect() {
        let mut session = filled_session();
        let v1 = pos(&session, "v1");
        let v2_v3 = pos(&session, "v2_v3");

        assert_eq!(session.interact(v1).unwrap(), Outcome::Selected { at: v1 });
        assert_eq!(session.pending_origin(), Some(v1));
        assert_eq!(
            session.interact(v2_v3).unwrap(),
            Outcome::Reselected { from: v1, to: v2_v3 }
        );
        assert_eq!(session.interact(v2_v3).unwrap(), Outcome::Deselected { at: v2_v3 });
        assert_eq!(session.pending_origin(), None);
        assert_eq!(session.active_player(), Player::A);
    }

    #[test]
    fn test_movement_rejections() {
        let mut session = filled_session();
        let v1 = pos(&session, "v1");
        let v2 = pos(&session, "v2");
        let v1_v2 = pos(&session, "v1_v2");
        let v3_v1 = pos(&session, "v3_v1");
        let v2_v3_v1 = pos(&session, "v2_v3_v1");

        assert_eq!(
            session.interact(v1_v2).unwrap(),
            Outcome::Rejected(Rejection::NothingSelected)
        );
        assert_eq!(session.interact(v2).unwrap(), Outcome::Rejected(Rejection::OpponentPiece));

        session.interact(v1).unwrap();
        assert_eq!(session.interact(v2).unwrap(), Outcome::Rejected(Rejection::OpponentPiece));
        assert_eq!(session.pending_origin(), Some(v1));

        // All three neighbours of v1 are empty.
        let mut dests = session.legal_destinations();
        dests.sort();
        let mut expected = vec![v1_v2, v3_v1, v2_v3_v1];
        expected.sort();
        assert_eq!(dests, expected);
    }

    #[test]
    fn test_non_adjacent_empty_is_noop() {
        let mut session = filled_session();
        let v2_v3 = pos(&session, "v2_v3");
        let v1_v2 = pos(&session, "v1_v2");
        assert!(!session.graph().is_adjacent(v2_v3, v1_v2));

        session.interact(v2_v3).unwrap();
        let before = session.view();
        assert_eq!(session.interact(v1_v2).unwrap(), Outcome::Rejected(Rejection::NotAdjacent));
        assert_eq!(session.view(), before);
        assert_eq!(session.pending_origin(), Some(v2_v3));
    }

    #[test]
    fn test_slide_passes_turn() {
        let mut session = filled_session();
        let v1 = pos(&session, "v1");
        let v1_v2 = pos(&session, "v1_v2");
        session.interact(v1).unwrap();
        assert_eq!(session.interact(v1_v2).unwrap(), Outcome::Slid { from: v1, to: v1_v2 });
        assert_eq!(session.board().owner(v1), None);
        assert_eq!(session.board().owner(v1_v2), Some(Player::A));
        assert_eq!(session.active_player(), Player::B);
        assert_eq!(session.placed(), 6);
        assert_eq!(session.last_move(), Some(Move::Slide { from: v1, to: v1_v2 }));
    }

    #[test]
    fn test_win_blocks_further_interaction() {
        let mut session = Session::new();
        for id in ["v1", "v3", "v1_v2", "v2_v3"] {
            session.attempt(id).unwrap();
        }
        let view = session.attempt("v2").unwrap();
        assert_eq!(view.status, Status::Won(Player::A));
        assert_eq!(view.winning_line.as_deref(), Some("l1"));
        assert!(view.win_span.is_some());

        let v3_v1 = pos(&session, "v3_v1");
        assert_eq!(session.interact(v3_v1).unwrap(), Outcome::Rejected(Rejection::GameOver));
        assert_eq!(session.placed(), 5);
    }

    #[test]
    fn test_unknown_id_is_error() {
        let mut session = Session::new();
        assert!(matches!(
            session.attempt("nowhere"),
            Err(BoardError::UnknownPosition { .. })
        ));
        assert!(session.interact(PositionId(200)).is_err());
    }

    #[test]
    fn test_play_slide_selects_origin() {
        let mut session = filled_session();
        let v1 = pos(&session, "v1");
        let v1_v2 = pos(&session, "v1_v2");
        let view = session.play(Move::Slide { from: v1, to: v1_v2 }).unwrap();
        assert_eq!(view.owner("v1_v2"), Some(Player::A));
        assert_eq!(view.active_player, Player::B);
    }

    #[test]
    fn test_custom_ruleset_validation() {
        let graph = BoardGraph::canonical();
        assert!(Session::with_ruleset(graph.clone(), Ruleset::default().with_pieces_per_player(5)).is_err());
        let session =
            Session::with_ruleset(graph, Ruleset::default().with_starting_player(Player::B)).unwrap();
        assert_eq!(session.active_player(), Player::B);
    }
}
