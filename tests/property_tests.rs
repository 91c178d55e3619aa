//! Property tests over random interaction sequences and random playouts.

use proptest::prelude::*;
use tahir::rules;
use tahir::search::{evaluate, WIN_SCORE};
use tahir::{choose_move, Move, Phase, Player, PositionId, SearchContext, SearchState, Session, Status};

/// Follow `choices` through legal moves on both a session and a search
/// state, checking that they agree after every move.
fn playout(choices: &[usize]) -> (Session, SearchContext, SearchState) {
    let mut session = Session::new();
    let context = SearchContext::from_session(&session);
    let mut state = SearchState::from_session(&session, session.active_player());

    for &choice in choices {
        if session.status().is_won() {
            break;
        }
        let moves = state.legal_moves(&context);
        let mv = moves[choice % moves.len()];
        state = state.apply(&context, mv);
        let view = session.play(mv).unwrap();

        assert_eq!(view.owners(), state.owners(), "ownership diverged after {mv}");
        assert_eq!(view.active_player, state.to_move());
        assert_eq!(view.phase, state.phase());
        assert_eq!(view.placed, state.placed());
    }
    (session, context, state)
}

/// Full-width minimax with the same leaf scoring and no pruning or cache.
fn full_width(context: &SearchContext, state: &SearchState, player: Player, remaining: u8, ply: u8) -> f64 {
    if let Some(winner) = state.winner(context) {
        let score = WIN_SCORE - f64::from(ply);
        return if winner == player { score } else { -score };
    }
    let moves = state.legal_moves(context);
    if remaining == 0 || moves.is_empty() {
        return evaluate(context, state, player);
    }
    let scores = moves
        .into_iter()
        .map(|mv| full_width(context, &state.apply(context, mv), player, remaining - 1, ply + 1));
    if state.to_move() == player {
        scores.fold(f64::NEG_INFINITY, f64::max)
    } else {
        scores.fold(f64::INFINITY, f64::min)
    }
}

/// Root choice over `full_width`: earliest move with the strictly best score.
fn full_width_choice(context: &SearchContext, state: &SearchState, player: Player, depth: u8) -> Option<Move> {
    let root = state.clone().with_to_move(player);
    if root.winner(context).is_some() {
        return None;
    }
    let mut best: Option<(Move, f64)> = None;
    for mv in root.legal_moves(context) {
        let score = full_width(context, &root.apply(context, mv), player, depth - 1, 1);
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Arbitrary clicks never overfill the board or revert the phase.
    #[test]
    fn interactions_respect_capacity(clicks in prop::collection::vec(0u8..9, 0..60)) {
        let mut session = Session::new();
        let mut entered_movement = false;
        let mut last_placed = 0;

        for click in clicks {
            let outcome = session.interact(PositionId(click)).unwrap();
            let view = session.view();

            let a = view.owners().iter().filter(|o| **o == Some(Player::A)).count();
            let b = view.owners().iter().filter(|o| **o == Some(Player::B)).count();
            prop_assert!(a <= 3 && b <= 3);
            prop_assert!(view.placed >= last_placed);
            prop_assert!(view.placed <= 6);
            prop_assert_eq!(view.phase == Phase::Movement, view.placed == 6);
            if entered_movement {
                prop_assert_eq!(view.phase, Phase::Movement);
            }
            if view.pending_origin.is_some() {
                prop_assert_eq!(view.phase, Phase::Movement);
            }
            if outcome.is_move() {
                prop_assert_eq!(view.status.is_won(), rules::winner(session.graph(), session.board()).is_some());
            }

            entered_movement |= view.phase == Phase::Movement;
            last_placed = view.placed;
        }
    }

    /// Session and search snapshot apply every generated move identically.
    #[test]
    fn snapshot_and_session_agree(choices in prop::collection::vec(any::<usize>(), 0..40)) {
        playout(&choices);
    }

    /// The chosen move is always one the mover could legally make.
    #[test]
    fn chosen_move_is_legal(
        choices in prop::collection::vec(any::<usize>(), 0..16),
        depth in 1u8..4,
    ) {
        let (session, context, state) = playout(&choices);
        let player = state.to_move();
        let chosen = choose_move(&context, &state, player, Some(depth));

        if session.status() != Status::Playing {
            prop_assert!(chosen.is_none());
        } else {
            let mv = chosen.unwrap();
            prop_assert!(state.legal_moves(&context).contains(&mv));
            prop_assert!(rules::is_legal(&context, &state, state.phase(), player, mv));
            if let Some(from) = mv.origin() {
                prop_assert_eq!(rules::Occupancy::owner(&state, from), Some(player));
            }
        }
    }

    /// Same snapshot, player and depth give the same move.
    #[test]
    fn search_is_deterministic(
        choices in prop::collection::vec(any::<usize>(), 0..12),
        depth in 1u8..4,
    ) {
        let (_, context, state) = playout(&choices);
        let player = state.to_move();
        let first = choose_move(&context, &state, player, Some(depth));
        let second = choose_move(&context, &state, player, Some(depth));
        prop_assert_eq!(first, second);
    }

    /// Pruning and the bounded cache never change the chosen move.
    #[test]
    fn pruned_search_matches_full_width(
        choices in prop::collection::vec(any::<usize>(), 0..14),
        depth in 1u8..=4,
    ) {
        let (_, context, state) = playout(&choices);
        for player in [Player::A, Player::B] {
            let pruned = choose_move(&context, &state, player, Some(depth));
            let reference = full_width_choice(&context, &state, player, depth);
            prop_assert_eq!(pruned, reference, "player {} depth {}", player, depth);
        }
    }
}
