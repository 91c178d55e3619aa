//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always from the searching player's point of view. A won
//! position scores `WIN_SCORE - ply`, where `ply` counts moves from the
//! root, so a win found sooner beats one found later and a loss found
//! later beats one found sooner. Anything else is left to the evaluator.
//!
//! Moves are tried in generation order. At every node only a strictly
//! better score replaces the running best, so ties resolve to the earliest
//! generated move and the whole search is deterministic.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use super::cache::{Bound, CacheEntry, CacheKey, TranspositionCache};
use super::config::{SearchConfig, MAX_DEPTH};
use super::context::SearchContext;
use super::evaluator::{Evaluator, LineEvaluator};
use super::state::SearchState;
use super::stats::SearchStats;
use crate::core::{Move, Player};
use crate::session::Session;

/// Score of a win at the root. Heuristic values stay well inside it.
pub const WIN_SCORE: f64 = 100.0;

/// Minimax search bound to one board shape.
///
/// Owns the context, depth settings and evaluator. A fresh transposition
/// cache is built for every `choose_move` call.
pub struct MinimaxSearch {
    context: SearchContext,
    config: SearchConfig,
    evaluator: Box<dyn Evaluator>,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a search with the default evaluator.
    pub fn new(context: SearchContext, config: SearchConfig) -> Self {
        Self {
            context,
            config,
            evaluator: Box::new(LineEvaluator::default()),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom evaluator.
    pub fn with_evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    #[must_use]
    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for `player` at the configured depth for the state's phase.
    pub fn choose_move(&mut self, state: &SearchState, player: Player) -> Option<Move> {
        let depth = self.config.depth_for(state.phase());
        self.choose_move_with_depth(state, player, depth)
    }

    /// Pick a move for `player`, looking `depth` plies ahead.
    ///
    /// `player` moves first regardless of the state's own side to move.
    /// Returns `None` when the game is already won or `player` has no
    /// legal move. The depth is clamped to `1..=MAX_DEPTH`.
    #[instrument(skip(self, state), fields(phase = %state.phase(), placed = state.placed()))]
    pub fn choose_move_with_depth(
        &mut self,
        state: &SearchState,
        player: Player,
        depth: u8,
    ) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        let root = state.clone().with_to_move(player);
        if root.winner(&self.context).is_some() {
            debug!("root already won");
            return None;
        }
        let moves = root.legal_moves(&self.context);
        if moves.is_empty() {
            debug!("no legal moves at root");
            return None;
        }

        let depth = depth.clamp(1, MAX_DEPTH);
        let (best, cache_size) = {
            let mut pass = Pass {
                context: &self.context,
                evaluator: self.evaluator.as_ref(),
                cache: TranspositionCache::new(),
                stats: &mut self.stats,
                player,
            };
            pass.stats.nodes_visited += 1;
            (pass.search_root(&root, moves, depth), pass.cache.len())
        };
        self.stats.time_us = start.elapsed().as_micros() as u64;

        if let Some((mv, score)) = best {
            debug!(
                %mv,
                score,
                depth,
                nodes = self.stats.nodes_visited,
                cutoffs = self.stats.cutoffs,
                cache_hits = self.stats.cache_hits,
                cache_size,
                time_us = self.stats.time_us,
                "search complete"
            );
        }
        best.map(|(mv, _)| mv)
    }
}

/// State that lives for exactly one top-level search.
struct Pass<'a> {
    context: &'a SearchContext,
    evaluator: &'a dyn Evaluator,
    cache: TranspositionCache,
    stats: &'a mut SearchStats,
    player: Player,
}

impl Pass<'_> {
    /// Root children are searched with a rising alpha and an open beta.
    fn search_root(&mut self, root: &SearchState, moves: Vec<Move>, depth: u8) -> Option<(Move, f64)> {
        let mut best: Option<(Move, f64)> = None;
        let mut alpha = f64::NEG_INFINITY;
        for mv in moves {
            let child = root.apply(self.context, mv);
            let score = self.alpha_beta(&child, depth - 1, 1, alpha, f64::INFINITY);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((mv, score));
                alpha = score;
            }
        }
        best
    }

    /// Fail-soft alpha-beta. `remaining` plies are left below `state`,
    /// which sits `ply` moves below the root.
    fn alpha_beta(
        &mut self,
        state: &SearchState,
        remaining: u8,
        ply: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if let Some(winner) = state.winner(self.context) {
            self.stats.leaves += 1;
            let score = WIN_SCORE - f64::from(ply);
            return if winner == self.player { score } else { -score };
        }

        let moves = state.legal_moves(self.context);
        if remaining == 0 || moves.is_empty() {
            self.stats.leaves += 1;
            return self.evaluator.evaluate(self.context, state, self.player);
        }

        let key = CacheKey {
            depth: remaining,
            fingerprint: state.fingerprint(self.context),
        };
        if let Some(entry) = self.cache.probe(&key) {
            self.stats.cache_hits += 1;
            trace!(remaining, score = entry.score, bound = ?entry.bound, "cache hit");
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }
        let (window_alpha, window_beta) = (alpha, beta);

        let maximizing = state.to_move() == self.player;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            let child = state.apply(self.context, mv);
            let score = self.alpha_beta(&child, remaining - 1, ply + 1, alpha, beta);
            if maximizing {
                if score > best {
                    best = score;
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                }
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.cache.store(
            key,
            CacheEntry {
                score: best,
                bound: Bound::classify(best, window_alpha, window_beta),
            },
        );
        self.stats.cache_stores += 1;
        best
    }
}

/// One-shot search over a prepared snapshot.
///
/// With `max_depth` unset the default depth for the state's phase is used.
pub fn choose_move(
    context: &SearchContext,
    state: &SearchState,
    player: Player,
    max_depth: Option<u8>,
) -> Option<Move> {
    let mut config = SearchConfig::default();
    config.max_depth = max_depth;
    MinimaxSearch::new(context.clone(), config).choose_move(state, player)
}

/// Snapshot a live session and pick a move for `player`.
///
/// The session is only read.
pub fn choose_move_for(session: &Session, player: Player, config: SearchConfig) -> Option<Move> {
    let context = SearchContext::from_session(session);
    let state = SearchState::from_session(session, player);
    MinimaxSearch::new(context, config).choose_move(&state, player)
}
