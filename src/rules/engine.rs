//! Shared game rules.
//!
//! Every function here is pure over a `Topology` and an `Occupancy`:
//! - Win detection: first uniformly-owned line in declaration order
//! - Legal moves: placements in sorted-id order, slides in arena order
//! - Move application: the only code that changes ownership
//!
//! The session runs these against its live board, the search engine
//! against throwaway snapshots, so lookahead can never disagree with the
//! real game about what is legal or who has won.

use crate::board::Topology;
use crate::core::{LineId, Move, Phase, Player, PositionId};

use super::occupancy::Occupancy;

/// First line, in declaration order, whose three positions share an owner.
pub fn winning_line<T, O>(topology: &T, board: &O) -> Option<(LineId, Player)>
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    topology.lines().find_map(|(id, [first, middle, last])| {
        let owner = board.owner(first)?;
        (board.owner(middle) == Some(owner) && board.owner(last) == Some(owner)).then_some((id, owner))
    })
}

/// Winner of the position, if any line is complete.
pub fn winner<T, O>(topology: &T, board: &O) -> Option<Player>
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    winning_line(topology, board).map(|(_, player)| player)
}

/// Empty neighbours of `from`, in adjacency insertion order.
pub fn destinations<'a, T, O>(
    topology: &'a T,
    board: &'a O,
    from: PositionId,
) -> impl Iterator<Item = PositionId> + 'a
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    topology
        .neighbors(from)
        .iter()
        .copied()
        .filter(move |&to| board.is_empty(to))
}

/// Every legal move for `player` in the given phase.
///
/// ## Ordering
///
/// - Placement: one move per empty position, ascending string id
/// - Movement: owned pieces in arena order, each piece's empty neighbours
///   in adjacency insertion order
///
/// The search engine relies on this order for deterministic tie-breaking.
pub fn legal_moves<T, O>(topology: &T, board: &O, phase: Phase, player: Player) -> Vec<Move>
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    match phase {
        Phase::Placement => topology
            .sorted_positions()
            .iter()
            .copied()
            .filter(|&to| board.is_empty(to))
            .map(|to| Move::Place { to })
            .collect(),
        Phase::Movement => {
            let mut moves = Vec::new();
            for from in topology.positions() {
                if board.owner(from) != Some(player) {
                    continue;
                }
                moves.extend(destinations(topology, board, from).map(|to| Move::Slide { from, to }));
            }
            moves
        }
    }
}

/// Number of slide destinations available to `player`.
pub fn mobility<T, O>(topology: &T, board: &O, player: Player) -> usize
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    topology
        .positions()
        .filter(|&from| board.owner(from) == Some(player))
        .map(|from| destinations(topology, board, from).count())
        .sum()
}

/// Whether `mv` is legal for `player` in `phase`.
pub fn is_legal<T, O>(topology: &T, board: &O, phase: Phase, player: Player, mv: Move) -> bool
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    let in_bounds = |pos: PositionId| pos.index() < topology.position_count();
    match (phase, mv) {
        (Phase::Placement, Move::Place { to }) => in_bounds(to) && board.is_empty(to),
        (Phase::Movement, Move::Slide { from, to }) => {
            in_bounds(from)
                && in_bounds(to)
                && board.owner(from) == Some(player)
                && board.is_empty(to)
                && topology.is_adjacent(from, to)
        }
        _ => false,
    }
}

/// Write `mv` for `player` into `board`.
///
/// Does not check legality; callers generate or validate moves first.
pub fn apply_move<O>(board: &mut O, mv: Move, player: Player)
where
    O: Occupancy + ?Sized,
{
    match mv {
        Move::Place { to } => board.set_owner(to, Some(player)),
        Move::Slide { from, to } => {
            board.set_owner(from, None);
            board.set_owner(to, Some(player));
        }
    }
}

/// Pieces currently on the board.
pub fn piece_count<T, O>(topology: &T, board: &O) -> usize
where
    T: Topology + ?Sized,
    O: Occupancy + ?Sized,
{
    topology.positions().filter(|&pos| !board.is_empty(pos)).count()
}
