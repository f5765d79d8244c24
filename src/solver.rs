//! Backtracking search on top of propagation.
//!
//! When propagation stalls, the solver picks the unknown cell with the
//! fewest candidates and tries each of them in ascending order on a cloned
//! board. Every attempt owns its board outright; the caller adopts the first
//! clone that solves and discards the rest. Branch order and cell selection
//! are fixed, so solving the same input twice explores the same tree and
//! returns the same solution.

use crate::bitset::DigitSet;
use crate::board::{Board, Cell, CellState, Digit};
use log::debug;

/// Counters for one top-level [`Board::solve`] call.
///
/// Owned by the call and threaded through the recursion by `&mut`, shared by
/// all boards cloned during the search. There is no global solver state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of times propagation ran to a fixed point
    pub passes: u64,
    /// Number of speculative candidate placements tried
    pub branches: u64,
}

/// Observer hooks invoked between solver steps.
///
/// Display and progress reporting stay outside the solving loop: the solver
/// calls these hooks and never renders anything itself. All methods default
/// to no-ops.
pub trait SolveObserver {
    /// Called after each propagation fixed point with the current board.
    fn on_propagated(&mut self, _board: &Board, _stats: &SolveStats) {}

    /// Called before a candidate is tried at a branch cell.
    fn on_branch(&mut self, _cell: Cell, _digit: Digit, _stats: &SolveStats) {}
}

/// Observer that ignores all events.
pub struct NullObserver;

impl SolveObserver for NullObserver {}

impl Board {
    /// Tries to solve the puzzle in place and returns `true` on success.
    ///
    /// On success every cell is `Given` or `Solved`. On failure the board is
    /// left in its last explored, generally incomplete state; callers must
    /// not rely on its contents. An unsolvable puzzle is a legitimate
    /// outcome, not an error.
    pub fn solve(&mut self) -> bool {
        self.solve_with_observer(&mut NullObserver).0
    }

    /// Like [`Board::solve`], additionally reporting progress to `observer`
    /// and returning the search counters.
    pub fn solve_with_observer(&mut self, observer: &mut dyn SolveObserver) -> (bool, SolveStats) {
        let mut stats = SolveStats::default();
        match solve_board(self.clone(), &mut stats, observer) {
            Some(solution) => {
                *self = solution;
                (true, stats)
            }
            None => (false, stats),
        }
    }
}

/// Runs propagation to a fixed point, then branches on the most constrained
/// cell. Consumes the board; the caller adopts the returned one on success.
fn solve_board(
    mut board: Board,
    stats: &mut SolveStats,
    observer: &mut dyn SolveObserver,
) -> Option<Board> {
    stats.passes += 1;
    if board.propagate().is_err() {
        return None;
    }
    observer.on_propagated(&board, stats);
    if !board.is_consistent() {
        return None;
    }
    if board.is_solved() {
        return Some(board);
    }

    let (cell, candidates) = branch_target(&board)?;
    debug!(
        "branching on r{}c{} over {} candidates",
        cell.row(),
        cell.col(),
        candidates.len()
    );
    for digit in candidates {
        observer.on_branch(cell, digit, stats);
        stats.branches += 1;
        if let Some(solution) = attempt(board.clone(), cell, digit, stats, observer) {
            return Some(solution);
        }
    }
    None
}

/// Commits a single speculative placement on an owned clone and recurses.
fn attempt(
    mut board: Board,
    cell: Cell,
    digit: Digit,
    stats: &mut SolveStats,
    observer: &mut dyn SolveObserver,
) -> Option<Board> {
    board.place(cell, digit);
    solve_board(board, stats, observer)
}

/// The unknown cell with the fewest candidates, first in row-major order on
/// ties. `None` if an unknown cell has run out of candidates; propagation
/// normally catches that earlier, so this is a defensive dead end.
fn branch_target(board: &Board) -> Option<(Cell, DigitSet)> {
    let mut best: Option<(Cell, DigitSet)> = None;
    for cell in Cell::all() {
        if let CellState::Unknown(candidates) = board.cell(cell) {
            match best {
                Some((_, fewest)) if fewest.len() <= candidates.len() => {}
                _ => best = Some((cell, candidates)),
            }
        }
    }
    match best {
        Some((_, candidates)) if candidates.is_empty() => None,
        _ => best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_target_prefers_fewest_candidates_then_row_major() {
        let mut board = Board::from_str_line(
            "12.45678.........................................................................",
        )
        .unwrap();
        board.init_availability();
        board.init_candidates();
        // (0,2) and (0,8) both have exactly two candidates {3, 9};
        // the earlier cell wins
        let (cell, candidates) = branch_target(&board).unwrap();
        assert_eq!((cell.row(), cell.col()), (0, 2));
        assert_eq!(candidates.len(), 2);
    }
}
