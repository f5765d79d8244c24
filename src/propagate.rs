//! Deterministic candidate elimination.
//!
//! Propagation shrinks the search space without guessing: availability sets
//! are recomputed from the filled cells, candidate sets are the intersection
//! of the three availability sets covering a cell, forced singletons become
//! solved cells, and two stronger techniques (trial pruning and hidden
//! singles) remove further candidates. [`Board::propagate`] drives rounds of
//! reduction until the total candidate count stops decreasing, which bounds
//! the loop because no technique ever adds a candidate.

use crate::bitset::DigitSet;
use crate::board::{Board, Cell, CellState, Digit, House};
use crate::consts::N_HOUSES;
use crate::helper::{HouseArray, Unsolvable};
use log::{debug, trace};

impl Board {
    /// Recomputes every availability set from scratch by scanning the filled
    /// cells. Idempotent for a fixed set of filled cells.
    pub(crate) fn init_availability(&mut self) {
        self.avail = HouseArray([DigitSet::ALL; N_HOUSES]);
        for cell in Cell::all() {
            if let Some(digit) = self.cells[cell].digit() {
                for &house in cell.houses().iter() {
                    self.avail[house].remove(digit);
                }
            }
        }
    }

    /// Narrows every unknown cell's candidates by the intersection of its
    /// row, column and block availability. Narrowing is monotone: a
    /// candidate removed earlier (by pruning) never comes back, because the
    /// existing set is intersected rather than overwritten.
    pub(crate) fn init_candidates(&mut self) {
        for cell in Cell::all() {
            if let CellState::Unknown(candidates) = self.cells[cell] {
                let [row, col, block] = cell.houses();
                let narrowed = candidates & self.avail[row] & self.avail[col] & self.avail[block];
                self.cells[cell] = CellState::Unknown(narrowed);
            }
        }
    }

    /// Sum of candidate-set sizes over all unknown cells. Used as a progress
    /// metric: propagation never increases it.
    pub fn count_total_candidates(&self) -> u32 {
        Cell::all()
            .filter_map(|cell| self.cells[cell].candidates())
            .map(|candidates| candidates.len() as u32)
            .sum()
    }

    /// Converts every unknown cell with exactly one candidate into a solved
    /// cell. A cell with no candidates, or a singleton that meanwhile became
    /// unplaceable, means this board cannot lead to a solution.
    pub(crate) fn assign_singletons(&mut self) -> Result<bool, Unsolvable> {
        let mut any_solved = false;
        for cell in Cell::all() {
            if let CellState::Unknown(candidates) = self.cells[cell] {
                match candidates.unique()? {
                    Some(digit) if self.can_place(cell, digit) => {
                        self.place(cell, digit);
                        any_solved = true;
                    }
                    Some(_) => return Err(Unsolvable),
                    None => {}
                }
            }
        }
        Ok(any_solved)
    }

    /// One pass of candidate recomputation plus singleton conversion.
    pub(crate) fn assign_singletons_once(&mut self) -> Result<bool, Unsolvable> {
        self.init_candidates();
        self.assign_singletons()
    }

    /// Runs candidate recomputation and singleton conversion until no
    /// further cell is forced. Availability stays current because placing a
    /// digit removes it from the three covering sets immediately.
    pub(crate) fn propagate_singles(&mut self) -> Result<(), Unsolvable> {
        while self.assign_singletons_once()? {}
        Ok(())
    }

    /// Speculative-removal pruning: for every candidate of every unknown
    /// cell, place it on a trial clone, run one singleton pass and drop the
    /// candidate for good if the trial turns inconsistent. After removals,
    /// singleton propagation runs again since cells may have been reduced to
    /// one candidate.
    pub(crate) fn prune_by_trial(&mut self) -> Result<bool, Unsolvable> {
        let mut any_removed = false;
        for cell in Cell::all() {
            let candidates = match self.cells[cell] {
                CellState::Unknown(candidates) => candidates,
                _ => continue,
            };
            for digit in candidates {
                let mut trial = self.clone();
                trial.place(cell, digit);
                let contradiction = match trial.assign_singletons_once() {
                    Ok(_) => !trial.is_consistent(),
                    Err(Unsolvable) => true,
                };
                if contradiction {
                    trace!(
                        "pruned candidate {} at r{}c{}",
                        digit,
                        cell.row(),
                        cell.col()
                    );
                    self.remove_candidate(cell, digit)?;
                    any_removed = true;
                }
            }
        }
        if any_removed {
            self.propagate_singles()?;
        }
        Ok(any_removed)
    }

    fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> Result<(), Unsolvable> {
        if let CellState::Unknown(mut candidates) = self.cells[cell] {
            candidates.remove(digit);
            if candidates.is_empty() {
                return Err(Unsolvable);
            }
            self.cells[cell] = CellState::Unknown(candidates);
        }
        Ok(())
    }

    /// Solves cells holding a hidden single: a digit that has exactly one
    /// home left within a house. Availability and candidates are refreshed
    /// after every house that changed, so later houses always see current
    /// state; the scan order (and with it the solver's determinism) is fixed
    /// by the `houses` iterator.
    pub(crate) fn hidden_singles(
        &mut self,
        houses: impl Iterator<Item = House>,
    ) -> Result<bool, Unsolvable> {
        let mut any_solved = false;
        for house in houses {
            if self.hidden_singles_in(house)? {
                self.init_availability();
                self.init_candidates();
                any_solved = true;
            }
        }
        Ok(any_solved)
    }

    fn hidden_singles_in(&mut self, house: House) -> Result<bool, Unsolvable> {
        let mut unsolved = DigitSet::NONE;
        let mut seen_twice = DigitSet::NONE;
        for cell in house.cells() {
            if let CellState::Unknown(candidates) = self.cells[cell] {
                seen_twice |= unsolved & candidates;
                unsolved |= candidates;
            }
        }
        // a still-unplaced digit without any home in this house
        if !self.avail[house].without(unsolved).is_empty() {
            return Err(Unsolvable);
        }

        let mut singles = unsolved.without(seen_twice);
        if singles.is_empty() {
            return Ok(false);
        }

        let mut any_solved = false;
        for cell in house.cells() {
            let candidates = match self.cells[cell] {
                CellState::Unknown(candidates) => candidates,
                _ => continue,
            };
            match (candidates & singles).unique() {
                Ok(Some(digit)) => {
                    if !self.can_place(cell, digit) {
                        return Err(Unsolvable);
                    }
                    self.place(cell, digit);
                    singles.remove(digit);
                    any_solved = true;
                    if singles.is_empty() {
                        break;
                    }
                }
                // two digits forced into the same cell
                Ok(None) => return Err(Unsolvable),
                Err(_) => {}
            }
        }
        Ok(any_solved)
    }

    /// One round of candidate reduction: trial pruning, then hidden singles
    /// over rows, columns and blocks in that order.
    pub(crate) fn reduce_candidates(&mut self) -> Result<(), Unsolvable> {
        self.prune_by_trial()?;
        if self.hidden_singles(House::rows())? {
            self.propagate_singles()?;
        }
        if self.hidden_singles(House::cols())? {
            self.propagate_singles()?;
        }
        if self.hidden_singles(House::blocks())? {
            self.propagate_singles()?;
        }
        Ok(())
    }

    /// Runs reduction rounds to a fixed point: repeats while the total
    /// candidate count strictly decreases.
    pub(crate) fn propagate(&mut self) -> Result<(), Unsolvable> {
        self.init_availability();
        self.propagate_singles()?;
        let mut total = self.count_total_candidates();
        loop {
            self.reduce_candidates()?;
            let remaining = self.count_total_candidates();
            debug!("reduction round: {} -> {} candidates", total, remaining);
            if remaining >= total {
                return Ok(());
            }
            total = remaining;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Arizona sample puzzle, "easy" tier
    const EASY: &str =
        "...26.7.168..7..9.19...45..82.1...4...46.29...5...3.28..93...74.4..5..367.3.18...";

    fn board(line: &str) -> Board {
        Board::from_str_line(line).unwrap()
    }

    #[test]
    fn availability_is_idempotent() {
        let mut board = board(EASY);
        board.init_availability();
        let first = board.avail;
        board.init_availability();
        assert_eq!(first, board.avail);
    }

    #[test]
    fn candidates_match_brute_force_recomputation() {
        let mut board = board(EASY);
        board.init_availability();
        board.init_candidates();
        for cell in Cell::all() {
            let candidates = match board.cells[cell] {
                CellState::Unknown(candidates) => candidates,
                _ => continue,
            };
            for digit in Digit::all() {
                let conflicts = cell.houses().iter().any(|&house| {
                    house
                        .cells()
                        .filter_map(|c| board.cells[c].digit())
                        .any(|placed| placed == digit)
                });
                assert_eq!(
                    candidates.contains(digit),
                    !conflicts,
                    "cell r{}c{}, digit {}",
                    cell.row(),
                    cell.col(),
                    digit
                );
            }
        }
    }

    #[test]
    fn reduction_never_increases_candidate_count() {
        let mut board = board(
            "..............3.85..1.2.......5.7.....4...1...9.......5......73..2.1........4...9",
        );
        board.init_availability();
        board.propagate_singles().unwrap();
        let mut total = board.count_total_candidates();
        for _ in 0..4 {
            board.reduce_candidates().unwrap();
            let remaining = board.count_total_candidates();
            assert!(remaining <= total);
            total = remaining;
        }
    }

    #[test]
    fn easy_puzzle_falls_to_propagation_alone() {
        let mut board = board(EASY);
        board.propagate().unwrap();
        assert!(board.is_solved());
        assert!(board.is_consistent());
    }

    #[test]
    fn propagation_detects_a_starved_cell() {
        // top-left cell has no candidate left: its row holds 1..=8 and its
        // column holds the 9
        let mut grid = [[0u8; 9]; 9];
        grid[0] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        grid[5][0] = 9;
        let mut board = Board::from_grid(&grid).unwrap();
        assert!(board.is_consistent());
        assert_eq!(board.propagate_singles(), Err(Unsolvable));
    }
}
