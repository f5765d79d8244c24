//! Types for cells, digits and the puzzle board itself

mod cell_state;
mod digit;
mod display;
pub mod positions;

pub use self::{
    cell_state::CellState,
    digit::Digit,
    display::CandidateGrid,
    positions::{Cell, House},
};

use crate::bitset::DigitSet;
use crate::consts::{N_CELLS, N_HOUSES};
use crate::errors::{LineParseError, OutOfRangeError};
use crate::helper::{CellArray, HouseArray};

/// A 9x9 sudoku board with per-cell candidate tracking.
///
/// A board is constructed once from puzzle input; cells carrying a clue are
/// `Given`, all others start `Unknown`. [`solve`](Board::solve) fills the
/// unknown cells in place. `Clone` produces a deep, independent copy, which
/// is what the search uses for speculative branches.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub(crate) cells: CellArray<CellState>,
    // Digits not yet placed in each row, column and block among filled cells.
    pub(crate) avail: HouseArray<DigitSet>,
}

impl Board {
    /// Creates an empty board: every cell `Unknown` with all nine digits as
    /// candidates, every availability set full.
    pub fn new() -> Board {
        Board {
            cells: CellArray([CellState::Unknown(DigitSet::ALL); N_CELLS]),
            avail: HouseArray([DigitSet::ALL; N_HOUSES]),
        }
    }

    /// Builds a board from a row-major grid of clues, with `0` marking an
    /// empty cell.
    pub fn from_grid(grid: &[[u8; 9]; 9]) -> Result<Board, OutOfRangeError> {
        let mut board = Board::new();
        for (row, row_values) in grid.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                let cell = Cell::from_coords(row as u8, col as u8);
                match Digit::new_checked(value) {
                    Some(digit) => board.set_given(cell, digit),
                    None if value == 0 => {}
                    None => {
                        return Err(OutOfRangeError {
                            row: row as u8,
                            col: col as u8,
                            value,
                        })
                    }
                }
            }
        }
        board.init_candidates();
        Ok(board)
    }

    /// Builds a board from the line format: 81 characters left to right, top
    /// to bottom, digits `1..=9` for clues and `'0'`, `'.'` or `'_'` for
    /// empty cells.
    pub fn from_str_line(s: &str) -> Result<Board, LineParseError> {
        let mut board = Board::new();
        let mut n_cells = 0;
        for ch in s.trim_end().chars() {
            if n_cells == N_CELLS as u8 {
                return Err(LineParseError::TooManyCells);
            }
            let cell = Cell::new(n_cells);
            match ch {
                '1'..='9' => board.set_given(cell, Digit::new(ch as u8 - b'0')),
                '0' | '.' | '_' => {}
                _ => return Err(LineParseError::InvalidEntry { cell: n_cells, ch }),
            }
            n_cells += 1;
        }
        if n_cells < N_CELLS as u8 {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        board.init_candidates();
        Ok(board)
    }

    /// Returns the board in line format, `'.'` for empty cells.
    pub fn to_str_line(&self) -> String {
        Cell::all()
            .map(|cell| match self.cells[cell].digit() {
                Some(digit) => (b'0' + digit.get()) as char,
                None => '.',
            })
            .collect()
    }

    /// Returns the board as a row-major grid of values, `0` for empty cells.
    pub fn to_grid(&self) -> [[u8; 9]; 9] {
        let mut grid = [[0; 9]; 9];
        for cell in Cell::all() {
            if let Some(digit) = self.cells[cell].digit() {
                grid[cell.row() as usize][cell.col() as usize] = digit.get();
            }
        }
        grid
    }

    /// Returns the state of a single cell.
    pub fn cell(&self, cell: Cell) -> CellState {
        self.cells[cell]
    }

    /// Returns the value at the given coordinates, if that cell is filled.
    pub fn value(&self, row: u8, col: u8) -> Option<u8> {
        self.cells[Cell::from_coords(row, col)]
            .digit()
            .map(Digit::get)
    }

    /// Checks that no filled value repeats within any row, column or block.
    ///
    /// Only `Given` and `Solved` cells take part; candidate sets are not
    /// inspected. A complete *and* consistent board is a valid solution.
    pub fn is_consistent(&self) -> bool {
        for house in House::all() {
            let mut seen = DigitSet::NONE;
            for cell in house.cells() {
                if let Some(digit) = self.cells[cell].digit() {
                    if seen.contains(digit) {
                        return false;
                    }
                    seen |= digit;
                }
            }
        }
        true
    }

    /// Checks whether every cell is filled. Does not re-check consistency;
    /// callers that need a verified solution must check both.
    pub fn is_solved(&self) -> bool {
        Cell::all().all(|cell| self.cells[cell].is_filled())
    }

    fn set_given(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell] = CellState::Given(digit);
        self.remove_from_avail(cell, digit);
    }

    /// Commits a digit as `Solved` and updates the availability sets.
    pub(crate) fn place(&mut self, cell: Cell, digit: Digit) {
        debug_assert!(!self.cells[cell].is_filled());
        self.cells[cell] = CellState::Solved(digit);
        self.remove_from_avail(cell, digit);
    }

    fn remove_from_avail(&mut self, cell: Cell, digit: Digit) {
        for house in cell.houses().iter() {
            self.avail[*house].remove(digit);
        }
    }

    /// Whether `digit` is still unused in all three houses of `cell`.
    pub(crate) fn can_place(&self, cell: Cell, digit: Digit) -> bool {
        cell.houses()
            .iter()
            .all(|&house| self.avail[house].contains(digit))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{LineParseError, OutOfRangeError};

    #[test]
    fn from_grid_rejects_out_of_range_values() {
        let mut grid = [[0; 9]; 9];
        grid[3][7] = 12;
        assert_eq!(
            Board::from_grid(&grid),
            Err(OutOfRangeError {
                row: 3,
                col: 7,
                value: 12
            })
        );
    }

    #[test]
    fn line_roundtrip() {
        let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
        let board = Board::from_str_line(line).unwrap();
        assert_eq!(board.to_str_line(), line);
    }

    #[test]
    fn from_str_line_rejects_malformed_input() {
        assert_eq!(
            Board::from_str_line("..3"),
            Err(LineParseError::NotEnoughCells(3))
        );
        let long = ".".repeat(82);
        assert_eq!(
            Board::from_str_line(&long),
            Err(LineParseError::TooManyCells)
        );
        let mut bad = ".".repeat(81);
        bad.replace_range(10..11, "x");
        assert_eq!(
            Board::from_str_line(&bad),
            Err(LineParseError::InvalidEntry { cell: 10, ch: 'x' })
        );
    }

    #[test]
    fn duplicate_clues_are_inconsistent() {
        let mut grid = [[0; 9]; 9];
        grid[0][0] = 5;
        grid[0][6] = 5;
        let board = Board::from_grid(&grid).unwrap();
        assert!(!board.is_consistent());
    }

    #[test]
    fn empty_board_is_consistent_and_unsolved() {
        let board = Board::new();
        assert!(board.is_consistent());
        assert!(!board.is_solved());
    }
}
