#![warn(missing_docs)]
//! A sudoku solver combining constraint propagation with backtracking search
//!
//! ## Overview
//!
//! The solver keeps, for every empty cell, the set of digits that could
//! still legally occupy it given the row, column and 3x3 block constraints.
//! Propagation repeatedly narrows those candidate sets (forced singletons,
//! hidden singles per house and a speculative-removal pruning step) until
//! it reaches a fixed point. If the puzzle is not solved by then, the search
//! branches on the cell with the fewest candidates, trying each one on an
//! independently owned clone of the board and adopting the first clone that
//! solves.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::Board;
//!
//! let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
//!
//! let mut board = Board::from_str_line(line).unwrap();
//! assert!(board.solve());
//! assert!(board.is_solved() && board.is_consistent());
//! println!("{}", board);
//! ```

mod bitset;
mod board;
mod consts;
mod errors;
mod helper;
mod propagate;
mod solver;

pub use crate::bitset::{DigitSet, Empty};
pub use crate::board::{Board, CandidateGrid, Cell, CellState, Digit, House};
pub use crate::errors::{LineParseError, OutOfRangeError};
pub use crate::solver::{NullObserver, SolveObserver, SolveStats};
