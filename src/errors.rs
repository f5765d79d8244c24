//! Errors that may be encountered when constructing a board from puzzle input
//!
//! Only malformed input is an error. An unsolvable puzzle is a legitimate
//! outcome and reported through the return value of
//! [`solve`](crate::Board::solve) instead.

#[cfg(doc)]
use crate::Board;

/// Error for [`Board::from_grid`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell ({row}, {col}) contains {value}, expected a value in 0..=9")]
pub struct OutOfRangeError {
    /// Row index of the offending cell, `0..=8`
    pub row: u8,
    /// Column index of the offending cell, `0..=8`
    pub col: u8,
    /// The rejected value
    pub value: u8,
}

/// Error for [`Board::from_str_line`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the digits `1..=9` and `'0'`, `'.'` or `'_'` for
    /// empty cells
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell number from `0..=80`, `0..=8` for the first row, `9..=17`
        /// for the second and so on
        cell: u8,
        /// The parsed invalid char
        ch: char,
    },
    /// Input ends before 81 cells were read. Contains the number of cells
    /// supplied.
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 valid cell positions are supplied
    #[error("line contains more than 81 cells")]
    TooManyCells,
}
