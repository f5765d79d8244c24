use crate::bitset::DigitSet;
use crate::board::Digit;

/// The three-way state of a single cell.
///
/// `Given` and `Solved` cells never revert to `Unknown` within one board
/// instance.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellState {
    /// Part of the original puzzle, immutable
    Given(Digit),
    /// Filled in by the solver
    Solved(Digit),
    /// Still empty, tracking the digits that could legally go here
    Unknown(DigitSet),
}

impl CellState {
    /// The digit in this cell, if it is filled.
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Given(digit) | CellState::Solved(digit) => Some(digit),
            CellState::Unknown(_) => None,
        }
    }

    /// Checks whether the cell is `Given` or `Solved`.
    pub fn is_filled(self) -> bool {
        self.digit().is_some()
    }

    /// The candidate set of an `Unknown` cell.
    pub fn candidates(self) -> Option<DigitSet> {
        match self {
            CellState::Unknown(candidates) => Some(candidates),
            _ => None,
        }
    }
}
