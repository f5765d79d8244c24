// A collection of internal helper types
// like arrays that can only be indexed by the right position structs

use crate::board::{Cell, House};
use crate::consts::{N_CELLS, N_HOUSES};
use std::ops::{Index, IndexMut};

// Marker for a board state that cannot lead to a solution. Not an error
// in the public API sense; dead branches are a normal search outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Unsolvable;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Container with one slot for each cell.
pub(crate) struct CellArray<T>(pub [T; N_CELLS]);

impl<T> Index<Cell> for CellArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: Cell) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<Cell> for CellArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: Cell) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Container with one slot for each row, column and block.
pub(crate) struct HouseArray<T>(pub [T; N_HOUSES]);

impl<T> Index<House> for HouseArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, idx: House) -> &Self::Output {
        &self.0[idx.as_index()]
    }
}

impl<T> IndexMut<House> for HouseArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, idx: House) -> &mut Self::Output {
        &mut self.0[idx.as_index()]
    }
}
