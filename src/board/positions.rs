//! Cells and houses of the 9x9 grid and their iteration orders.

use crate::consts::{BLOCK_SIZE, GRID_SIZE, N_CELLS};

/// One of the 81 cells of the board, numbered `0..=80` in row-major order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell`.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..=80`.
    pub fn new(idx: u8) -> Self {
        assert!((idx as usize) < N_CELLS);
        Cell(idx)
    }

    /// Cell at the given row and column, both `0..=8`.
    pub fn from_coords(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE);
        Cell(row * GRID_SIZE + col)
    }

    /// Iterator over all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..N_CELLS as u8).map(Cell)
    }

    /// Cell number as array index.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Row index from `0..=8`, topmost row is 0.
    pub fn row(self) -> u8 {
        self.0 / GRID_SIZE
    }

    /// Column index from `0..=8`, leftmost column is 0.
    pub fn col(self) -> u8 {
        self.0 % GRID_SIZE
    }

    /// Block index from `0..=8`, numbered left to right, top to bottom.
    pub fn block(self) -> u8 {
        (self.row() / BLOCK_SIZE) * BLOCK_SIZE + self.col() / BLOCK_SIZE
    }

    /// The row, column and block houses containing this cell.
    pub fn houses(self) -> [House; 3] {
        [
            House::Row(self.row()),
            House::Col(self.col()),
            House::Block(self.block()),
        ]
    }
}

/// A row, column or block. Each house must contain every digit exactly once
/// in a solved grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum House {
    /// Row `0..=8`, top to bottom
    Row(u8),
    /// Column `0..=8`, left to right
    Col(u8),
    /// 3x3 block `0..=8`, left to right, top to bottom
    Block(u8),
}

impl House {
    /// All 27 houses: rows, then columns, then blocks.
    pub fn all() -> impl Iterator<Item = House> {
        House::rows().chain(House::cols()).chain(House::blocks())
    }

    /// The nine rows, top to bottom.
    pub fn rows() -> impl Iterator<Item = House> {
        (0..GRID_SIZE).map(House::Row)
    }

    /// The nine columns, left to right.
    pub fn cols() -> impl Iterator<Item = House> {
        (0..GRID_SIZE).map(House::Col)
    }

    /// The nine blocks, left to right, top to bottom.
    pub fn blocks() -> impl Iterator<Item = House> {
        (0..GRID_SIZE).map(House::Block)
    }

    /// The nine cells of this house, in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).map(move |pos| self.cell_at(pos))
    }

    fn cell_at(self, pos: u8) -> Cell {
        match self {
            House::Row(row) => Cell::from_coords(row, pos),
            House::Col(col) => Cell::from_coords(pos, col),
            House::Block(block) => Cell::from_coords(
                (block / BLOCK_SIZE) * BLOCK_SIZE + pos / BLOCK_SIZE,
                (block % BLOCK_SIZE) * BLOCK_SIZE + pos % BLOCK_SIZE,
            ),
        }
    }

    /// House number as array index: rows `0..=8`, columns `9..=17`,
    /// blocks `18..=26`.
    pub fn as_index(self) -> usize {
        match self {
            House::Row(row) => row as usize,
            House::Col(col) => GRID_SIZE as usize + col as usize,
            House::Block(block) => 2 * GRID_SIZE as usize + block as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_house_covers_nine_distinct_cells() {
        for house in House::all() {
            let mut seen = [false; 81];
            for cell in house.cells() {
                assert!(!seen[cell.as_index()]);
                seen[cell.as_index()] = true;
            }
            assert_eq!(seen.iter().filter(|&&s| s).count(), 9);
        }
    }

    #[test]
    fn block_of_cell() {
        assert_eq!(Cell::from_coords(0, 0).block(), 0);
        assert_eq!(Cell::from_coords(4, 4).block(), 4);
        assert_eq!(Cell::from_coords(8, 0).block(), 6);
        assert_eq!(Cell::from_coords(2, 8).block(), 2);
    }

    #[test]
    fn house_indices_are_distinct() {
        let mut seen = [false; 27];
        for house in House::all() {
            assert!(!seen[house.as_index()]);
            seen[house.as_index()] = true;
        }
    }
}
