// Geometry of the standard sudoku grid. The solver is written for the
// 9x9 grid with 3x3 blocks; the constants keep the block arithmetic
// readable, they do not make the size configurable.
pub(crate) const BLOCK_SIZE: u8 = 3;
pub(crate) const GRID_SIZE: u8 = BLOCK_SIZE * BLOCK_SIZE;
pub(crate) const N_CELLS: usize = GRID_SIZE as usize * GRID_SIZE as usize;
pub(crate) const N_HOUSES: usize = 27;
