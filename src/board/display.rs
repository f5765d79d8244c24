use super::{Board, Cell, CellState};
use crate::consts::N_CELLS;
use std::fmt;

impl fmt::Display for Board {
    /// Block format: digits and `_` for empty cells, `|` between block
    /// columns and a dashed rule between block rows.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in Cell::all() {
            match (cell.row(), cell.col()) {
                (0, 0) => {}
                (3, 0) | (6, 0) => write!(f, "\n---+---+---\n")?,
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, "|")?,
                _ => {}
            }
            match self.cells[cell].digit() {
                Some(digit) => write!(f, "{}", digit)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

/// Audit display of a board's full state: filled cells print their digit,
/// unknown cells print their candidate set.
///
/// Obtained from [`Board::candidate_grid`].
/* Example output
┌─────────────────┬───────────────┬─────────────┐
│ 12    7     9   │ 4    3    128 │ 5   28   6  │
│ 5     1245  124 │ 128  6    7   │ 3   248  9  │
│ ...                                           │
└─────────────────┴───────────────┴─────────────┘
*/
pub struct CandidateGrid([CellState; N_CELLS]);

impl Board {
    /// Returns a snapshot of the board for candidate-level display.
    pub fn candidate_grid(&self) -> CandidateGrid {
        CandidateGrid(self.cells.0)
    }
}

fn cell_width(state: CellState) -> usize {
    match state {
        CellState::Unknown(candidates) => std::cmp::max(1, candidates.len() as usize),
        _ => 1,
    }
}

fn write_cell(f: &mut fmt::Formatter, state: CellState, width: usize) -> fmt::Result {
    let mut s = String::new();
    match state {
        CellState::Given(digit) | CellState::Solved(digit) => s.push((b'0' + digit.get()) as char),
        CellState::Unknown(candidates) => {
            for digit in candidates {
                s.push((b'0' + digit.get()) as char);
            }
            if s.is_empty() {
                s.push('!');
            }
        }
    }
    write!(f, "{:width$}", s, width = width)
}

impl fmt::Display for CandidateGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut column_widths = [0usize; 9];
        for col in 0..9 {
            column_widths[col] = (0..9)
                .map(|row| cell_width(self.0[row * 9 + col]))
                .max()
                .unwrap();
        }
        // width of one block column, including inner padding
        let stack_width = |stack: usize| {
            column_widths[stack * 3..stack * 3 + 3]
                .iter()
                .sum::<usize>()
                + 6
        };

        let rule = |f: &mut fmt::Formatter, left: char, mid: char, right: char| {
            writeln!(
                f,
                "{left}{0:─<1$}{mid}{0:─<2$}{mid}{0:─<3$}{right}",
                "",
                stack_width(0),
                stack_width(1),
                stack_width(2),
                left = left,
                mid = mid,
                right = right,
            )
        };

        rule(f, '┌', '┬', '┐')?;
        for row in 0..9 {
            if row == 3 || row == 6 {
                rule(f, '├', '┼', '┤')?;
            }
            write!(f, "│")?;
            for col in 0..9 {
                if col % 3 == 0 {
                    write!(f, " ")?;
                } else {
                    write!(f, "  ")?;
                }
                write_cell(f, self.0[row * 9 + col], column_widths[col])?;
                if col % 3 == 2 {
                    write!(f, " │")?;
                }
            }
            writeln!(f)?;
        }
        rule(f, '└', '┴', '┘')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_display() {
        let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
        let board = Board::from_str_line(line).unwrap();
        let expected = "\
___|2__|_63
3__|__5|4_1
__1|__3|98_
---+---+---
___|___|_9_
___|538|___
_3_|___|___
---+---+---
_26|3__|5__
5_3|7__|__8
47_|__1|___";
        assert_eq!(format!("{}", board), expected);
    }

    #[test]
    fn candidate_grid_renders_every_cell() {
        let board = Board::new();
        let rendered = format!("{}", board.candidate_grid());
        // 9 cell rows, 4 rules
        assert_eq!(rendered.lines().count(), 13);
        assert_eq!(rendered.matches("123456789").count(), 81);
    }
}
