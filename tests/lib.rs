use sudoku_solver::{
    Board, Digit, DigitSet, House, LineParseError, NullObserver, OutOfRangeError,
};

// Sample puzzles from https://dingo.sbs.arizona.edu/~sandiway/sudoku/examples.html
const EASY: &str =
    "...26.7.168..7..9.19...45..82.1...4...46.29...5...3.28..93...74.4..5..367.3.18...";
const MEDIUM: &str =
    ".2.6.8...58...97......4....37....5..6.......4..8....13....2......98...36...3.6.9.";
const HARD: &str =
    "...6..4..7....36......91.8...........5.18...3...3.6.45.4.2...6.9.3.......2....1..";
const EXPERT: &str =
    ".2..........6....3.74.8.........3..2.8..4.51.6..5.839.....1.7855....9.31.......4.";

// EXPERT with six more clues removed; no longer guaranteed a unique solution
const REDUCED_EXPERT: &str =
    ".2..........6....3.74.8.........3..2.8..4..1.6..5.........1.78.5....9..........4.";

// 17 clues, the minimal number for a unique solution
const SEVENTEEN_CLUES: &str =
    "..............3.85..1.2.......5.7.....4...1...9.......5......73..2.1........4...9";

const SOLVED: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

fn solved_board(line: &str) -> Board {
    let mut board = Board::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err));
    assert!(board.is_consistent(), "clues conflict");
    assert!(board.solve(), "no solution found");
    board
}

/// Stronger than `is_consistent`: every house must contain every digit
/// exactly once.
fn assert_valid_solution(board: &Board) {
    for house in House::all() {
        let placed: DigitSet = house
            .cells()
            .filter_map(|cell| board.cell(cell).digit())
            .collect();
        assert_eq!(placed, DigitSet::ALL, "house {:?} is incomplete", house);
    }
}

#[test]
fn solves_sample_puzzles() {
    for &line in &[EASY, MEDIUM, HARD, EXPERT] {
        assert_valid_solution(&solved_board(line));
    }
}

#[test]
fn solved_input_returns_immediately_without_branching() {
    let mut board = Board::from_str_line(SOLVED).unwrap();
    assert!(board.is_solved());
    let (solved, stats) = board.solve_with_observer(&mut NullObserver);
    assert!(solved);
    assert_eq!(stats.branches, 0);
    assert_eq!(board.to_str_line(), SOLVED);
}

#[test]
fn single_empty_cell_solves_by_propagation_alone() {
    let mut line = SOLVED.to_string();
    line.replace_range(40..41, ".");
    let mut board = Board::from_str_line(&line).unwrap();
    let (solved, stats) = board.solve_with_observer(&mut NullObserver);
    assert!(solved);
    assert_eq!(stats.branches, 0);
    assert_eq!(board.to_str_line(), SOLVED);
}

#[test]
fn seventeen_clue_puzzle_solves() {
    let board = solved_board(SEVENTEEN_CLUES);
    assert_valid_solution(&board);
    // the givens survive in place
    for (cell, ch) in SEVENTEEN_CLUES.chars().enumerate() {
        if let Some(digit) = ch.to_digit(10) {
            assert_eq!(board.to_str_line().as_bytes()[cell], b'0' + digit as u8);
        }
    }
}

#[test]
fn duplicate_givens_are_rejected_before_search() {
    let mut grid = [[0; 9]; 9];
    grid[4][1] = 6;
    grid[4][7] = 6;
    let mut board = Board::from_grid(&grid).unwrap();
    assert!(!board.is_consistent());
    assert!(!board.solve());
}

#[test]
fn consistent_but_unsolvable_grid_returns_failure() {
    // (0, 0) has no candidate: its row holds 1..=8 and its column the 9
    let mut grid = [[0u8; 9]; 9];
    grid[0] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    grid[5][0] = 9;
    let mut board = Board::from_grid(&grid).unwrap();
    assert!(board.is_consistent());
    assert!(!board.solve());
}

#[test]
fn solving_is_deterministic() {
    // the reduced grid admits several solutions; the search must still pick
    // the same one with the same effort every time
    let mut first = Board::from_str_line(REDUCED_EXPERT).unwrap();
    let mut second = first.clone();
    let (solved_first, stats_first) = first.solve_with_observer(&mut NullObserver);
    let (solved_second, stats_second) = second.solve_with_observer(&mut NullObserver);
    assert!(solved_first && solved_second);
    assert_eq!(first.to_str_line(), second.to_str_line());
    assert_eq!(stats_first, stats_second);
}

#[test]
fn solution_preserves_given_cells() {
    let board = solved_board(HARD);
    let reparsed = Board::from_str_line(HARD).unwrap();
    for row in 0..9 {
        for col in 0..9 {
            if let Some(value) = reparsed.value(row, col) {
                assert_eq!(board.value(row, col), Some(value));
            }
        }
    }
}

#[test]
fn malformed_input_is_an_error_not_a_failed_solve() {
    let mut grid = [[0; 9]; 9];
    grid[8][8] = 10;
    assert_eq!(
        Board::from_grid(&grid),
        Err(OutOfRangeError {
            row: 8,
            col: 8,
            value: 10
        })
    );
    assert_eq!(
        Board::from_str_line("123"),
        Err(LineParseError::NotEnoughCells(3))
    );
}

#[test]
fn digit_roundtrip() {
    for digit in Digit::all() {
        assert_eq!(Digit::new(digit.get()), digit);
    }
    assert_eq!(Digit::new_checked(0), None);
    assert_eq!(Digit::new_checked(10), None);
}
