//! Console front end: solves one of the built-in sample puzzles and prints
//! the board before and after, distinguishing givens, solved cells and
//! unsolved cells by color.

use std::env;
use std::process;
use std::time::Instant;

use sudoku_solver::{Board, Cell, CellState, SolveObserver, SolveStats};

// Sample puzzles from https://dingo.sbs.arizona.edu/~sandiway/sudoku/examples.html
const EASY: [[u8; 9]; 9] = [
    [0, 0, 0, 2, 6, 0, 7, 0, 1],
    [6, 8, 0, 0, 7, 0, 0, 9, 0],
    [1, 9, 0, 0, 0, 4, 5, 0, 0],
    [8, 2, 0, 1, 0, 0, 0, 4, 0],
    [0, 0, 4, 6, 0, 2, 9, 0, 0],
    [0, 5, 0, 0, 0, 3, 0, 2, 8],
    [0, 0, 9, 3, 0, 0, 0, 7, 4],
    [0, 4, 0, 0, 5, 0, 0, 3, 6],
    [7, 0, 3, 0, 1, 8, 0, 0, 0],
];

const MEDIUM: [[u8; 9]; 9] = [
    [0, 2, 0, 6, 0, 8, 0, 0, 0],
    [5, 8, 0, 0, 0, 9, 7, 0, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 0],
    [3, 7, 0, 0, 0, 0, 5, 0, 0],
    [6, 0, 0, 0, 0, 0, 0, 0, 4],
    [0, 0, 8, 0, 0, 0, 0, 1, 3],
    [0, 0, 0, 0, 2, 0, 0, 0, 0],
    [0, 0, 9, 8, 0, 0, 0, 3, 6],
    [0, 0, 0, 3, 0, 6, 0, 9, 0],
];

const HARD: [[u8; 9]; 9] = [
    [0, 0, 0, 6, 0, 0, 4, 0, 0],
    [7, 0, 0, 0, 0, 3, 6, 0, 0],
    [0, 0, 0, 0, 9, 1, 0, 8, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 5, 0, 1, 8, 0, 0, 0, 3],
    [0, 0, 0, 3, 0, 6, 0, 4, 5],
    [0, 4, 0, 2, 0, 0, 0, 6, 0],
    [9, 0, 3, 0, 0, 0, 0, 0, 0],
    [0, 2, 0, 0, 0, 0, 1, 0, 0],
];

const EXPERT: [[u8; 9]; 9] = [
    [0, 2, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 6, 0, 0, 0, 0, 3],
    [0, 7, 4, 0, 8, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 3, 0, 0, 2],
    [0, 8, 0, 0, 4, 0, 5, 1, 0],
    [6, 0, 0, 5, 0, 8, 3, 9, 0],
    [0, 0, 0, 0, 1, 0, 7, 8, 5],
    [5, 0, 0, 0, 0, 9, 0, 3, 1],
    [0, 0, 0, 0, 0, 0, 0, 4, 0],
];

const BLUE: &str = "\x1b[1;34m";
const GREEN: &str = "\x1b[1;32m";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

fn print_colored(board: &Board) {
    println!(" -----------------------");
    for row in 0..9 {
        print!(" | ");
        for col in 0..9 {
            match board.cell(Cell::from_coords(row, col)) {
                CellState::Given(digit) => print!("{}{}{}", BLUE, digit, RESET),
                CellState::Solved(digit) => print!("{}{}{}", GREEN, digit, RESET),
                CellState::Unknown(_) => print!("{}?{}", RED, RESET),
            }
            print!(" ");
            if col % 3 == 2 {
                print!("| ");
            }
        }
        println!();
        if row % 3 == 2 {
            println!(" -----------------------");
        }
    }
}

// Prints the board after every propagation pass, but only when debug
// logging is switched on. The solver itself never renders anything.
struct StepPrinter;

impl SolveObserver for StepPrinter {
    fn on_propagated(&mut self, board: &Board, stats: &SolveStats) {
        if log::log_enabled!(log::Level::Debug) {
            println!("\npropagation pass {}:", stats.passes);
            print_colored(board);
        }
    }
}

fn main() {
    env_logger::init();

    let name = env::args().nth(1).unwrap_or_else(|| "hard".to_string());
    let grid = match name.as_str() {
        "easy" => &EASY,
        "medium" => &MEDIUM,
        "hard" => &HARD,
        "expert" => &EXPERT,
        _ => {
            eprintln!("usage: sudoku-solver [easy|medium|hard|expert]");
            process::exit(2);
        }
    };

    let mut board = match Board::from_grid(grid) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid puzzle: {}", err);
            process::exit(2);
        }
    };

    println!("puzzle ({}):", name);
    print_colored(&board);

    if !board.is_consistent() {
        eprintln!("the given clues conflict with each other");
        process::exit(1);
    }

    let start = Instant::now();
    let (solved, stats) = board.solve_with_observer(&mut StepPrinter);
    let elapsed = start.elapsed();

    if solved {
        println!("\nsolution:");
        print_colored(&board);
        println!(
            "solved in {} ms ({} propagation passes, {} branches)",
            elapsed.as_millis(),
            stats.passes,
            stats.branches
        );
    } else {
        println!("no solution found after {} ms", elapsed.as_millis());
        process::exit(1);
    }
}
