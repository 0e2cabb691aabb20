//! Example solving the calendar puzzle for a chosen date.
//!
//! Leaves the month and day cells of the given date uncovered and tiles
//! the rest of the calendar board with the nine standard pieces, then
//! prints the arrangement with one letter per piece.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_date -- --month Jun --day 14
//! ```
//!
//! Enable search diagnostics:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_date -- --month Jun --day 14
//! ```

use std::process;

use clap::Parser;
use datelace_core::{Board, Cell, CellState, catalog};
use datelace_solver::{Placement, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Month label (Jan..Dec, case-insensitive).
    #[arg(long, value_name = "MONTH")]
    month: String,

    /// Day of month (1..=31).
    #[arg(long, value_name = "DAY")]
    day: u8,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(month) = catalog::MONTH_LABELS
        .iter()
        .find(|label| label.eq_ignore_ascii_case(&args.month))
    else {
        eprintln!("Unknown month: {}", args.month);
        eprintln!("Expected one of: {}", catalog::MONTH_LABELS.join(", "));
        process::exit(2);
    };
    if !(1..=31).contains(&args.day) {
        eprintln!("--day must be between 1 and 31.");
        process::exit(2);
    }

    let mut board = catalog::calendar_board();
    let day = args.day.to_string();
    for label in [*month, day.as_str()] {
        let cell = board
            .find_cell_by_label(label)
            .unwrap_or_else(|| unreachable!("calendar board has a {label} cell"));
        board
            .set_target(cell)
            .unwrap_or_else(|e| unreachable!("labeled cells are fillable: {e}"));
    }

    let solver = Solver::new(catalog::standard_pieces());
    match solver.solve(&board) {
        Ok(Some(solution)) => {
            println!("{month} {day}:");
            println!();
            print_solution(&board, &solution);
        }
        Ok(None) => {
            eprintln!("No arrangement exists for {month} {day}.");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Solve failed: {e}");
            process::exit(1);
        }
    }
}

fn print_solution(board: &Board, solution: &[Placement]) {
    let mut glyphs = vec![vec![' '; board.cols()]; board.rows()];
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let cell = Cell::new(row, col);
            glyphs[row][col] = match board.state(cell) {
                Ok(CellState::OffBoard) | Err(_) => ' ',
                Ok(CellState::Target) => '*',
                Ok(_) => '.',
            };
        }
    }
    for (i, placement) in solution.iter().enumerate() {
        let letter = char::from(b'A' + u8::try_from(i).unwrap_or(0));
        for &cell in placement.cells() {
            glyphs[cell.row()][cell.col()] = letter;
        }
    }

    for row in &glyphs {
        let line: String = row.iter().collect();
        println!("  {}", line.trim_end());
    }
    println!();
    for (i, placement) in solution.iter().enumerate() {
        let letter = char::from(b'A' + u8::try_from(i).unwrap_or(0));
        println!("  {letter}: {placement}");
    }
}
