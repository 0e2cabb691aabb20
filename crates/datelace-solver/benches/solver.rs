//! Benchmarks for calendar-puzzle solving.
//!
//! Measures the full solve pipeline (placement enumeration, matrix
//! construction, and dancing-links search) on the standard calendar
//! board for a handful of fixed dates.
//!
//! # Benchmarks
//!
//! - **`solve_calendar`**: Finds the first arrangement for each sample
//!   date, starting from a fresh board every iteration.
//! - **`generate_placements`**: Placement enumeration alone, the
//!   dominant pre-search cost.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use datelace_core::{Board, catalog};
use datelace_solver::{Solver, generate_placements};

const DATES: [(&str, &str); 3] = [("Jan", "1"), ("Jun", "14"), ("Dec", "25")];

fn date_board(month: &str, day: &str) -> Board {
    let mut board = catalog::calendar_board();
    for label in [month, day] {
        let cell = board.find_cell_by_label(label).unwrap();
        board.set_target(cell).unwrap();
    }
    board
}

fn bench_solve_calendar(c: &mut Criterion) {
    let solver = Solver::new(catalog::standard_pieces());

    for (month, day) in DATES {
        let board = date_board(month, day);
        c.bench_with_input(
            BenchmarkId::new("solve_calendar", format!("{month}_{day}")),
            &board,
            |b, board| {
                b.iter_batched(
                    || hint::black_box(board.clone()),
                    |board| solver.solve(&board),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_placements(c: &mut Criterion) {
    let pieces = catalog::standard_pieces();
    let board = date_board("Jun", "14");

    c.bench_function("generate_placements", |b| {
        b.iter(|| generate_placements(hint::black_box(&board), hint::black_box(&pieces)));
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_solve_calendar,
        bench_generate_placements
);
criterion_main!(benches);
