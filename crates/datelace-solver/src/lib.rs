//! Exact-cover solver for the calendar polyomino puzzle.
//!
//! Given a [`Board`] and a piece catalogue, the solver finds an
//! arrangement of non-overlapping pieces that covers every fillable
//! cell exactly once while using each piece exactly once. The search is
//! phrased as an exact cover problem: one matrix column per fillable
//! cell plus one per piece, one row per legal [`Placement`], solved
//! with Knuth's Algorithm X over a dancing-links structure.
//!
//! # Overview
//!
//! - [`placement`]: enumeration of every legal piece placement on the
//!   current board
//! - [`dlx`]: the arena-indexed dancing-links engine
//! - [`solver`]: the orchestrator tying board, placements, matrix, and
//!   search together
//!
//! # Examples
//!
//! ```
//! use datelace_core::catalog;
//! use datelace_solver::Solver;
//!
//! let mut board = catalog::calendar_board();
//! let day = board.find_cell_by_label("14").unwrap();
//! let month = board.find_cell_by_label("Jun").unwrap();
//! board.set_target(day).unwrap();
//! board.set_target(month).unwrap();
//!
//! let solver = Solver::new(catalog::standard_pieces());
//! let solution = solver.solve(&board)?.expect("every date has an arrangement");
//! assert_eq!(solution.len(), 9);
//! # Ok::<(), datelace_solver::SolverError>(())
//! ```
//!
//! [`Board`]: datelace_core::Board

pub mod dlx;
mod matrix;
pub mod placement;
pub mod solver;

pub use self::{
    placement::{Placement, generate_placements},
    solver::{Solver, SolverError},
};
