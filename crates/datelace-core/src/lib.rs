//! Core data structures for the calendar polyomino puzzle.
//!
//! This crate provides the data model shared by the solver and any
//! front end: an irregular labeled board, polyomino pieces with
//! symmetry-distinct orientation generation, and the built-in calendar
//! puzzle definitions.
//!
//! # Overview
//!
//! - [`cell`]: `(row, col)` coordinates, used both as absolute board
//!   positions and as piece-relative offsets
//! - [`board`]: the irregular board grid with per-cell states
//!   (off-board, fillable, target, blocked) and optional labels
//! - [`piece`]: polyomino shapes parsed from ASCII templates, with
//!   rotation/reflection orientation generation
//! - [`catalog`]: the seven-row calendar board and the standard
//!   nine-piece catalogue
//!
//! # Examples
//!
//! ```
//! use datelace_core::{Cell, catalog};
//!
//! let mut board = catalog::calendar_board();
//!
//! // Leave today's date visible.
//! let day = board.find_cell_by_label("14").unwrap();
//! let month = board.find_cell_by_label("Jun").unwrap();
//! board.set_target(day).unwrap();
//! board.set_target(month).unwrap();
//!
//! // 43 fillable cells minus the two date cells.
//! assert_eq!(board.fillable_cells().len(), 41);
//! assert_eq!(board.label(Cell::new(0, 1)), Some("Jan"));
//! ```

pub mod board;
pub mod catalog;
pub mod cell;
pub mod piece;

pub use self::{
    board::{Board, BoardError, CellState},
    cell::Cell,
    piece::{Orientation, Piece, PieceError},
};
