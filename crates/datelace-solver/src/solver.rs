//! The solve orchestrator.

use std::sync::atomic::AtomicBool;

use datelace_core::{Board, Cell, Piece};

use crate::{
    dlx::{Cancelled, Dlx},
    matrix,
    placement::{self, Placement},
};

/// Errors surfaced by [`Solver::solve`].
///
/// "No solution exists" is not an error; it is the `Ok(None)` outcome.
/// These variants cover internal defects and cooperative cancellation
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// A generated placement covers a cell missing from the
    /// fillable-cell index. This indicates a defect in placement
    /// generation or a board mutated between snapshot and matrix
    /// construction; it is never swallowed.
    #[display("placement covers cell {cell} outside the fillable-cell index")]
    UnknownCell {
        /// The covered cell that has no column.
        cell: Cell,
    },
    /// The search was stopped via the cancellation flag.
    #[display("solve cancelled")]
    Cancelled,
}

/// Orchestrates exact-cover solves for a fixed piece catalogue.
///
/// The catalogue is an explicit value held by the solver; the board is
/// passed into each [`solve`] call by shared reference and is not
/// mutated. Placements, the cover matrix, and the dancing-links arena
/// are built fresh per call from one snapshot of the board's fillable
/// cells and discarded afterwards.
///
/// [`solve`]: Solver::solve
///
/// # Examples
///
/// ```
/// use datelace_core::{Board, Piece};
/// use datelace_solver::Solver;
///
/// let board = Board::from_ascii(&["##", "##"]).unwrap();
/// let square = Piece::from_ascii("S1", &["##", "##"]).unwrap();
///
/// let solver = Solver::new(vec![square]);
/// let solution = solver.solve(&board)?.expect("square fills the board");
/// assert_eq!(solution.len(), 1);
/// # Ok::<(), datelace_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    pieces: Vec<Piece>,
}

impl Solver {
    /// Creates a solver over the given piece catalogue.
    #[must_use]
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// Returns the piece catalogue.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Searches for an arrangement covering every fillable cell exactly
    /// once with each piece used exactly once.
    ///
    /// Returns `Ok(Some(placements))` for the first arrangement found
    /// (deterministic for a given board and catalogue), or `Ok(None)`
    /// when no arrangement exists. A board with no fillable cells and
    /// an empty catalogue is trivially covered by the empty
    /// arrangement.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::UnknownCell`] on an internal consistency
    /// defect; see [`SolverError`].
    pub fn solve(&self, board: &Board) -> Result<Option<Vec<Placement>>, SolverError> {
        let never = AtomicBool::new(false);
        self.solve_with_cancel(board, &never)
    }

    /// Like [`solve`](Solver::solve), but polls `cancel` at every
    /// search step and returns [`SolverError::Cancelled`] once it is
    /// set.
    ///
    /// The flag may be set from another thread; the search abandons its
    /// current branch at the next recursive call.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::UnknownCell`] or
    /// [`SolverError::Cancelled`]; see [`SolverError`].
    pub fn solve_with_cancel(
        &self,
        board: &Board,
        cancel: &AtomicBool,
    ) -> Result<Option<Vec<Placement>>, SolverError> {
        let fillable = board.fillable_cells();

        // Piece columns are mandatory, so a cover is only possible when
        // the total piece area equals the fillable area. Checking up
        // front turns an expensive exhaustive search into an immediate
        // answer.
        let area: usize = self.pieces.iter().map(Piece::cell_count).sum();
        if area != fillable.len() {
            log::debug!(
                "piece area {area} does not match {} fillable cells; no cover possible",
                fillable.len()
            );
            return Ok(None);
        }

        let placements = placement::generate_placements(board, &self.pieces);
        log::debug!(
            "{} placements over {} fillable cells and {} pieces",
            placements.len(),
            fillable.len(),
            self.pieces.len()
        );
        if placements.is_empty() && !fillable.is_empty() {
            return Ok(None);
        }

        let matrix = matrix::build(&fillable, &placements)?;
        let mut dlx = Dlx::new(matrix.columns);
        for (row, columns) in matrix.rows.iter().enumerate() {
            dlx.add_row(row, columns);
        }

        match dlx.solve_with_cancel(cancel) {
            Ok(Some(rows)) => {
                log::debug!("exact cover found using {} placements", rows.len());
                Ok(Some(
                    rows.into_iter().map(|row| placements[row].clone()).collect(),
                ))
            }
            Ok(None) => {
                log::debug!("search exhausted without an exact cover");
                Ok(None)
            }
            Err(Cancelled) => Err(SolverError::Cancelled),
        }
    }
}
