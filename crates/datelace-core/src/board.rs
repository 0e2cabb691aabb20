//! The irregular puzzle board.

use std::fmt;

use crate::Cell;

/// The state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// The cell lies outside the irregular board shape.
    OffBoard,
    /// The cell may be covered by a piece.
    Fillable,
    /// The cell must remain visible and may not be covered.
    Target,
    /// The cell has been covered by a placed piece.
    Blocked,
}

/// Errors from board construction or mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The ASCII shape has no rows or no columns.
    #[display("board shape must have at least one row and one column")]
    EmptyShape,
    /// A shape row differs in length from the first row.
    #[display("shape row {row} has length {len}, expected {expected}")]
    RaggedShape {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
    /// A coordinate lies outside the grid.
    #[display("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// The rejected coordinate.
        cell: Cell,
        /// Grid height.
        rows: usize,
        /// Grid width.
        cols: usize,
    },
    /// A state transition was requested on a cell that does not allow it.
    #[display("cell {cell} is {state:?} and cannot become {requested:?}")]
    InvalidTransition {
        /// The cell whose transition was rejected.
        cell: Cell,
        /// The cell's current state.
        state: CellState,
        /// The state that was requested.
        requested: CellState,
    },
}

/// An irregular puzzle board with per-cell states and optional labels.
///
/// A board is built from an ASCII shape where `#` marks a fillable cell
/// and any other character is off-board. Labels (month and day names on
/// the calendar board) are attached afterwards with [`set_label`].
///
/// State transitions are one-way: a fillable cell can become a
/// [`Target`] (left visible for the chosen date) or [`Blocked`]
/// (covered by a placed piece). The only way back is [`reset`], which
/// restores every non-off-board cell to fillable.
///
/// A board is a single-writer structure: it is mutated between solve
/// attempts, never during one.
///
/// [`set_label`]: Board::set_label
/// [`Target`]: CellState::Target
/// [`Blocked`]: CellState::Blocked
/// [`reset`]: Board::reset
///
/// # Examples
///
/// ```
/// use datelace_core::{Board, Cell, CellState};
///
/// let mut board = Board::from_ascii(&["##.", "###"])?;
/// assert_eq!(board.state(Cell::new(0, 2))?, CellState::OffBoard);
/// assert_eq!(board.fillable_cells().len(), 5);
///
/// board.set_target(Cell::new(0, 0))?;
/// assert!(!board.is_fillable(Cell::new(0, 0)));
/// # Ok::<(), datelace_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    grid: Vec<CellState>,
    labels: Vec<Option<String>>,
}

impl Board {
    /// Parses a board from an ASCII shape.
    ///
    /// `#` marks a fillable cell; every other character is off-board.
    /// All rows must have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyShape`] for an empty shape and
    /// [`BoardError::RaggedShape`] when row lengths differ.
    pub fn from_ascii<S: AsRef<str>>(shape: &[S]) -> Result<Self, BoardError> {
        let cols = shape
            .first()
            .map(|row| row.as_ref().chars().count())
            .ok_or(BoardError::EmptyShape)?;
        if cols == 0 {
            return Err(BoardError::EmptyShape);
        }

        let rows = shape.len();
        let mut grid = Vec::with_capacity(rows * cols);
        for (row, line) in shape.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != cols {
                return Err(BoardError::RaggedShape {
                    row,
                    len,
                    expected: cols,
                });
            }
            grid.extend(line.chars().map(|ch| {
                if ch == '#' {
                    CellState::Fillable
                } else {
                    CellState::OffBoard
                }
            }));
        }

        Ok(Self {
            rows,
            cols,
            grid,
            labels: vec![None; rows * cols],
        })
    }

    /// Returns the grid height.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the grid width.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, cell: Cell) -> Result<usize, BoardError> {
        if cell.row() < self.rows && cell.col() < self.cols {
            Ok(cell.row() * self.cols + cell.col())
        } else {
            Err(BoardError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns the state of `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `cell` lies outside the grid.
    pub fn state(&self, cell: Cell) -> Result<CellState, BoardError> {
        self.index(cell).map(|i| self.grid[i])
    }

    /// Returns `true` if `cell` is inside the grid and currently fillable.
    #[must_use]
    pub fn is_fillable(&self, cell: Cell) -> bool {
        matches!(self.state(cell), Ok(CellState::Fillable))
    }

    /// Attaches a label to `cell`, replacing any previous label.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `cell` lies outside the grid.
    pub fn set_label(&mut self, cell: Cell, label: impl Into<String>) -> Result<(), BoardError> {
        let i = self.index(cell)?;
        self.labels[i] = Some(label.into());
        Ok(())
    }

    /// Returns the label of `cell`, if any.
    #[must_use]
    pub fn label(&self, cell: Cell) -> Option<&str> {
        self.index(cell)
            .ok()
            .and_then(|i| self.labels[i].as_deref())
    }

    /// Returns every currently fillable cell in row-major order.
    ///
    /// The solver uses this order to assign exact-cover columns, so it
    /// must be stable for a given board state.
    #[must_use]
    pub fn fillable_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                if self.is_fillable(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Blocks a fillable cell so pieces can no longer occupy it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates outside the
    /// grid and [`BoardError::InvalidTransition`] if the cell is not
    /// currently fillable.
    pub fn block(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.transition(cell, CellState::Blocked)
    }

    /// Marks a fillable cell as the target that must stay visible.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates outside the
    /// grid and [`BoardError::InvalidTransition`] if the cell is not
    /// currently fillable.
    pub fn set_target(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.transition(cell, CellState::Target)
    }

    fn transition(&mut self, cell: Cell, requested: CellState) -> Result<(), BoardError> {
        let i = self.index(cell)?;
        match self.grid[i] {
            CellState::Fillable => {
                self.grid[i] = requested;
                Ok(())
            }
            state => Err(BoardError::InvalidTransition {
                cell,
                state,
                requested,
            }),
        }
    }

    /// Blocks a relative shape anchored at `origin`.
    ///
    /// Cells that fall off the grid or are not currently fillable are
    /// skipped silently; this applies a solved placement to the board.
    pub fn block_shape(&mut self, shape: &[Cell], origin: Cell) {
        for &rel in shape {
            let cell = rel.offset_by(origin);
            if self.is_fillable(cell) {
                // ignore the error: only fillable cells reach here
                let _ = self.block(cell);
            }
        }
    }

    /// Restores every non-off-board cell to fillable.
    ///
    /// Target and blocked cells alike become fillable again; off-board
    /// cells are untouched. This is the only way back from the blocked
    /// state, used when re-solving for a different date.
    pub fn reset(&mut self) {
        for state in &mut self.grid {
            if *state != CellState::OffBoard {
                *state = CellState::Fillable;
            }
        }
    }

    /// Finds the fillable cell carrying `label`, if one exists.
    ///
    /// Only fillable cells are searched, matching the label lookup used
    /// for date selection: targets are looked up before being marked.
    #[must_use]
    pub fn find_cell_by_label(&self, label: &str) -> Option<Cell> {
        self.fillable_cells()
            .into_iter()
            .find(|&cell| self.label(cell) == Some(label))
    }
}

impl fmt::Display for Board {
    /// Renders the shape: `#` fillable, `X` blocked, `O` target, `.` off-board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let ch = match self.grid[row * self.cols + col] {
                    CellState::OffBoard => '.',
                    CellState::Fillable => '#',
                    CellState::Target => 'O',
                    CellState::Blocked => 'X',
                };
                write!(f, "{ch}")?;
            }
            if row + 1 < self.rows {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        Board::from_ascii(&["##.", "###"]).unwrap()
    }

    #[test]
    fn test_from_ascii_states() {
        let board = small_board();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.state(Cell::new(0, 0)).unwrap(), CellState::Fillable);
        assert_eq!(board.state(Cell::new(0, 2)).unwrap(), CellState::OffBoard);
        assert_eq!(
            board.state(Cell::new(2, 0)),
            Err(BoardError::OutOfBounds {
                cell: Cell::new(2, 0),
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn test_from_ascii_rejects_empty_and_ragged() {
        assert_eq!(
            Board::from_ascii::<&str>(&[]),
            Err(BoardError::EmptyShape)
        );
        assert_eq!(Board::from_ascii(&[""]), Err(BoardError::EmptyShape));
        assert_eq!(
            Board::from_ascii(&["##", "###"]),
            Err(BoardError::RaggedShape {
                row: 1,
                len: 3,
                expected: 2
            })
        );
    }

    #[test]
    fn test_fillable_cells_row_major() {
        let board = small_board();
        assert_eq!(
            board.fillable_cells(),
            [
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_block_and_target_transitions() {
        let mut board = small_board();
        board.block(Cell::new(0, 0)).unwrap();
        assert_eq!(board.state(Cell::new(0, 0)).unwrap(), CellState::Blocked);
        assert!(!board.is_fillable(Cell::new(0, 0)));

        // blocking twice is an error
        assert_eq!(
            board.block(Cell::new(0, 0)),
            Err(BoardError::InvalidTransition {
                cell: Cell::new(0, 0),
                state: CellState::Blocked,
                requested: CellState::Blocked,
            })
        );

        // a target cannot be blocked and an off-board cell cannot be targeted
        board.set_target(Cell::new(0, 1)).unwrap();
        assert!(board.block(Cell::new(0, 1)).is_err());
        assert!(board.set_target(Cell::new(0, 2)).is_err());
    }

    #[test]
    fn test_block_shape_skips_unavailable_cells() {
        let mut board = small_board();
        board.set_target(Cell::new(1, 1)).unwrap();
        // domino at (1, 0)-(1, 1): only the fillable half is blocked
        board.block_shape(&[Cell::new(0, 0), Cell::new(0, 1)], Cell::new(1, 0));
        assert_eq!(board.state(Cell::new(1, 0)).unwrap(), CellState::Blocked);
        assert_eq!(board.state(Cell::new(1, 1)).unwrap(), CellState::Target);
    }

    #[test]
    fn test_reset_restores_targets_and_blocked() {
        let mut board = small_board();
        board.set_target(Cell::new(0, 0)).unwrap();
        board.block(Cell::new(1, 2)).unwrap();
        board.reset();
        assert_eq!(board.fillable_cells().len(), 5);
        assert_eq!(board.state(Cell::new(0, 2)).unwrap(), CellState::OffBoard);
    }

    #[test]
    fn test_labels_and_lookup() {
        let mut board = small_board();
        board.set_label(Cell::new(1, 2), "29").unwrap();
        assert_eq!(board.label(Cell::new(1, 2)), Some("29"));
        assert_eq!(board.label(Cell::new(0, 0)), None);
        assert_eq!(board.find_cell_by_label("29"), Some(Cell::new(1, 2)));
        assert_eq!(board.find_cell_by_label("30"), None);

        // lookup only sees fillable cells
        board.set_target(Cell::new(1, 2)).unwrap();
        assert_eq!(board.find_cell_by_label("29"), None);
    }

    #[test]
    fn test_display_shape() {
        let mut board = small_board();
        board.set_target(Cell::new(0, 0)).unwrap();
        board.block(Cell::new(1, 1)).unwrap();
        assert_eq!(board.to_string(), "O#.\n#X#");
    }
}
