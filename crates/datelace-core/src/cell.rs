//! Board coordinates and piece-relative offsets.

use std::fmt;

/// A `(row, col)` coordinate with `(0, 0)` at the top left.
///
/// `Cell` is used in two roles: as an absolute position on a [`Board`],
/// and as a relative offset inside a piece shape. Ordering is row-major
/// (row first, then column), which is also the order the board
/// enumerates fillable cells in.
///
/// [`Board`]: crate::Board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Creates a cell at the given row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row coordinate.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column coordinate.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Treats `self` as a relative offset and anchors it at `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use datelace_core::Cell;
    ///
    /// let rel = Cell::new(1, 2);
    /// assert_eq!(rel.offset_by(Cell::new(3, 3)), Cell::new(4, 5));
    /// ```
    #[must_use]
    pub const fn offset_by(self, origin: Cell) -> Self {
        Self::new(origin.row + self.row, origin.col + self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
