//! Polyomino pieces and orientation generation.

use std::collections::HashSet;

use crate::Cell;

/// Errors from piece construction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PieceError {
    /// The ASCII template has no rows or no columns.
    #[display("piece {id:?} has an empty template")]
    EmptyTemplate {
        /// Identifier of the rejected piece.
        id: String,
    },
    /// A template row differs in length from the first row.
    #[display("piece {id:?} template row {row} has length {len}, expected {expected}")]
    RaggedTemplate {
        /// Identifier of the rejected piece.
        id: String,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
    /// The template contains no `#` cells.
    #[display("piece {id:?} has no occupied cells")]
    NoCells {
        /// Identifier of the rejected piece.
        id: String,
    },
}

/// A polyomino piece: an identifier plus a canonical cell set.
///
/// The canonical cells are normalized so the minimum row and column are
/// zero, and kept in row-major order. A piece is immutable once
/// constructed; [`orientations`] derives its rotation/reflection
/// variants on demand.
///
/// [`orientations`]: Piece::orientations
///
/// # Examples
///
/// ```
/// use datelace_core::Piece;
///
/// let piece = Piece::from_ascii("L_small", &["#.", "#.", "##"])?;
/// assert_eq!(piece.cell_count(), 4);
/// assert_eq!((piece.height(), piece.width()), (3, 2));
/// // A chiral L has all eight orientations.
/// assert_eq!(piece.orientations().len(), 8);
/// # Ok::<(), datelace_core::PieceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: String,
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Piece {
    /// Parses a piece from an ASCII template.
    ///
    /// `#` marks an occupied cell; every other character is empty. All
    /// rows must have the same length. The parsed cells are normalized
    /// so the minimum row and column are zero.
    ///
    /// # Errors
    ///
    /// Returns [`PieceError::EmptyTemplate`] or
    /// [`PieceError::RaggedTemplate`] for malformed templates, and
    /// [`PieceError::NoCells`] when the template contains no `#`.
    pub fn from_ascii<S: AsRef<str>>(
        id: impl Into<String>,
        template: &[S],
    ) -> Result<Self, PieceError> {
        let id = id.into();
        let expected = template
            .first()
            .map(|row| row.as_ref().chars().count())
            .ok_or_else(|| PieceError::EmptyTemplate { id: id.clone() })?;
        if expected == 0 {
            return Err(PieceError::EmptyTemplate { id });
        }

        let mut raw = Vec::new();
        for (row, line) in template.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != expected {
                return Err(PieceError::RaggedTemplate {
                    id,
                    row,
                    len,
                    expected,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    raw.push(Cell::new(row, col));
                }
            }
        }
        if raw.is_empty() {
            return Err(PieceError::NoCells { id });
        }

        let mut cells = normalize(&raw);
        cells.sort_unstable();
        let (height, width) = bounding_box(&cells);
        Ok(Self {
            id,
            cells,
            height,
            width,
        })
    }

    /// Returns the piece identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the canonical cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of cells the piece occupies.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the canonical bounding-box height.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the canonical bounding-box width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Generates all symmetry-distinct orientations of this piece.
    ///
    /// Combines the identity and a horizontal reflection with the four
    /// clockwise rotations, normalizes each result, and deduplicates by
    /// cell-set equality. The canonical shape is always first, and the
    /// order is stable, so indices into the returned list identify
    /// orientations across calls.
    ///
    /// A piece has between 1 and 8 orientations depending on its
    /// symmetry.
    ///
    /// # Examples
    ///
    /// ```
    /// use datelace_core::Piece;
    ///
    /// let square = Piece::from_ascii("S1", &["##", "##"])?;
    /// assert_eq!(square.orientations().len(), 1);
    ///
    /// let tee = Piece::from_ascii("T1", &[".#.", "###"])?;
    /// assert_eq!(tee.orientations().len(), 4);
    /// # Ok::<(), datelace_core::PieceError>(())
    /// ```
    #[must_use]
    pub fn orientations(&self) -> Vec<Orientation> {
        let mut seen: HashSet<Vec<Cell>> = HashSet::new();
        let mut variants = Vec::new();

        for flip in [false, true] {
            let mut shape: Vec<Cell> = if flip {
                // reflect across the bounding-box width
                self.cells
                    .iter()
                    .map(|&c| Cell::new(c.row(), self.width - 1 - c.col()))
                    .collect()
            } else {
                self.cells.clone()
            };
            let mut height = self.height;
            let mut width = self.width;

            for _ in 0..4 {
                let mut cells = normalize(&shape);
                cells.sort_unstable();
                if seen.insert(cells.clone()) {
                    variants.push(Orientation {
                        cells,
                        height,
                        width,
                    });
                }
                // rotate 90 degrees clockwise: (r, c) -> (c, height - 1 - r)
                shape = shape
                    .iter()
                    .map(|&c| Cell::new(c.col(), height - 1 - c.row()))
                    .collect();
                std::mem::swap(&mut height, &mut width);
            }
        }

        variants
    }
}

/// One normalized rotation/reflection variant of a piece shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl Orientation {
    /// Returns the orientation's cells, normalized and in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the bounding-box height.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the bounding-box width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }
}

/// Shifts cells so the minimum row and column are zero.
fn normalize(cells: &[Cell]) -> Vec<Cell> {
    let min_row = cells.iter().map(|c| c.row()).min().unwrap_or(0);
    let min_col = cells.iter().map(|c| c.col()).min().unwrap_or(0);
    cells
        .iter()
        .map(|&c| Cell::new(c.row() - min_row, c.col() - min_col))
        .collect()
}

fn bounding_box(cells: &[Cell]) -> (usize, usize) {
    let height = cells.iter().map(|c| c.row()).max().unwrap_or(0) + 1;
    let width = cells.iter().map(|c| c.col()).max().unwrap_or(0) + 1;
    (height, width)
}
