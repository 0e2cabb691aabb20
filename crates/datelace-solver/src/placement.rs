//! Legal piece placements on a board.

use std::fmt;

use datelace_core::{Board, Cell, Piece};
use tinyvec::TinyVec;

/// One concrete, legal positioning of one piece orientation.
///
/// A placement is a pure description: which piece, which entry in its
/// orientation list, where the orientation's `(0, 0)` offset lands, and
/// the absolute board cells it covers. The covered cells are computed
/// once at construction and never recomputed; applying a placement to a
/// board is the caller's business (see [`Board::block_shape`]).
///
/// [`Board::block_shape`]: datelace_core::Board::block_shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    piece_id: String,
    orientation: usize,
    anchor: Cell,
    cells: TinyVec<[Cell; 8]>,
}

impl Placement {
    pub(crate) fn new(
        piece_id: String,
        orientation: usize,
        anchor: Cell,
        cells: TinyVec<[Cell; 8]>,
    ) -> Self {
        Self {
            piece_id,
            orientation,
            anchor,
            cells,
        }
    }

    /// Returns the identifier of the placed piece.
    #[must_use]
    pub fn piece_id(&self) -> &str {
        &self.piece_id
    }

    /// Returns the index into the piece's orientation list.
    #[must_use]
    pub const fn orientation(&self) -> usize {
        self.orientation
    }

    /// Returns the board cell where the orientation's `(0, 0)` offset lands.
    #[must_use]
    pub const fn anchor(&self) -> Cell {
        self.anchor
    }

    /// Returns the absolute board cells this placement covers.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} ori={} covers {} cells",
            self.piece_id,
            self.anchor,
            self.orientation,
            self.cells.len()
        )
    }
}

/// Enumerates every placement that is legal on the current board.
///
/// For each piece, each orientation, and each anchor where the
/// orientation's bounding box fits the grid, a placement is emitted iff
/// every offset cell lands on a currently fillable board cell. The scan
/// is read-only; the board is not mutated.
///
/// Complexity is `O(pieces x orientations x board area x piece size)`;
/// this is the dominant cost before search and is computed once per
/// solve.
#[must_use]
pub fn generate_placements(board: &Board, pieces: &[Piece]) -> Vec<Placement> {
    let mut placements = Vec::new();
    for piece in pieces {
        for (index, orientation) in piece.orientations().iter().enumerate() {
            if orientation.height() > board.rows() || orientation.width() > board.cols() {
                continue;
            }
            for row in 0..=board.rows() - orientation.height() {
                for col in 0..=board.cols() - orientation.width() {
                    let anchor = Cell::new(row, col);
                    let mut cells: TinyVec<[Cell; 8]> = TinyVec::new();
                    let mut fits = true;
                    for &rel in orientation.cells() {
                        let cell = rel.offset_by(anchor);
                        if !board.is_fillable(cell) {
                            fits = false;
                            break;
                        }
                        cells.push(cell);
                    }
                    if fits {
                        placements.push(Placement::new(
                            piece.id().to_owned(),
                            index,
                            anchor,
                            cells,
                        ));
                    }
                }
            }
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use datelace_core::Piece;

    use super::*;

    fn square() -> Piece {
        Piece::from_ascii("S1", &["##", "##"]).unwrap()
    }

    fn domino() -> Piece {
        Piece::from_ascii("D", &["##"]).unwrap()
    }

    #[test]
    fn test_square_on_2x2_board() {
        let board = Board::from_ascii(&["##", "##"]).unwrap();
        let placements = generate_placements(&board, &[square()]);
        assert_eq!(placements.len(), 1);
        let placement = &placements[0];
        assert_eq!(placement.piece_id(), "S1");
        assert_eq!(placement.orientation(), 0);
        assert_eq!(placement.anchor(), Cell::new(0, 0));
        assert_eq!(
            placement.cells(),
            [
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_domino_orientations_on_2x2_board() {
        let board = Board::from_ascii(&["##", "##"]).unwrap();
        let placements = generate_placements(&board, &[domino()]);
        // two horizontal and two vertical positions
        assert_eq!(placements.len(), 4);
    }

    #[test]
    fn test_placements_avoid_unavailable_cells() {
        let mut board = Board::from_ascii(&["##", "##"]).unwrap();
        board.set_target(Cell::new(0, 0)).unwrap();
        let placements = generate_placements(&board, &[domino()]);
        // only the bottom horizontal and right vertical dominoes remain
        assert_eq!(placements.len(), 2);
        for placement in &placements {
            for &cell in placement.cells() {
                assert!(board.is_fillable(cell));
            }
        }
    }

    #[test]
    fn test_covered_count_matches_piece_size() {
        let board = Board::from_ascii(&["####", "####", "####"]).unwrap();
        let pieces = [square(), domino(), Piece::from_ascii("T1", &[".#.", "###"]).unwrap()];
        for placement in generate_placements(&board, &pieces) {
            let piece = pieces
                .iter()
                .find(|p| p.id() == placement.piece_id())
                .unwrap();
            assert_eq!(placement.cells().len(), piece.cell_count());
        }
    }

    #[test]
    fn test_oversized_piece_yields_nothing() {
        let board = Board::from_ascii(&["##"]).unwrap();
        let placements = generate_placements(&board, &[square()]);
        assert!(placements.is_empty());
    }
}
