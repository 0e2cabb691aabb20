//! Sparse exact-cover matrix construction.
//!
//! Columns are assigned one per fillable board cell (in enumeration
//! order) followed by one per distinct piece identifier (in first-seen
//! order). Each placement becomes a row holding the column indices of
//! its covered cells plus its piece column, sorted ascending so the
//! dancing-links builder can consume them directly.

use std::collections::HashMap;

use datelace_core::Cell;
use tinyvec::TinyVec;

use crate::{Placement, SolverError};

#[derive(Debug)]
pub(crate) struct CoverMatrix {
    /// Total column count: fillable cells plus distinct piece ids.
    pub(crate) columns: usize,
    /// Sorted column indices per placement row, parallel to the
    /// placement list.
    pub(crate) rows: Vec<TinyVec<[usize; 8]>>,
}

/// Builds the matrix for the given fillable-cell snapshot and placements.
///
/// A placement covering a cell absent from `fillable` indicates a
/// defect in placement generation or a stale board snapshot and is
/// surfaced as [`SolverError::UnknownCell`].
pub(crate) fn build(
    fillable: &[Cell],
    placements: &[Placement],
) -> Result<CoverMatrix, SolverError> {
    let cell_columns: HashMap<Cell, usize> =
        fillable.iter().enumerate().map(|(i, &c)| (c, i)).collect();

    let mut piece_columns: HashMap<&str, usize> = HashMap::new();
    for placement in placements {
        let next = fillable.len() + piece_columns.len();
        piece_columns.entry(placement.piece_id()).or_insert(next);
    }

    let columns = fillable.len() + piece_columns.len();
    let mut rows = Vec::with_capacity(placements.len());
    for placement in placements {
        let mut row: TinyVec<[usize; 8]> = TinyVec::new();
        for &cell in placement.cells() {
            let column = cell_columns
                .get(&cell)
                .copied()
                .ok_or(SolverError::UnknownCell { cell })?;
            row.push(column);
        }
        row.push(piece_columns[placement.piece_id()]);
        row.sort_unstable();
        rows.push(row);
    }

    Ok(CoverMatrix { columns, rows })
}

#[cfg(test)]
mod tests {
    use datelace_core::{Board, Piece};

    use super::*;
    use crate::generate_placements;

    #[test]
    fn test_columns_and_rows() {
        let board = Board::from_ascii(&["##"]).unwrap();
        let fillable = board.fillable_cells();
        let domino = Piece::from_ascii("D", &["##"]).unwrap();
        let placements = generate_placements(&board, &[domino]);
        assert_eq!(placements.len(), 1);

        let matrix = build(&fillable, &placements).unwrap();
        // two cell columns plus one piece column
        assert_eq!(matrix.columns, 3);
        assert_eq!(matrix.rows.len(), 1);
        assert_eq!(matrix.rows[0][..], [0, 1, 2]);
    }

    #[test]
    fn test_piece_columns_in_first_seen_order() {
        let board = Board::from_ascii(&["###"]).unwrap();
        let fillable = board.fillable_cells();
        let pieces = [
            Piece::from_ascii("A", &["#"]).unwrap(),
            Piece::from_ascii("B", &["#"]).unwrap(),
        ];
        let placements = generate_placements(&board, &pieces);
        // three anchors for each of the two pieces
        assert_eq!(placements.len(), 6);

        let matrix = build(&fillable, &placements).unwrap();
        assert_eq!(matrix.columns, 5);
        // piece A saw column 3 first, piece B column 4
        assert_eq!(matrix.rows[0][..], [0, 3]);
        assert_eq!(matrix.rows[3][..], [0, 4]);
    }

    #[test]
    fn test_unknown_cell_is_an_error() {
        let board = Board::from_ascii(&["##"]).unwrap();
        let domino = Piece::from_ascii("D", &["##"]).unwrap();
        let placements = generate_placements(&board, &[domino]);

        // a stale snapshot missing one covered cell
        let stale = [Cell::new(0, 0)];
        assert_eq!(
            build(&stale, &placements).unwrap_err(),
            SolverError::UnknownCell {
                cell: Cell::new(0, 1)
            }
        );
    }
}
