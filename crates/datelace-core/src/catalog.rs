//! Built-in calendar puzzle definitions.
//!
//! The calendar board is a seven-row irregular grid: two six-cell month
//! rows, four seven-cell day rows, and a final three-cell row for days
//! 29-31. The standard catalogue holds nine pieces with a total area of
//! 41 cells, which is exactly the 43 fillable cells minus the two date
//! cells left visible.

use crate::{Board, Cell, Piece};

/// Three-letter month labels in calendar order.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const CALENDAR_SHAPE: [&str; 7] = [
    ".######..",
    ".######..",
    ".#######.",
    ".#######.",
    ".#######.",
    ".#######.",
    "...###...",
];

/// Creates the calendar board with month and day labels attached.
///
/// Months occupy rows 0-1 (six per row), days 1-28 occupy rows 2-5
/// (seven per row), and days 29-31 sit in the final row.
///
/// # Examples
///
/// ```
/// use datelace_core::catalog;
///
/// let board = catalog::calendar_board();
/// assert_eq!(board.fillable_cells().len(), 43);
/// assert!(board.find_cell_by_label("31").is_some());
/// assert!(board.find_cell_by_label("Dec").is_some());
/// ```
#[must_use]
pub fn calendar_board() -> Board {
    let mut board = Board::from_ascii(&CALENDAR_SHAPE).expect("calendar shape is well formed");
    for (i, label) in MONTH_LABELS.iter().enumerate() {
        let cell = Cell::new(i / 6, 1 + i % 6);
        board
            .set_label(cell, *label)
            .expect("month cell is on the board");
    }
    for day in 1..=31usize {
        let cell = if day <= 28 {
            Cell::new(2 + (day - 1) / 7, 1 + (day - 1) % 7)
        } else {
            Cell::new(6, 3 + (day - 29))
        };
        board
            .set_label(cell, day.to_string())
            .expect("day cell is on the board");
    }
    board
}

/// Creates the standard nine-piece catalogue.
///
/// Every piece carries a stable identifier; the solver requires each
/// one to be used exactly once.
#[must_use]
pub fn standard_pieces() -> Vec<Piece> {
    let templates: [(&str, &[&str]); 9] = [
        ("L_small", &["#.", "#.", "##"]),
        ("L_big", &["#.", "#.", "#.", "##"]),
        ("S1", &["##", "##"]),
        ("T1", &[".#.", "###"]),
        ("Lightning", &[".##", "##."]),
        ("Bridge", &["###", "#.#"]),
        ("LightningBig", &[".##", ".#.", "##."]),
        ("SquarePlus", &[".#", "##", "##"]),
        ("Cross", &[".#.", "###", ".#."]),
    ];
    templates
        .iter()
        .map(|(id, template)| {
            Piece::from_ascii(*id, template).expect("builtin piece template is valid")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_calendar_board_counts() {
        let board = calendar_board();
        assert_eq!(board.rows(), 7);
        assert_eq!(board.cols(), 9);
        assert_eq!(board.fillable_cells().len(), 43);
    }

    #[test]
    fn test_every_label_is_findable() {
        let board = calendar_board();
        for month in MONTH_LABELS {
            assert!(
                board.find_cell_by_label(month).is_some(),
                "missing month {month}"
            );
        }
        for day in 1..=31 {
            assert!(
                board.find_cell_by_label(&day.to_string()).is_some(),
                "missing day {day}"
            );
        }
    }

    #[test]
    fn test_label_positions() {
        let board = calendar_board();
        assert_eq!(board.find_cell_by_label("Jan"), Some(Cell::new(0, 1)));
        assert_eq!(board.find_cell_by_label("Dec"), Some(Cell::new(1, 6)));
        assert_eq!(board.find_cell_by_label("1"), Some(Cell::new(2, 1)));
        assert_eq!(board.find_cell_by_label("28"), Some(Cell::new(5, 7)));
        assert_eq!(board.find_cell_by_label("29"), Some(Cell::new(6, 3)));
        assert_eq!(board.find_cell_by_label("31"), Some(Cell::new(6, 5)));
    }

    #[test]
    fn test_catalogue_area_matches_board() {
        let pieces = standard_pieces();
        assert_eq!(pieces.len(), 9);

        let ids: HashSet<&str> = pieces.iter().map(Piece::id).collect();
        assert_eq!(ids.len(), 9, "piece ids must be unique");

        let area: usize = pieces.iter().map(Piece::cell_count).sum();
        // two target cells stay visible on the 43-cell board
        assert_eq!(area, 41);
    }
}
