//! Arena-indexed dancing links (Algorithm X).
//!
//! Knuth's toroidal doubly linked sparse matrix, stored as a single
//! arena of nodes with `left`/`right`/`up`/`down` links held as indices
//! into it. Index 0 is the root of the column-header list; headers
//! occupy indices `1..=columns`; cell nodes follow in insertion order.
//! Unlinking a node is two index writes and relinking is the exact
//! inverse, which is what lets the backtracking search undo its work in
//! O(1) per link.
//!
//! The structure is mutated in place during search and is not shared:
//! one solve call owns one [`Dlx`] end to end.

use std::sync::atomic::{AtomicBool, Ordering};

/// The search was stopped by the caller's cancellation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("exact-cover search cancelled")]
pub struct Cancelled;

const ROOT: usize = 0;
const NO_ROW: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Arena index of this node's column header; headers point to
    /// themselves.
    column: usize,
    /// Caller's row identifier; `NO_ROW` for the root and headers.
    row: usize,
}

enum Search {
    Found,
    Exhausted,
    Cancelled,
}

/// A sparse exact-cover matrix with dancing-links search.
///
/// Build one with [`new`], append rows with [`add_row`], then call
/// [`solve`] or [`solve_with_cancel`] once. A successful search leaves
/// the links in their covered state; the structure is built fresh for
/// every solve and discarded afterwards.
///
/// [`new`]: Dlx::new
/// [`add_row`]: Dlx::add_row
/// [`solve`]: Dlx::solve
/// [`solve_with_cancel`]: Dlx::solve_with_cancel
///
/// # Examples
///
/// ```
/// use datelace_solver::dlx::Dlx;
///
/// // Knuth's example: the unique exact cover is rows 0, 3, and 4.
/// let mut dlx = Dlx::new(7);
/// dlx.add_row(0, &[2, 4]);
/// dlx.add_row(1, &[0, 3, 6]);
/// dlx.add_row(2, &[1, 2, 5]);
/// dlx.add_row(3, &[0, 3, 5]);
/// dlx.add_row(4, &[1, 6]);
/// dlx.add_row(5, &[3, 4, 6]);
///
/// let mut solution = dlx.solve().expect("cover exists");
/// solution.sort_unstable();
/// assert_eq!(solution, [0, 3, 4]);
/// ```
#[derive(Debug)]
pub struct Dlx {
    nodes: Vec<Node>,
    /// Live row count per column header, indexed by arena position.
    sizes: Vec<usize>,
    columns: usize,
}

impl Dlx {
    /// Creates a matrix with `columns` columns and no rows.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        let mut nodes = Vec::with_capacity(columns + 1);
        nodes.push(Node {
            left: ROOT,
            right: ROOT,
            up: ROOT,
            down: ROOT,
            column: ROOT,
            row: NO_ROW,
        });
        for header in 1..=columns {
            nodes.push(Node {
                left: header - 1,
                right: ROOT,
                up: header,
                down: header,
                column: header,
                row: NO_ROW,
            });
            nodes[header - 1].right = header;
            nodes[ROOT].left = header;
        }
        Self {
            nodes,
            sizes: vec![0; columns + 1],
            columns,
        }
    }

    /// Returns the column count the matrix was created with.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Appends a row covering the given columns.
    ///
    /// `row` is the caller's identifier for the row and is what a
    /// successful search reports back.
    ///
    /// # Panics
    ///
    /// Panics if a column index is out of range or the indices are not
    /// strictly ascending.
    pub fn add_row(&mut self, row: usize, columns: &[usize]) {
        let mut first = None;
        let mut prev = None;
        for &column in columns {
            assert!(column < self.columns, "column {column} out of range");
            assert!(
                prev.is_none_or(|p| p < column),
                "row columns must be strictly ascending"
            );
            prev = Some(column);

            let header = column + 1;
            let node = self.nodes.len();
            let up = self.nodes[header].up;
            self.nodes.push(Node {
                left: node,
                right: node,
                up,
                down: header,
                column: header,
                row,
            });
            self.nodes[up].down = node;
            self.nodes[header].up = node;
            self.sizes[header] += 1;

            match first {
                None => first = Some(node),
                Some(first) => {
                    // splice into the row ring, to the left of the first node
                    let left = self.nodes[first].left;
                    self.nodes[node].left = left;
                    self.nodes[node].right = first;
                    self.nodes[left].right = node;
                    self.nodes[first].left = node;
                }
            }
        }
    }

    /// Runs Algorithm X and returns the row identifiers of the first
    /// exact cover found, in selection order, or `None` if no cover
    /// exists.
    pub fn solve(&mut self) -> Option<Vec<usize>> {
        let never = AtomicBool::new(false);
        match self.solve_with_cancel(&never) {
            Ok(solution) => solution,
            Err(Cancelled) => unreachable!("cancellation flag is never set"),
        }
    }

    /// Like [`solve`](Dlx::solve), but polls `cancel` once per
    /// recursive call and abandons the search when it is set.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the flag was observed set before the
    /// search finished.
    pub fn solve_with_cancel(
        &mut self,
        cancel: &AtomicBool,
    ) -> Result<Option<Vec<usize>>, Cancelled> {
        let mut stack = Vec::new();
        match self.search(&mut stack, cancel) {
            Search::Found => Ok(Some(
                stack.into_iter().map(|node| self.nodes[node].row).collect(),
            )),
            Search::Exhausted => Ok(None),
            Search::Cancelled => Err(Cancelled),
        }
    }

    /// Chooses the uncovered column with the fewest live rows.
    ///
    /// Ties go to the leftmost header. Header order stays equal to
    /// column-index order because `uncover` restores links exactly, so
    /// the choice (and therefore the first solution found) is
    /// deterministic.
    fn smallest_column(&self) -> usize {
        debug_assert_ne!(self.nodes[ROOT].right, ROOT);
        let mut header = self.nodes[ROOT].right;
        let mut best = header;
        while header != ROOT {
            if self.sizes[header] < self.sizes[best] {
                best = header;
            }
            header = self.nodes[header].right;
        }
        best
    }

    fn search(&mut self, stack: &mut Vec<usize>, cancel: &AtomicBool) -> Search {
        if cancel.load(Ordering::Relaxed) {
            return Search::Cancelled;
        }
        if self.nodes[ROOT].right == ROOT {
            return Search::Found;
        }

        let header = self.smallest_column();
        self.cover(header);

        let mut row = self.nodes[header].down;
        while row != header {
            stack.push(row);
            let mut node = self.nodes[row].right;
            while node != row {
                self.cover(self.nodes[node].column);
                node = self.nodes[node].right;
            }

            match self.search(stack, cancel) {
                Search::Exhausted => {}
                outcome => return outcome,
            }

            stack.pop();
            let mut node = self.nodes[row].left;
            while node != row {
                self.uncover(self.nodes[node].column);
                node = self.nodes[node].left;
            }
            row = self.nodes[row].down;
        }

        self.uncover(header);
        Search::Exhausted
    }

    /// Unlinks a column header and every row passing through it.
    fn cover(&mut self, header: usize) {
        let Node { left, right, .. } = self.nodes[header];
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut row = self.nodes[header].down;
        while row != header {
            let mut node = self.nodes[row].right;
            while node != row {
                let Node { up, down, column, .. } = self.nodes[node];
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[column] -= 1;
                node = self.nodes[node].right;
            }
            row = self.nodes[row].down;
        }
    }

    /// Exact inverse of [`cover`](Dlx::cover): bottom-up, right-to-left.
    fn uncover(&mut self, header: usize) {
        let mut row = self.nodes[header].up;
        while row != header {
            let mut node = self.nodes[row].left;
            while node != row {
                let Node { up, down, column, .. } = self.nodes[node];
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                self.sizes[column] += 1;
                node = self.nodes[node].left;
            }
            row = self.nodes[row].up;
        }

        let Node { left, right, .. } = self.nodes[header];
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }
}
