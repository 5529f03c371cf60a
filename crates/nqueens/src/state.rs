//! Per-branch exclusion tracking.
//!
//! A [`SearchState`] records which columns and which cells can no longer hold
//! a queen given the queens already placed above the current row. Only rows
//! still to be filled are tracked, since the search never revisits a row.

use smallvec::SmallVec;

use crate::board::Board;
use crate::error::BoardError;

/// Candidate cells for one row, kept inline for boards up to 16 wide
pub type Vacancies = SmallVec<[usize; 16]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    excluded_columns: Vec<bool>,
    excluded_cells: Vec<bool>,
    row: usize,
    queen_count: usize,
}

impl SearchState {
    /// Fresh state for a `size` x `size` board: row 0, nothing excluded
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let cells = size
            .checked_mul(size)
            .ok_or(BoardError::TooLarge { size })?;
        Ok(Self {
            excluded_columns: vec![false; size],
            excluded_cells: vec![false; cells],
            row: 0,
            queen_count: 0,
        })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn queen_count(&self) -> usize {
        self.queen_count
    }

    pub fn is_column_excluded(&self, x: usize) -> bool {
        self.excluded_columns[x]
    }

    pub fn is_cell_excluded(&self, index: usize) -> bool {
        self.excluded_cells[index]
    }

    /// Move on to the next row after a queen has been placed
    pub fn advance_row(&mut self) {
        self.row += 1;
    }

    pub(crate) fn record_queen(&mut self) {
        self.queen_count += 1;
    }

    pub(crate) fn exclude_column(&mut self, x: usize) {
        self.excluded_columns[x] = true;
    }

    pub(crate) fn exclude_cell(&mut self, index: usize) {
        self.excluded_cells[index] = true;
    }

    /// Linear indices of the cells in the current row that can still take a
    /// queen, in ascending column order.
    pub fn vacant_cells(&self, board: &Board) -> Vacancies {
        let mut vacant = Vacancies::new();
        for x in 0..board.size() {
            if self.excluded_columns[x] {
                continue;
            }
            let cell = board.to_linear(x, self.row);
            if self.excluded_cells[cell] {
                continue;
            }
            vacant.push(cell);
        }
        vacant
    }
}
