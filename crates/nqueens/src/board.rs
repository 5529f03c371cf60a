//! Board representation and coordinate arithmetic.
//!
//! A board is a row-major grid of occupancy flags. Linear index `i` maps to
//! column `i % size` and row `i / size`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::state::SearchState;

/// Occupancy flag for an empty cell
pub const EMPTY: u8 = 0;
/// Occupancy flag for a cell holding a queen
pub const QUEEN: u8 = 1;

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Check a requested board size and convert it to a usable dimension.
///
/// Sizes below one are rejected, as are sizes whose cell count overflows.
pub fn validate_size(size: i64) -> Result<usize, BoardError> {
    if size < 1 {
        return Err(BoardError::InvalidSize { size });
    }
    let size = usize::try_from(size).map_err(|_| BoardError::InvalidSize { size })?;
    if size.checked_mul(size).is_none() {
        return Err(BoardError::TooLarge { size });
    }
    Ok(size)
}

/// A square grid of occupancy flags for one placement attempt
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

/// Unchecked board as read from JSON
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<u8>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::new(raw.size)?;
        if raw.cells.len() != board.len() {
            return Err(BoardError::CellCount {
                expected: board.len(),
                found: raw.cells.len(),
            });
        }
        if let Some(index) = raw.cells.iter().position(|&c| c != EMPTY && c != QUEEN) {
            return Err(BoardError::InvalidCell {
                index,
                value: raw.cells[index],
            });
        }
        board.cells = raw.cells;
        Ok(board)
    }
}

impl Board {
    /// Create an empty board of `size` x `size` cells
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { size: 0 });
        }
        let len = size
            .checked_mul(size)
            .ok_or(BoardError::TooLarge { size })?;
        Ok(Self {
            size,
            cells: vec![EMPTY; len],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Occupancy at a linear index
    pub fn cell_at(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Occupancy at column `x`, row `y`
    pub fn value_at(&self, x: usize, y: usize) -> u8 {
        self.cells[self.to_linear(x, y)]
    }

    pub fn to_coordinates(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    pub fn to_linear(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Count occupied cells
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == QUEEN).count()
    }

    /// Positions of all queens in row-major order
    pub fn queens(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == QUEEN)
            .map(|(i, _)| {
                let (x, y) = self.to_coordinates(i);
                Position::new(x, y)
            })
            .collect()
    }

    /// Place a queen at `index` on this board and derive the exclusions it
    /// imposes on later rows.
    ///
    /// The board is modified in place; clone it first if the parent must be
    /// kept. The returned state is a fresh copy of `state` and the input is
    /// left untouched.
    pub fn place_queen(&mut self, index: usize, state: &SearchState) -> SearchState {
        self.cells[index] = QUEEN;

        let mut next = state.clone();
        next.record_queen();

        let (x, y) = self.to_coordinates(index);
        next.exclude_column(x);

        for k in 1..self.size {
            let row = y + k;
            if row >= self.size {
                break;
            }
            if x + k < self.size {
                next.exclude_cell(self.to_linear(x + k, row));
            }
            if let Some(left) = x.checked_sub(k) {
                next.exclude_cell(self.to_linear(left, row));
            }
        }

        next
    }

    /// Textual grid dump, one row per line
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let sep = if (i + 1) % self.size == 0 { '\n' } else { ' ' };
            write!(f, "{}{}", cell, sep)?;
        }
        Ok(())
    }
}
