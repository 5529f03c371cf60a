//! Error types for board construction and search.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid board size {size}: a board needs at least one row")]
    InvalidSize { size: i64 },

    #[error("Board size {size} is too large: {size}x{size} cells do not fit in memory")]
    TooLarge { size: usize },

    #[error("Board has the wrong shape: expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("Invalid occupancy flag: cell {index} holds {value}, expected 0 or 1")]
    InvalidCell { index: usize, value: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("Cannot start search: {source}")]
    Board {
        #[from]
        source: BoardError,
    },
}
