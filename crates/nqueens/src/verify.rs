//! Independent check of a completed placement.
//!
//! This does not rely on any search state: it reads the queens straight off
//! the board and tests every pair.

use thiserror::Error;

use crate::board::{Board, Position};

/// Reason a board is not a valid solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("expected {expected} queens, found {found}")]
    WrongQueenCount { expected: usize, found: usize },

    #[error("queens at {a:?} and {b:?} share a row")]
    SharedRow { a: Position, b: Position },

    #[error("queens at {a:?} and {b:?} share a column")]
    SharedColumn { a: Position, b: Position },

    #[error("queens at {a:?} and {b:?} share a diagonal")]
    SharedDiagonal { a: Position, b: Position },
}

/// Check that `board` holds exactly one non-attacking queen per row.
///
/// Returns the first conflict found, scanning pairs in row-major order.
pub fn verify_solution(board: &Board) -> Result<(), Conflict> {
    let queens = board.queens();
    if queens.len() != board.size() {
        return Err(Conflict::WrongQueenCount {
            expected: board.size(),
            found: queens.len(),
        });
    }

    for (i, &a) in queens.iter().enumerate() {
        for &b in &queens[i + 1..] {
            if a.y == b.y {
                return Err(Conflict::SharedRow { a, b });
            }
            if a.x == b.x {
                return Err(Conflict::SharedColumn { a, b });
            }
            if a.x.abs_diff(b.x) == a.y.abs_diff(b.y) {
                return Err(Conflict::SharedDiagonal { a, b });
            }
        }
    }

    Ok(())
}

pub fn is_valid_solution(board: &Board) -> bool {
    verify_solution(board).is_ok()
}
