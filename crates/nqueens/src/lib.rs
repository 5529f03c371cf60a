//! N-Queens enumeration library.
//!
//! This crate provides an exhaustive, explicit-stack backtracking search
//! that finds every way to place N non-attacking queens on an N×N board,
//! along with the board and exclusion-state types it is built from.

pub mod board;
pub mod error;
pub mod solver;
pub mod state;
pub mod verify;

// Re-export main types
pub use board::{validate_size, Board, Position};
pub use error::{BoardError, SolveError};
pub use solver::{find_solutions, find_solutions_with, Solutions, SolverConfig};
pub use state::{SearchState, Vacancies};
pub use verify::{is_valid_solution, verify_solution, Conflict};
