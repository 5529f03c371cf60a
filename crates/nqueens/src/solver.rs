//! Exhaustive depth-first enumeration of N-Queens placements.
//!
//! The search keeps an explicit stack of frames rather than recursing. Each
//! frame owns its own board and exclusion state, so popping a frame is the
//! only backtracking step and no placement ever needs to be undone.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::board::Board;
use crate::error::SolveError;
use crate::state::{SearchState, Vacancies};

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Stop the search once this much time has passed
    pub timeout: Option<Duration>,
}

/// Result of the solver search
#[derive(Debug, Clone)]
pub struct Solutions {
    /// Number of loop iterations performed
    pub visited: usize,
    /// Completed boards in discovery order
    pub solutions: Vec<Board>,
    /// Whether the search space was fully exhausted
    pub search_exhausted: bool,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl Solutions {
    pub fn count(&self) -> usize {
        self.solutions.len()
    }
}

/// A frame in the search: one partial placement and its untried cells
#[derive(Debug, Clone)]
struct SearchFrame {
    board: Board,
    state: SearchState,
    /// Computed on first visit
    vacant: Option<Vacancies>,
}

impl SearchFrame {
    fn new(board: Board, state: SearchState) -> Self {
        Self {
            board,
            state,
            vacant: None,
        }
    }
}

/// Enumerate every placement of `size` non-attacking queens.
pub fn find_solutions(size: usize) -> Result<Solutions, SolveError> {
    find_solutions_with(size, &SolverConfig::default())
}

/// Enumerate placements, honouring the limits in `config`.
///
/// Candidates are taken from the end of each frame's vacancy list, so
/// columns are tried right to left.
pub fn find_solutions_with(size: usize, config: &SolverConfig) -> Result<Solutions, SolveError> {
    let start_time = Instant::now();
    // A timeout too large to represent as an instant means no deadline
    let deadline = config.timeout.and_then(|t| start_time.checked_add(t));

    let board = Board::new(size)?;
    let state = SearchState::new(size)?;
    let last_row = size - 1;

    let mut stack: Vec<SearchFrame> = vec![SearchFrame::new(board, state)];
    let mut solutions = Vec::new();
    let mut visited: usize = 0;
    let mut search_exhausted = true;

    while let Some(frame) = stack.last_mut() {
        visited += 1;

        if deadline.is_some_and(|d| Instant::now() >= d) {
            warn!(
                "Search for n={} stopped by timeout after {} states",
                size, visited
            );
            search_exhausted = false;
            break;
        }

        let SearchFrame {
            board,
            state,
            vacant,
        } = frame;
        let vacant = vacant.get_or_insert_with(|| state.vacant_cells(board));

        // Dead end: nothing left to try at this depth
        let Some(cell) = vacant.pop() else {
            stack.pop();
            continue;
        };

        let mut next_board = board.clone();
        let mut next_state = next_board.place_queen(cell, state);

        if next_state.row() == last_row {
            debug!("Solution #{} for n={}", solutions.len() + 1, size);
            solutions.push(next_board);
            // The last row has at most one vacant cell, nothing is abandoned
            stack.pop();
            continue;
        }

        next_state.advance_row();
        stack.push(SearchFrame::new(next_board, next_state));
    }

    let time_elapsed_ms = start_time.elapsed().as_millis() as u64;
    info!(
        "n={}: {} states visited, {} solutions in {}ms",
        size,
        visited,
        solutions.len(),
        time_elapsed_ms
    );

    Ok(Solutions {
        visited,
        solutions,
        search_exhausted,
        time_elapsed_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::board::QUEEN;
    use crate::error::BoardError;
    use crate::verify::verify_solution;

    fn board_from_rows(rows: &[[u8; 4]; 4]) -> Board {
        let mut board = Board::new(4).unwrap();
        let state = SearchState::new(4).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == QUEEN {
                    let index = board.to_linear(x, y);
                    let _ = board.place_queen(index, &state);
                }
            }
        }
        board
    }

    #[test]
    fn test_known_solution_counts() {
        let expected = [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
        for (size, count) in expected {
            let result = find_solutions(size).unwrap();
            assert_eq!(result.count(), count, "n={}", size);
            assert!(result.search_exhausted);
        }
    }

    #[test]
    fn test_every_solution_is_valid() {
        for size in 1..=8 {
            let result = find_solutions(size).unwrap();
            for board in &result.solutions {
                assert_eq!(board.size(), size);
                assert_eq!(board.queen_count(), size);
                assert_eq!(verify_solution(board), Ok(()));
            }
        }
    }

    #[test]
    fn test_no_duplicate_solutions() {
        let result = find_solutions(8).unwrap();
        let unique: HashSet<&Board> = result.solutions.iter().collect();
        assert_eq!(unique.len(), result.solutions.len());
    }

    #[test]
    fn test_visited_is_deterministic_and_bounded() {
        for size in 1..=7 {
            let first = find_solutions(size).unwrap();
            let second = find_solutions(size).unwrap();
            assert_eq!(first.visited, second.visited);
            assert!(first.visited >= first.count());
        }
    }

    #[test]
    fn test_exact_visited_counts() {
        let expected = [(1, 1), (2, 5), (3, 11), (4, 29), (8, 3929)];
        for (size, visited) in expected {
            assert_eq!(find_solutions(size).unwrap().visited, visited, "n={}", size);
        }
    }

    #[test]
    fn test_single_cell_board() {
        let result = find_solutions(1).unwrap();
        assert_eq!(result.visited, 1);
        assert_eq!(result.count(), 1);
        assert_eq!(result.solutions[0].cells(), &[QUEEN]);
    }

    #[test]
    fn test_four_queens_exact_boards() {
        let result = find_solutions(4).unwrap();
        let first = board_from_rows(&[[0, 1, 0, 0], [0, 0, 0, 1], [1, 0, 0, 0], [0, 0, 1, 0]]);
        let mirror = board_from_rows(&[[0, 0, 1, 0], [1, 0, 0, 0], [0, 0, 0, 1], [0, 1, 0, 0]]);

        assert_eq!(result.count(), 2);
        // Right-to-left candidate order finds the mirror first
        assert_eq!(result.solutions[0], mirror);
        assert_eq!(result.solutions[1], first);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = find_solutions(0).unwrap_err();
        assert_eq!(
            err,
            SolveError::Board {
                source: BoardError::InvalidSize { size: 0 }
            }
        );
    }

    #[test]
    fn test_expired_timeout_stops_search() {
        let config = SolverConfig {
            timeout: Some(Duration::ZERO),
        };
        let result = find_solutions_with(8, &config).unwrap();

        assert!(!result.search_exhausted);
        assert_eq!(result.visited, 1);
        assert!(result.solutions.is_empty());
    }

    #[test]
    fn test_unrepresentable_timeout_means_no_deadline() {
        let config = SolverConfig {
            timeout: Some(Duration::from_secs(u64::MAX)),
        };
        let result = find_solutions_with(4, &config).unwrap();

        assert!(result.search_exhausted);
        assert_eq!(result.count(), 2);
        assert_eq!(result.visited, 29);
    }

    #[test]
    fn test_generous_timeout_completes() {
        let config = SolverConfig {
            timeout: Some(Duration::from_secs(60)),
        };
        let result = find_solutions_with(6, &config).unwrap();

        assert!(result.search_exhausted);
        assert_eq!(result.count(), 4);
        assert_eq!(result.visited, find_solutions(6).unwrap().visited);
    }
}
