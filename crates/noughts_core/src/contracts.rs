//! Consistency checks for game states.
//!
//! A [`GameState`](super::GameState) is only constructed from a board that a
//! legal sequence of alternating moves could have produced. Each check below
//! covers one part of that; [`ValidGameState`] composes them.

use super::error::StateError;
use super::{Board, Mark};
use tracing::{instrument, warn};

/// Invariant: X and O counts differ by at most one.
pub struct MarkCountsBalanced;

impl MarkCountsBalanced {
    /// Checks the board's mark counts.
    pub fn check(board: &Board) -> Result<(), StateError> {
        if board.x_count().abs_diff(board.o_count()) > 1 {
            warn!(
                x_count = board.x_count(),
                o_count = board.o_count(),
                "Mark counts unbalanced"
            );
            return Err(StateError::WrongNumberOfMarks {
                x_count: board.x_count(),
                o_count: board.o_count(),
            });
        }
        Ok(())
    }
}

/// Invariant: the mark with more cells is the one that moved first.
pub struct StartingMarkConsistent;

impl StartingMarkConsistent {
    /// Checks the starting mark against the board's mark counts.
    pub fn check(board: &Board, starting_mark: Mark) -> Result<(), StateError> {
        let leader = if board.x_count() > board.o_count() {
            Some(Mark::Cross)
        } else if board.o_count() > board.x_count() {
            Some(Mark::Naught)
        } else {
            None
        };

        match leader {
            Some(leader) if leader != starting_mark => {
                warn!(%leader, %starting_mark, "Starting mark inconsistent with board");
                Err(StateError::WrongStartingMark(starting_mark))
            }
            _ => Ok(()),
        }
    }
}

/// Invariant: the winner has just completed its winning move.
///
/// A winner that moved first must have one more mark than its opponent.
/// A winner that moved second must have exactly as many.
pub struct WinnerConsistent;

impl WinnerConsistent {
    /// Checks the winner's mark count.
    pub fn check(board: &Board, starting_mark: Mark, winner: Option<Mark>) -> Result<(), StateError> {
        let Some(winner) = winner else {
            return Ok(());
        };

        let own = board.count(winner);
        let opponent = board.count(winner.other());
        let consistent = if winner == starting_mark {
            own > opponent
        } else {
            own == opponent
        };

        if consistent {
            Ok(())
        } else {
            warn!(%winner, own, opponent, "Winner count inconsistent with board");
            Err(StateError::WinnerCountMismatch(winner))
        }
    }
}

/// Composite invariant: all game state checks, in order.
pub struct ValidGameState;

impl ValidGameState {
    /// Validates a board, starting mark and detected winner.
    #[instrument(skip(board), fields(board = %board))]
    pub fn check(board: &Board, starting_mark: Mark, winner: Option<Mark>) -> Result<(), StateError> {
        MarkCountsBalanced::check(board)?;
        StartingMarkConsistent::check(board, starting_mark)?;
        WinnerConsistent::check(board, starting_mark, winner)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_balanced_counts() {
        assert!(MarkCountsBalanced::check(&board("XO       ")).is_ok());
        assert!(MarkCountsBalanced::check(&board("XOX      ")).is_ok());
        assert_eq!(
            MarkCountsBalanced::check(&board("XX       ")),
            Err(StateError::WrongNumberOfMarks { x_count: 2, o_count: 0 })
        );
    }

    #[test]
    fn test_starting_mark() {
        let ahead_x = board("X        ");
        assert!(StartingMarkConsistent::check(&ahead_x, Mark::Cross).is_ok());
        assert_eq!(
            StartingMarkConsistent::check(&ahead_x, Mark::Naught),
            Err(StateError::WrongStartingMark(Mark::Naught))
        );

        let ahead_o = board("O        ");
        assert!(StartingMarkConsistent::check(&ahead_o, Mark::Naught).is_ok());
        assert!(StartingMarkConsistent::check(&ahead_o, Mark::Cross).is_err());

        // Equal counts say nothing about who started.
        let even = board("XO       ");
        assert!(StartingMarkConsistent::check(&even, Mark::Cross).is_ok());
        assert!(StartingMarkConsistent::check(&even, Mark::Naught).is_ok());
    }

    #[test]
    fn test_starting_winner_needs_extra_mark() {
        let won = board("XXXOO    ");
        assert!(WinnerConsistent::check(&won, Mark::Cross, Some(Mark::Cross)).is_ok());

        let too_few = board("XXXOOO   ");
        assert_eq!(
            WinnerConsistent::check(&too_few, Mark::Cross, Some(Mark::Cross)),
            Err(StateError::WinnerCountMismatch(Mark::Cross))
        );
    }

    #[test]
    fn test_second_winner_needs_equal_counts() {
        let won = board("OOOXX X  ");
        assert!(WinnerConsistent::check(&won, Mark::Cross, Some(Mark::Naught)).is_ok());

        let ahead = board("OOOXX    ");
        assert_eq!(
            WinnerConsistent::check(&ahead, Mark::Cross, Some(Mark::Naught)),
            Err(StateError::WinnerCountMismatch(Mark::Naught))
        );
    }

    #[test]
    fn test_composite_reports_first_failure() {
        // Unbalanced and inconsistent start: the count check fires first.
        let result = ValidGameState::check(&board("XXX      "), Mark::Naught, Some(Mark::Cross));
        assert!(matches!(result, Err(StateError::WrongNumberOfMarks { .. })));
    }
}
