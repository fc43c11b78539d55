//! Draw detection logic for tic-tac-toe.

use super::super::Board;

/// Checks if the board is full (no empty cells).
///
/// A full board with no winner indicates a tie.
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}
