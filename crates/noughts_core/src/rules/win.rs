//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use strum::IntoEnumIterator;

/// The eight winning lines, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Win {
    /// The mark that owns the line.
    pub mark: Mark,
    /// The three positions of the line.
    pub line: [Position; 3],
}

impl Win {
    /// Board indices of the winning line.
    pub fn cells(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are tried in [`LINES`] order and, within a line, `X` before `O`.
/// The first match wins; a board reachable by legal play has at most one
/// winning mark anyway.
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        for mark in Mark::iter() {
            let owned = Cell::Occupied(mark);
            if line.iter().all(|pos| board.get(pos.to_index()) == Some(owned)) {
                return Some(Win { mark, line });
            }
        }
    }

    None
}
