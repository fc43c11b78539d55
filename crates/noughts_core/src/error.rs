//! Error types for tic-tac-toe game logic.
//!
//! Each construction or transition has its own error type so callers can
//! match on exactly the failures they expect. [`GameError`] unifies them for
//! operations that can fail in more than one way.

use super::types::Mark;
use derive_more::{Display, Error, From};

/// A board was assembled from malformed cells.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// The board did not contain exactly nine cells.
    #[display("Must contain 9 cells of: X, O, or space (got {} cells)", _0)]
    WrongCellCount(usize),

    /// A cell symbol was not `X`, `O` or a space.
    #[display("Must contain 9 cells of: X, O, or space (found {:?})", _0)]
    InvalidSymbol(char),
}

impl std::error::Error for BoardError {}

/// A board and starting mark that no legal sequence of moves can produce.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StateError {
    /// The mark counts differ by more than one.
    #[display("Wrong number of Xs and Os ({} X, {} O)", x_count, o_count)]
    WrongNumberOfMarks {
        /// Number of X cells.
        x_count: usize,
        /// Number of O cells.
        o_count: usize,
    },

    /// The mark with more cells on the board did not start the game.
    #[display("Wrong starting mark {}", _0)]
    WrongStartingMark(Mark),

    /// The winner's mark count does not match a just-completed winning move.
    #[display("Wrong number of {}s for the winner", _0)]
    WinnerCountMismatch(Mark),
}

impl std::error::Error for StateError {}

/// An illegal move request.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is not empty", _0)]
    CellOccupied(usize),

    /// The target index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// A player tried to move when the other mark is due.
    #[display("It's the other player's turn ({} tried to move)", _0)]
    NotYourTurn(Mark),

    /// The player produced no move.
    #[display("No more possible moves")]
    NoMovesLeft,
}

impl std::error::Error for MoveError {}

/// A score was requested for a game that has not finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Game is not over yet")]
pub struct ScoreError;

impl std::error::Error for ScoreError {}

/// Any failure raised by the game model.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// Malformed board.
    #[display("{}", _0)]
    Board(BoardError),
    /// Impossible game state.
    #[display("{}", _0)]
    State(StateError),
    /// Illegal move.
    #[display("{}", _0)]
    Move(MoveError),
    /// Score of an unfinished game.
    #[display("{}", _0)]
    Score(ScoreError),
}
