//! Immutable game state.
//!
//! A [`GameState`] is a board plus the mark that moved first. Everything
//! else (whose turn it is, the winner, the legal moves) is derived from
//! those two values. States are validated on construction and never
//! mutated; every move produces a new state.

use super::action::Move;
use super::contracts::ValidGameState;
use super::error::{GameError, MoveError, ScoreError, StateError};
use super::rules::{self, Win};
use super::types::{Board, CELL_COUNT, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a finished game from one mark's point of view.
pub type Score = i8;

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState", into = "RawGameState")]
pub struct GameState {
    board: Board,
    starting_mark: Mark,
    /// Winning line, found once at construction.
    win: Option<Win>,
}

/// Unvalidated wire form of a [`GameState`].
#[derive(Serialize, Deserialize)]
struct RawGameState {
    board: Board,
    starting_mark: Mark,
}

impl GameState {
    /// Creates a game state, validating that legal play could reach it.
    #[instrument(skip(board), fields(board = %board, %starting_mark))]
    pub fn new(board: Board, starting_mark: Mark) -> Result<Self, StateError> {
        let win = rules::check_winner(&board);
        ValidGameState::check(&board, starting_mark, win.map(|w| w.mark))?;
        Ok(Self {
            board,
            starting_mark,
            win,
        })
    }

    /// Creates a fresh game on an empty board.
    pub fn start(starting_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            starting_mark,
            win: None,
        }
    }

    /// Assembles a state whose validity the caller guarantees.
    fn assemble(board: Board, starting_mark: Mark) -> Self {
        let win = rules::check_winner(&board);
        debug_assert!(
            ValidGameState::check(&board, starting_mark, win.map(|w| w.mark)).is_ok(),
            "Move produced an invalid state: {}",
            board
        );
        Self {
            board,
            starting_mark,
            win,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moved first.
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Returns the mark due to move next.
    pub fn current_mark(&self) -> Mark {
        if self.board.x_count() == self.board.o_count() {
            self.starting_mark
        } else {
            self.starting_mark.other()
        }
    }

    /// True while the board is still empty.
    pub fn game_not_started(&self) -> bool {
        self.board.empty_count() == CELL_COUNT
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.win.map(|w| w.mark)
    }

    /// Board indices of the winning line, empty if there is no winner.
    pub fn winning_cells(&self) -> Vec<usize> {
        self.win.map(|w| w.cells().to_vec()).unwrap_or_default()
    }

    /// True if the board is full and nobody won.
    pub fn tie(&self) -> bool {
        self.win.is_none() && rules::is_full(&self.board)
    }

    /// True if there is a winner or a tie.
    pub fn game_over(&self) -> bool {
        self.win.is_some() || self.tie()
    }

    /// All legal moves, in ascending cell order. Empty once the game is over.
    pub fn possible_moves(&self) -> Vec<Move> {
        if self.game_over() {
            return Vec::new();
        }
        self.board
            .empty_indices()
            .map(|index| self.advance(index))
            .collect()
    }

    /// Picks one of the legal moves uniformly at random.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        let chosen = self.possible_moves().choose(rng).cloned();
        debug!(choice = ?chosen.as_ref().map(Move::cell_index), "Random move");
        chosen
    }

    /// Builds the move placing the current mark at `index`.
    ///
    /// The move is built even when the game is already over; callers that
    /// don't want that must check [`game_over`](Self::game_over) first.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`] for an
    /// unusable target, and [`StateError`] if the resulting board is not a
    /// reachable state (only possible after the game has ended).
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn make_move_to(&self, index: usize) -> Result<Move, GameError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index).into());
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index).into());
        }
        let mark = self.current_mark();
        let after = Self::new(self.board.with_mark(index, mark), self.starting_mark)?;
        Ok(Move::new(mark, index, self.clone(), after))
    }

    /// Scores a finished game for `mark`: 1 for a win, 0 for a tie, -1 for a loss.
    ///
    /// # Errors
    ///
    /// [`ScoreError`] if the game is not over.
    pub fn evaluate_score(&self, mark: Mark) -> Result<Score, ScoreError> {
        if !self.game_over() {
            return Err(ScoreError);
        }
        Ok(match self.winner() {
            None => 0,
            Some(winner) if winner == mark => 1,
            Some(_) => -1,
        })
    }

    fn advance(&self, index: usize) -> Move {
        let mark = self.current_mark();
        let after = Self::assemble(self.board.with_mark(index, mark), self.starting_mark);
        Move::new(mark, index, self.clone(), after)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::start(Mark::Cross)
    }
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        Self::new(raw.board, raw.starting_mark)
    }
}

impl From<GameState> for RawGameState {
    fn from(state: GameState) -> Self {
        Self {
            board: state.board,
            starting_mark: state.starting_mark,
        }
    }
}
