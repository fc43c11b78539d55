//! Player trait and implementations.

mod computer;
mod console;

pub use computer::{MinimaxPlayer, RandomPlayer, seeded_rng};
pub use console::ConsolePlayer;

use derive_more::{Display, Error};
use noughts_core::{GameError, GameState, Mark, Move, MoveError, ScoreError};
use serde::{Deserialize, Serialize};

/// Failure while a player chooses or makes a move.
#[derive(Debug, Display, Error)]
pub enum PlayError {
    /// The game model rejected the move.
    #[display("{}", _0)]
    Game(GameError),

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The console input ended before a move was entered.
    #[display("Input closed before a move was entered")]
    InputClosed,
}

impl PlayError {
    /// Returns the move error if this is an illegal move.
    ///
    /// Illegal moves are recoverable: the game loop reports them and
    /// asks again. Everything else ends the game.
    pub fn as_invalid_move(&self) -> Option<&MoveError> {
        match self {
            PlayError::Game(GameError::Move(err)) => Some(err),
            _ => None,
        }
    }
}

impl From<GameError> for PlayError {
    fn from(err: GameError) -> Self {
        PlayError::Game(err)
    }
}

impl From<MoveError> for PlayError {
    fn from(err: MoveError) -> Self {
        PlayError::Game(err.into())
    }
}

impl From<ScoreError> for PlayError {
    fn from(err: ScoreError) -> Self {
        PlayError::Game(err.into())
    }
}

impl From<std::io::Error> for PlayError {
    fn from(err: std::io::Error) -> Self {
        PlayError::Io(err)
    }
}

/// Trait for players that can make moves.
pub trait Player {
    /// The mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Chooses a move for the given state, or `None` if there is none.
    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>, PlayError>;

    /// Plays this player's turn and returns the resulting state.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotYourTurn`] if `state` is waiting for the other mark,
    /// [`MoveError::NoMovesLeft`] if [`get_move`](Self::get_move) found
    /// nothing, or whatever `get_move` itself failed with.
    fn make_move(&mut self, state: &GameState) -> Result<GameState, PlayError> {
        if self.mark() != state.current_mark() {
            return Err(MoveError::NotYourTurn(self.mark()).into());
        }
        match self.get_move(state)? {
            Some(mv) => Ok(mv.into_after_state()),
            None => Err(MoveError::NoMovesLeft.into()),
        }
    }
}

/// Kinds of player selectable per mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Perfect play by exhaustive search.
    Minimax,
}
