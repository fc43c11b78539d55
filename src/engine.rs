//! Game loop between two players.

use crate::players::{PlayError, Player};
use crate::render::Renderer;
use derive_more::{Display, Error};
use noughts_core::{GameState, Mark, MoveError};
use tracing::{debug, info, instrument};

/// Callback receiving illegal moves reported during play.
pub type ErrorHandler = Box<dyn FnMut(&MoveError)>;

/// Failure that ends a game.
#[derive(Debug, Display, Error)]
pub enum EngineError {
    /// Both players were given the same mark.
    #[display("Players must use different marks (both are {})", _0)]
    SameMarks(#[error(not(source))] Mark),

    /// The renderer could not draw the board.
    #[display("Rendering failed: {}", _0)]
    Render(std::io::Error),

    /// A player failed in a way the game cannot recover from.
    #[display("{}", _0)]
    Play(PlayError),
}

/// Runs a game between two players, rendering every state.
pub struct TicTacToe {
    player1: Box<dyn Player>,
    player2: Box<dyn Player>,
    renderer: Box<dyn Renderer>,
    error_handler: Option<ErrorHandler>,
}

impl TicTacToe {
    /// Creates a game engine.
    ///
    /// # Errors
    ///
    /// [`EngineError::SameMarks`] if both players use the same mark.
    #[instrument(skip_all, fields(player1 = player1.name(), player2 = player2.name()))]
    pub fn new(
        player1: Box<dyn Player>,
        player2: Box<dyn Player>,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self, EngineError> {
        if player1.mark() == player2.mark() {
            return Err(EngineError::SameMarks(player1.mark()));
        }
        Ok(Self {
            player1,
            player2,
            renderer,
            error_handler: None,
        })
    }

    /// Installs a handler for illegal moves.
    ///
    /// Without one, illegal moves are only logged.
    pub fn with_error_handler(mut self, handler: impl FnMut(&MoveError) + 'static) -> Self {
        self.error_handler = Some(Box::new(handler));
        self
    }

    /// Plays one game from an empty board and returns the final state.
    ///
    /// Illegal moves go to the error handler and the same player is asked
    /// again from the unchanged state.
    #[instrument(skip(self))]
    pub fn play(&mut self, starting_mark: Mark) -> Result<GameState, EngineError> {
        info!("Starting game");
        let mut state = GameState::start(starting_mark);

        loop {
            self.renderer.render(&state).map_err(EngineError::Render)?;

            if state.game_over() {
                info!(winner = ?state.winner(), tie = state.tie(), "Game over");
                return Ok(state);
            }

            let player = self.current_player(&state);
            debug!(player = player.name(), mark = %state.current_mark(), "Waiting for move");

            match player.make_move(&state) {
                Ok(next) => state = next,
                Err(err) => match err.as_invalid_move() {
                    Some(invalid) => {
                        debug!(error = %invalid, "Invalid move");
                        if let Some(handler) = self.error_handler.as_mut() {
                            handler(invalid);
                        }
                    }
                    None => return Err(EngineError::Play(err)),
                },
            }
        }
    }

    /// Returns the player whose mark is due.
    fn current_player(&mut self, state: &GameState) -> &mut dyn Player {
        if state.current_mark() == self.player1.mark() {
            self.player1.as_mut()
        } else {
            self.player2.as_mut()
        }
    }
}
