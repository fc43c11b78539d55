//! Noughts - tic-tac-toe in the terminal
//!
//! Game rules, board validation and the minimax search live in
//! [`noughts_core`]. This crate adds the pieces needed to actually play:
//!
//! - **Players**: console input, random moves, perfect play
//! - **Renderers**: a redrawn terminal board, or log events for headless runs
//! - **Engine**: the turn loop connecting players and a renderer
//! - **Config**: TOML settings overridden by command-line flags
//!
//! # Example
//!
//! ```no_run
//! use noughts::{LogRenderer, MinimaxPlayer, RandomPlayer, TicTacToe, seeded_rng};
//! use noughts_core::Mark;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), noughts::EngineError> {
//! let mut game = TicTacToe::new(
//!     Box::new(RandomPlayer::new(Mark::Cross, Duration::ZERO, seeded_rng(Some(7)))),
//!     Box::new(MinimaxPlayer::new(Mark::Naught, Duration::ZERO, seeded_rng(Some(7)))),
//!     Box::new(LogRenderer::new()),
//! )?;
//! let end = game.play(Mark::Cross)?;
//! assert_ne!(end.winner(), Some(Mark::Cross));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod coordinates;
mod engine;
mod players;
mod render;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use coordinates::{CoordinateError, parse_coordinates};
pub use engine::{EngineError, ErrorHandler, TicTacToe};
pub use players::{
    ConsolePlayer, MinimaxPlayer, PlayError, Player, PlayerKind, RandomPlayer, seeded_rng,
};
pub use render::{ConsoleRenderer, LogRenderer, Renderer, RendererKind};
