//! Renderer trait and implementations.

mod console;
mod log;

pub use console::ConsoleRenderer;
pub use log::LogRenderer;

use noughts_core::GameState;
use serde::{Deserialize, Serialize};

/// Trait for anything that can show a game state.
pub trait Renderer {
    /// Shows the given state.
    fn render(&mut self, state: &GameState) -> std::io::Result<()>;
}

/// Kinds of renderer selectable from the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum RendererKind {
    /// Redraws the board on the terminal.
    #[default]
    Console,
    /// Emits the board as log events.
    Log,
}
