//! Game configuration loaded from TOML and overridden from the command line.

use crate::cli::Cli;
use crate::players::PlayerKind;
use crate::render::RendererKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for one game.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who plays X.
    player_x: PlayerKind,

    /// Who plays O.
    player_o: PlayerKind,

    /// Mark that moves first.
    starting_mark: Mark,

    /// Pause before each computer move, in milliseconds.
    delay_ms: u64,

    /// Seed for the computer players' randomness.
    seed: Option<u64>,

    /// How the board is shown.
    renderer: RendererKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Minimax,
            starting_mark: Mark::Cross,
            delay_ms: 250,
            seed: None,
            renderer: RendererKind::Console,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_x = %config.player_x,
            player_o = %config.player_o,
            starting = %config.starting_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file named by `--config`, if any, then applies the other flags.
    #[instrument(skip_all)]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match cli.config() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_cli(cli))
    }

    /// Replaces every value the command line sets explicitly.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(kind) = cli.player_x() {
            self.player_x = *kind;
        }
        if let Some(kind) = cli.player_o() {
            self.player_o = *kind;
        }
        if let Some(mark) = cli.starting() {
            self.starting_mark = *mark;
        }
        if let Some(delay) = cli.delay_ms() {
            self.delay_ms = *delay;
        }
        if let Some(seed) = cli.seed() {
            self.seed = Some(*seed);
        }
        if let Some(renderer) = cli.renderer() {
            self.renderer = *renderer;
        }
        debug!(config = ?self, "Applied command-line overrides");
        self
    }

    /// Computer thinking time.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Player kind for the given mark.
    pub fn player(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::Cross => self.player_x,
            Mark::Naught => self.player_o,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
