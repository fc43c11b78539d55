//! Noughts - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{
    Cli, ConsolePlayer, ConsoleRenderer, GameConfig, LogRenderer, MinimaxPlayer, Player,
    PlayerKind, RandomPlayer, Renderer, RendererKind, TicTacToe, seeded_rng,
};
use noughts_core::Mark;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.log_file().as_deref())?;

    let config = GameConfig::resolve(&cli).context("Failed to load configuration")?;
    info!(?config, "Starting noughts");

    let first_mark = *config.starting_mark();
    let player1 = build_player(&config, first_mark);
    let player2 = build_player(&config, first_mark.other());

    let renderer: Box<dyn Renderer> = match config.renderer() {
        RendererKind::Console => Box::new(ConsoleRenderer::stdout()),
        RendererKind::Log => Box::new(LogRenderer::new()),
    };

    let mut game = TicTacToe::new(player1, player2, renderer)
        .context("Failed to set up game")?
        .with_error_handler(|err| eprintln!("{err}"));

    let end = game.play(first_mark).context("Game aborted")?;
    info!(winner = ?end.winner(), tie = end.tie(), "Finished");
    Ok(())
}

/// Installs the global subscriber, writing to `log_file` when given.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Creates the configured player for `mark`.
///
/// With a seed, each mark gets its own stream so two computer players
/// don't mirror each other.
#[instrument(skip(config))]
fn build_player(config: &GameConfig, mark: Mark) -> Box<dyn Player> {
    let seed = config.seed().map(|seed| match mark {
        Mark::Cross => seed,
        Mark::Naught => seed.wrapping_add(1),
    });
    let delay = config.delay();

    match config.player(mark) {
        PlayerKind::Human => Box::new(ConsolePlayer::stdio(mark)),
        PlayerKind::Random => Box::new(RandomPlayer::new(mark, delay, seeded_rng(seed))),
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(mark, delay, seeded_rng(seed))),
    }
}
