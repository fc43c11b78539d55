//! Command-line interface for noughts.

use crate::players::PlayerKind;
use crate::render::RendererKind;
use clap::Parser;
use derive_getters::Getters;
use noughts_core::Mark;
use std::path::PathBuf;

/// Play tic-tac-toe against a person or the computer.
///
/// Flags override values from the configuration file.
#[derive(Parser, Debug, Clone, Getters)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays X [default: human]
    #[arg(short = 'X', value_enum)]
    player_x: Option<PlayerKind>,

    /// Who plays O [default: minimax]
    #[arg(short = 'O', value_enum)]
    player_o: Option<PlayerKind>,

    /// Mark that moves first, X or O [default: X]
    #[arg(short, long)]
    starting: Option<Mark>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pause before each computer move, in milliseconds [default: 250]
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for reproducible computer play
    #[arg(long)]
    seed: Option<u64>,

    /// How the board is shown [default: console]
    #[arg(long, value_enum)]
    renderer: Option<RendererKind>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}
