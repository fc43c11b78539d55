//! Tests for loading game configuration from disk.

use clap::Parser;
use noughts::{Cli, GameConfig, PlayerKind, RendererKind};
use noughts_core::Mark;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = config_file(
        r#"
player_x = "minimax"
player_o = "random"
starting_mark = "O"
delay_ms = 0
seed = 1234
renderer = "log"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player(Mark::Cross), PlayerKind::Minimax);
    assert_eq!(config.player(Mark::Naught), PlayerKind::Random);
    assert_eq!(*config.starting_mark(), Mark::Naught);
    assert_eq!(config.delay(), Duration::ZERO);
    assert_eq!(*config.seed(), Some(1234));
    assert_eq!(*config.renderer(), RendererKind::Log);
}

#[test]
fn test_empty_file_is_default() {
    let file = config_file("");
    assert_eq!(GameConfig::from_file(file.path()).unwrap(), GameConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_values_rejected() {
    for content in [
        "player_x = \"robot\"",
        "starting_mark = \"Z\"",
        "renderer = \"html\"",
        "delay_ms = -5",
    ] {
        let file = config_file(content);
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"), "{content}");
    }
}

#[test]
fn test_resolve_applies_flags_over_file() {
    let file = config_file("player_x = \"random\"\nplayer_o = \"random\"\ndelay_ms = 900\n");
    let path = file.path().to_str().unwrap();
    let cli = Cli::parse_from(["noughts", "--config", path, "-O", "minimax", "--delay-ms", "5"]);

    let config = GameConfig::resolve(&cli).unwrap();
    assert_eq!(*config.player_x(), PlayerKind::Random);
    assert_eq!(*config.player_o(), PlayerKind::Minimax);
    assert_eq!(*config.delay_ms(), 5);
}

#[test]
fn test_resolve_without_file() {
    let cli = Cli::parse_from(["noughts", "--seed", "3"]);
    let config = GameConfig::resolve(&cli).unwrap();
    assert_eq!(*config.seed(), Some(3));
    assert_eq!(*config.player_x(), PlayerKind::Human);
}
