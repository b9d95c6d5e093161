use std::fs;

use neon_shooter::config::*;
use neon_shooter::error::ConfigError;

#[test]
fn defaults_match_the_stock_game() {
    let c = GameConfig::default();
    assert_eq!(c.viewport, Viewport { width: 800.0, height: 600.0 });
    assert_eq!(c.player.move_speed, 5.0);
    assert_eq!(c.player.shoot_rate_ms, 150.0);
    assert_eq!(c.player.margin, 30.0);
    assert_eq!(c.spawn.base_interval_ms, 2000.0);
    assert!(c.enemy_fire);
    assert!(c.validate().is_ok());
}

#[test]
fn shipped_sample_equals_defaults() {
    let sample: GameConfig = toml::from_str(include_str!("../neon_shooter.toml")).unwrap();
    assert_eq!(sample, GameConfig::default());
}

#[test]
fn empty_file_yields_defaults() {
    let c: GameConfig = toml::from_str("").unwrap();
    assert_eq!(c, GameConfig::default());
}

#[test]
fn load_merges_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    fs::write(&path, "enemy_fire = false\n[viewport]\nwidth = 1024.0\n").unwrap();

    let c = GameConfig::load(&path).unwrap();
    assert_eq!(c.viewport.width, 1024.0);
    assert_eq!(c.viewport.height, 600.0);
    assert!(!c.enemy_fire);
    assert_eq!(c.player, PlayerConfig::default());
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
}

#[test]
fn load_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[viewport\nwidth = ").unwrap();
    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn load_rejects_out_of_range_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zero.toml");
    fs::write(&path, "[player]\nshoot_rate_ms = 0.0\n").unwrap();
    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    assert!(err.to_string().contains("shoot_rate_ms"));
}

#[test]
fn validate_rejects_bad_viewports() {
    let mut c = GameConfig::default();
    c.viewport.width = 0.0;
    assert!(c.validate().is_err());

    let mut c = GameConfig::default();
    c.viewport.height = 50.0; // smaller than two margins
    assert!(c.validate().is_err());

    let mut c = GameConfig::default();
    c.spawn.base_interval_ms = -1.0;
    assert!(c.validate().is_err());
}
