//! Tunable game parameters, loaded once at startup from TOML.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides and an empty file yields the stock game.

use std::path::Path;

use serde::Deserialize;

use crate::entities::MS_PER_FRAME;
use crate::error::ConfigError;

/// Size of the play field in world units.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// World units moved per tick while a direction is held.
    pub move_speed: f32,
    pub shoot_rate_ms: f32,
    pub margin: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            move_speed: 5.0,
            shoot_rate_ms: 150.0,
            margin: 30.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Spawn interval at level 0; shrinks as `base / (1 + level * 0.2)`.
    pub base_interval_ms: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        SpawnConfig {
            base_interval_ms: 2000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport: Viewport,
    pub player: PlayerConfig,
    pub spawn: SpawnConfig,
    /// Whether enemies shoot back.
    pub enemy_fire: bool,
    /// Frame length the front end schedules ticks at.
    pub frame_ms: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            viewport: Viewport::default(),
            player: PlayerConfig::default(),
            spawn: SpawnConfig::default(),
            enemy_fire: true,
            frame_ms: MS_PER_FRAME,
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.viewport;
        let p = &self.player;
        if !(v.width > 0.0 && v.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                v.width, v.height
            )));
        }
        if p.margin < 0.0 || v.width < 2.0 * p.margin || v.height < 2.0 * p.margin {
            return Err(ConfigError::Invalid(format!(
                "player margin {} does not fit a {}x{} viewport",
                p.margin, v.width, v.height
            )));
        }
        let positive = [
            ("player.move_speed", p.move_speed),
            ("player.shoot_rate_ms", p.shoot_rate_ms),
            ("spawn.base_interval_ms", self.spawn.base_interval_ms),
            ("frame_ms", self.frame_ms),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
