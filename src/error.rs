//! Errors raised while loading game configuration.
//!
//! The simulation itself has no failure paths: damage and cooldowns clamp,
//! removals of absent entities are no-ops.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for `GameConfig`.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Values parsed but are out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
