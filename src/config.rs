// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Layers, later wins: built-in defaults, a TOML file, `GRAPHTRACE_*`
//! environment variables (`__` separates nested keys, e.g.
//! `GRAPHTRACE_PLAYBACK__DELAY_MS`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Colorize step output
    pub color: bool,
    /// Replay settings
    pub playback: PlaybackConfig,
}

/// How recorded steps are replayed on the terminal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pause between two steps, in milliseconds
    pub delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            color: true,
            playback: PlaybackConfig::default(),
        }
    }
}

impl PlaybackConfig {
    /// Pause between two steps
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Default location of the config file
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "graphtrace")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from disk and environment, or use defaults
///
/// An explicit `path` must exist; the default location is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let mut builder = config::Config::builder()
        .set_default("log_level", defaults.log_level)?
        .set_default("color", defaults.color)?
        .set_default("playback.delay_ms", defaults.playback.delay_ms)?;

    match path {
        Some(path) => {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        None => {
            if let Some(path) = default_path() {
                builder = builder.add_source(config::File::from(path).required(false));
            }
        }
    }

    builder
        .add_source(
            config::Environment::with_prefix("GRAPHTRACE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Failed to parse configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.log_level, "info");
        assert!(config.color);
        assert_eq!(config.playback.delay(), Duration::ZERO);
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "color = false\n\n[playback]\ndelay_ms = 600\n").unwrap();

        let config = load(Some(&path)).unwrap();

        assert!(!config.color);
        assert_eq!(config.playback.delay(), Duration::from_millis(600));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();

        assert!(load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
