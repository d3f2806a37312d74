// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config;
//! use std::path::Path;
//!
//! let path = Path::new("settings.toml");
//!
//! // Load existing configuration
//! let mut config = config::load_from_path(path).unwrap_or_default();
//!
//! // Modify a setting
//! config.snackbar.long_duration_ms = Some(4000);
//!
//! // Save the modified configuration
//! config::save_to_path(&config, path).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSnackbar";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub snackbar: SnackbarConfig,
}

/// Timing preferences for the snackbar surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnackbarConfig {
    #[serde(default)]
    pub short_duration_ms: Option<u32>,
    #[serde(default)]
    pub long_duration_ms: Option<u32>,
}

impl SnackbarConfig {
    /// Resolved `Short` duration, clamped to the supported range.
    #[must_use]
    pub fn short_duration(&self) -> Duration {
        clamp_duration(self.short_duration_ms.unwrap_or(DEFAULT_SHORT_DURATION_MS))
    }

    /// Resolved `Long` duration, clamped to the supported range.
    #[must_use]
    pub fn long_duration(&self) -> Duration {
        clamp_duration(self.long_duration_ms.unwrap_or(DEFAULT_LONG_DURATION_MS))
    }
}

/// Keeps persisted durations inside the supported range so a config file
/// cannot request a snackbar that never shows or never leaves.
fn clamp_duration(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS)))
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            snackbar: SnackbarConfig {
                short_duration_ms: Some(1000),
                long_duration_ms: Some(5000),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn missing_snackbar_section_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"en-US\"\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.language.as_deref(), Some("en-US"));
        assert_eq!(
            loaded.snackbar.long_duration(),
            Duration::from_millis(u64::from(DEFAULT_LONG_DURATION_MS))
        );
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn durations_are_clamped() {
        let config = SnackbarConfig {
            short_duration_ms: Some(1),
            long_duration_ms: Some(u32::MAX),
        };
        assert_eq!(
            config.short_duration(),
            Duration::from_millis(u64::from(MIN_DURATION_MS))
        );
        assert_eq!(
            config.long_duration(),
            Duration::from_millis(u64::from(MAX_DURATION_MS))
        );
    }

    #[test]
    fn default_durations_match_constants() {
        let config = SnackbarConfig::default();
        assert_eq!(config.short_duration(), Duration::from_millis(1500));
        assert_eq!(config.long_duration(), Duration::from_millis(2750));
    }
}
