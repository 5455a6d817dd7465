// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Path Resolution
//!
//! The config file location is resolved in priority order:
//! 1. Explicit directory passed by the caller (`--config-dir` flag, tests)
//! 2. The `ICED_WAYPOINT_CONFIG_DIR` environment variable
//! 3. The platform-specific config directory via the `dirs` crate
//!
//! A missing file yields the defaults. An unreadable or unparsable file also
//! yields the defaults, but `load` reports a warning key so the UI can tell
//! the user their preferences were ignored.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedWaypoint";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_WAYPOINT_CONFIG_DIR";

/// Notification key surfaced when the config file exists but cannot be used.
pub const WARNING_CONFIG_LOAD_FAILED: &str = "notification-config-load-failed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn config_file_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults.
///
/// Returns the config together with an optional warning key for the UI when
/// an existing file could not be read or parsed.
pub fn load(dir_override: Option<&Path>) -> (Config, Option<&'static str>) {
    let Some(path) = config_file_path(dir_override) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unusable config file");
            (Config::default(), Some(WARNING_CONFIG_LOAD_FAILED))
        }
    }
}

/// Saves the configuration to the resolved config file path.
pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_file_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
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
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_degrades_to_defaults_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "language = 5")
            .expect("failed to write invalid toml");

        let (config, warning) = load(Some(temp_dir.path()));

        assert_eq!(config, Config::default());
        assert_eq!(warning, Some(WARNING_CONFIG_LOAD_FAILED));
    }

    #[test]
    fn load_returns_defaults_without_warning_when_file_is_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load(Some(temp_dir.path()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        assert!(config.language.is_none());
        assert_eq!(config.theme_mode, ThemeMode::System);
    }
}
