// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[backend]` - REST service location
//! - `[notifications]` - Toast timings
//! - `[login]` - Login screen decoration
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `BIBLIOSENA_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use bibliosena::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("es".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "es", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Backend service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL the `/api/*` endpoints are resolved against.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Auto-dismiss delay for toasts, in milliseconds.
    #[serde(default = "default_toast_duration_ms", skip_serializing_if = "Option::is_none")]
    pub toast_duration_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Returns the configured toast duration clamped to the supported range.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        let ms = self
            .toast_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }
}

/// Login screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginConfig {
    /// Whether the animated particle background is drawn.
    #[serde(default = "default_particles")]
    pub particles: bool,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            particles: default_particles(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub login: LoginConfig,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_particles() -> bool {
    true
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults with no warning; an unreadable or invalid file yields the
/// defaults plus an i18n key that can be shown as a toast.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(Error::Io(message)) => {
            tracing::warn!(path = %path.display(), %message, "could not read settings");
            (
                Config::default(),
                Some("notification-config-read-error".to_string()),
            )
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
            (
                Config::default(),
                Some("notification-config-parse-error".to_string()),
            )
        }
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads and parses a configuration file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Writes a configuration file, creating parent directories as needed.
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
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            backend: BackendConfig {
                api_url: "https://biblio.example".to_string(),
            },
            notifications: NotificationsConfig {
                toast_duration_ms: Some(5000),
            },
            login: LoginConfig { particles: false },
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"es\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("es"));
        assert_eq!(loaded.backend.api_url, DEFAULT_API_URL);
        assert!(loaded.login.particles);
        assert_eq!(
            loaded.notifications.toast_duration(),
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
        );
    }

    #[test]
    fn toast_duration_is_clamped() {
        let short = NotificationsConfig {
            toast_duration_ms: Some(10),
        };
        let long = NotificationsConfig {
            toast_duration_ms: Some(600_000),
        };
        assert_eq!(
            short.toast_duration(),
            Duration::from_millis(MIN_TOAST_DURATION_MS)
        );
        assert_eq!(
            long.toast_duration(),
            Duration::from_millis(MAX_TOAST_DURATION_MS)
        );
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
