// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[banner]` - Banner animation, chrome geometry, and gesture settings
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_BANNER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::config;
//!
//! let (mut config, _warning) = config::load();
//! config.banner.duration_secs = Some(0.3);
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

/// i18n key shown when the settings file exists but cannot be parsed.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Banner presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Show/hide animation duration in seconds.
    #[serde(
        default = "default_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_secs: Option<f64>,

    /// Height of the status strip the status-bar banner must clear.
    #[serde(
        default = "default_status_bar_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_bar_height: Option<f32>,

    /// Height of the navigation bar below the status strip.
    #[serde(
        default = "default_navigation_bar_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub navigation_bar_height: Option<f32>,

    /// Upward travel needed for a swipe-to-dismiss.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            status_bar_height: default_status_bar_height(),
            navigation_bar_height: default_navigation_bar_height(),
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl BannerConfig {
    /// Animation duration, clamped to the supported range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let secs = self
            .duration_secs
            .filter(|secs| secs.is_finite())
            .unwrap_or(DEFAULT_BANNER_DURATION_SECS)
            .clamp(MIN_BANNER_DURATION_SECS, MAX_BANNER_DURATION_SECS);
        Duration::from_secs_f64(secs)
    }

    /// Status strip height, clamped to `0..=MAX_CHROME_HEIGHT`.
    #[must_use]
    pub fn status_bar_height(&self) -> f32 {
        clamp_chrome(self.status_bar_height, DEFAULT_STATUS_BAR_HEIGHT)
    }

    /// Navigation bar height, clamped to `0..=MAX_CHROME_HEIGHT`.
    #[must_use]
    pub fn navigation_bar_height(&self) -> f32 {
        clamp_chrome(self.navigation_bar_height, DEFAULT_NAVIGATION_BAR_HEIGHT)
    }

    /// Swipe threshold, clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
            .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
    }
}

fn clamp_chrome(value: Option<f32>, default: f32) -> f32 {
    value
        .filter(|value| value.is_finite())
        .unwrap_or(default)
        .clamp(0.0, MAX_CHROME_HEIGHT)
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Banner presentation settings.
    #[serde(default)]
    pub banner: BannerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_secs() -> Option<f64> {
    Some(DEFAULT_BANNER_DURATION_SECS)
}

fn default_status_bar_height() -> Option<f32> {
    Some(DEFAULT_STATUS_BAR_HEIGHT)
}

fn default_navigation_bar_height() -> Option<f32> {
    Some(DEFAULT_NAVIGATION_BAR_HEIGHT)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
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
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            banner: BannerConfig {
                duration_secs: Some(0.25),
                status_bar_height: Some(24.0),
                navigation_bar_height: Some(56.0),
                swipe_threshold: Some(30.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.banner, BannerConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_reports_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[banner\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_ERROR_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn banner_duration_is_clamped() {
        let mut banner = BannerConfig {
            duration_secs: Some(60.0),
            ..BannerConfig::default()
        };
        assert_eq!(
            banner.duration(),
            Duration::from_secs_f64(MAX_BANNER_DURATION_SECS)
        );

        banner.duration_secs = Some(0.0);
        assert_eq!(
            banner.duration(),
            Duration::from_secs_f64(MIN_BANNER_DURATION_SECS)
        );

        banner.duration_secs = Some(f64::NAN);
        assert_eq!(
            banner.duration(),
            Duration::from_secs_f64(DEFAULT_BANNER_DURATION_SECS)
        );
    }

    #[test]
    fn chrome_heights_never_go_negative() {
        let banner = BannerConfig {
            status_bar_height: Some(-5.0),
            navigation_bar_height: None,
            ..BannerConfig::default()
        };
        assert_eq!(banner.status_bar_height(), 0.0);
        assert_eq!(banner.navigation_bar_height(), DEFAULT_NAVIGATION_BAR_HEIGHT);
    }

    #[test]
    fn swipe_threshold_is_clamped() {
        let banner = BannerConfig {
            swipe_threshold: Some(1.0),
            ..BannerConfig::default()
        };
        assert_eq!(banner.swipe_threshold(), MIN_SWIPE_THRESHOLD);
    }
}
