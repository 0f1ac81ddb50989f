//! Configuration management for storyterm
//!
//! Settings live in `<config dir>/storyterm/config.toml`. Every field has a
//! default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::PlaybackOptions;
use crate::tui::Theme;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "STORYTERM_CONFIG";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub story: StoryConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Typewriter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between revealed characters, in milliseconds
    #[serde(default = "default_typing_speed_ms")]
    pub typing_speed_ms: u64,
    /// Marker drawn after a fully revealed message
    #[serde(default = "default_cursor_marker")]
    pub cursor_marker: String,
    /// Show the first message without waiting for input
    #[serde(default = "default_true")]
    pub auto_start: bool,
}

/// Which story to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryConfig {
    /// Story file to play instead of the built-in story
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Appearance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme preset name (phosphor, amber, classic)
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write a log file under the data directory
    #[serde(default)]
    pub enabled: bool,
    /// Default filter when `STORYTERM_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_typing_speed_ms() -> u64 {
    PlaybackOptions::DEFAULT_TYPING_SPEED.as_millis() as u64
}

fn default_cursor_marker() -> String {
    PlaybackOptions::DEFAULT_CURSOR_MARKER.to_string()
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "phosphor".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: default_typing_speed_ms(),
            cursor_marker: default_cursor_marker(),
            auto_start: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Path of the config file.
    ///
    /// `STORYTERM_CONFIG` overrides the default location.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("storyterm").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific path, falling back to defaults when it
    /// is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that cannot be played.
    pub fn validate(&self) -> Result<()> {
        if Theme::by_name(&self.ui.theme).is_none() {
            anyhow::bail!(
                "Unknown theme '{}' (expected one of: {})",
                self.ui.theme,
                Theme::NAMES.join(", ")
            );
        }
        Ok(())
    }

    /// Resolved theme, falling back to the default for unknown names.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.ui.theme).unwrap_or_default()
    }

    /// Playback options derived from the `[playback]` section.
    pub fn playback_options(&self) -> PlaybackOptions {
        PlaybackOptions {
            typing_speed: Duration::from_millis(self.playback.typing_speed_ms),
            cursor_marker: self.playback.cursor_marker.clone(),
            auto_start: self.playback.auto_start,
        }
    }
}
