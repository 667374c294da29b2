//! Configuration management for todoterm
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, DEFAULT_API_BASE_URL, MAX_HEALTH_INTERVAL_SECONDS, MAX_TOAST_SECONDS, MIN_TOAST_SECONDS,
};
use crate::icons::IconTheme;
use crate::pipeline::{Filter, SortOrder, ViewMode};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub health: HealthConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Remote task API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the API; `/todos` and `/health` are resolved against it
    pub base_url: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Filter selected on startup
    pub default_filter: Filter,
    /// Layout selected on startup
    pub default_view: ViewMode,
    /// Sort order selected on startup
    pub default_sort: SortOrder,
    /// How long a notification stays on screen
    pub toast_seconds: u64,
}

/// Health check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Periodic health check interval in seconds (0 = only on startup and on demand)
    pub check_interval_seconds: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for created/updated dates
    pub date_format: String,
    /// Show task descriptions in the list
    pub show_descriptions: bool,
    /// Show the decorative category/priority tags
    pub show_tags: bool,
    /// Icon set: emoji, unicode or ascii
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_filter: Filter::All,
            default_view: ViewMode::List,
            default_sort: SortOrder::Newest,
            toast_seconds: 5,
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            check_interval_seconds: 60,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DISPLAY_DATE_FORMAT.to_string(),
            show_descriptions: true,
            show_tags: true,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(url)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the API base URL (from the environment) and re-validate
    pub fn apply_api_url_override(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Ok(());
        }
        self.api.base_url = url;
        self.validate()
            .with_context(|| format!("Invalid {} override", API_URL_ENV))
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("todoterm.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        Self::get_default_config_path().ok().filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!("api.base_url must start with http:// or https://, got '{}'", base_url);
        }

        if self.ui.toast_seconds < MIN_TOAST_SECONDS || self.ui.toast_seconds > MAX_TOAST_SECONDS {
            anyhow::bail!(
                "toast_seconds must be between {} and {}, got {}",
                MIN_TOAST_SECONDS,
                MAX_TOAST_SECONDS,
                self.ui.toast_seconds
            );
        }

        if self.health.check_interval_seconds > MAX_HEALTH_INTERVAL_SECONDS {
            anyhow::bail!(
                "check_interval_seconds cannot exceed {} (24 hours)",
                MAX_HEALTH_INTERVAL_SECONDS
            );
        }

        if !datetime::is_valid_format(&self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        if let Err(e) = log::LevelFilter::from_str(&self.logging.level) {
            anyhow::bail!("Invalid logging level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("todoterm"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
