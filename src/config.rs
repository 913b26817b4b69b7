//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};

/// Output formatting preferences for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print hex codes as "#RRGGBB" instead of "#rrggbb"
    #[serde(default)]
    pub uppercase_hex: bool,
    /// Indent JSON output
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            uppercase_hex: false,
            pretty_json: default_pretty_json(),
        }
    }
}

impl OutputConfig {
    /// Formats a lowercase hex code according to `uppercase_hex`.
    #[must_use]
    pub fn format_hex(&self, hex: &str) -> String {
        if self.uppercase_hex {
            hex.to_uppercase()
        } else {
            hex.to_lowercase()
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3001
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/FortunePalette/config.toml`
/// - macOS: `~/Library/Application Support/FortunePalette/config.toml`
/// - Windows: `%APPDATA%\FortunePalette\config.toml`
///
/// Setting `FORTUNE_PALETTE_CONFIG_DIR` replaces the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// CLI output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// Web server settings
    #[serde(default)]
    pub web: WebConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// # Errors
    ///
    /// Returns an error when no config directory can be determined.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config.toml file.
    ///
    /// # Errors
    ///
    /// Returns an error when no config directory can be determined.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or fails validation.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using an atomic write (temp file + rename).
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty web host or port 0.
    pub fn validate(&self) -> Result<()> {
        if self.web.host.trim().is_empty() {
            anyhow::bail!("Web host must not be empty");
        }

        if self.web.port == 0 {
            anyhow::bail!("Web port must be between 1 and 65535");
        }

        Ok(())
    }

    /// Address the web server binds to, e.g. "127.0.0.1:3001".
    #[must_use]
    pub fn web_address(&self) -> String {
        format!("{}:{}", self.web.host, self.web.port)
    }
}
