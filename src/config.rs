//! Configuration management
//!
//! Handles loading and saving the display preferences shared by all
//! components: default currency and locale, copy feedback timing, masking
//! and truncation, and QR rendering.
//!
//! Configuration files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/satoshi-ui/config.yaml`
//! - Linux: `~/.config/satoshi-ui/config.yaml`
//! - Windows: `%APPDATA%\satoshi-ui\config.yaml`

use crate::components::ErrorCorrection;
use crate::currency::{Currency, Locale};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
///
/// Every field has a default, so a partial or missing file is fine.
/// Persisted as YAML in the user's config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency used by amount inputs
    pub currency: Currency,
    /// Separator convention; the currency's home locale when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// How long copy feedback stays visible, in milliseconds
    pub feedback_duration_ms: u64,
    /// How long toasts stay visible, in milliseconds
    pub toast_duration_ms: u64,
    /// Character repeated to mask secrets
    pub mask_character: String,
    /// Leading characters kept when truncating long text
    pub truncate_start: usize,
    /// Trailing characters kept when truncating long text
    pub truncate_end: usize,
    /// QR code edge length in pixels
    pub qr_size: u32,
    /// QR error correction level
    pub qr_level: ErrorCorrection,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency: Currency::Btc,
            locale: None,
            feedback_duration_ms: 2000,
            toast_duration_ms: 3000,
            mask_character: "•".to_string(),
            truncate_start: 6,
            truncate_end: 7,
            qr_size: 256,
            qr_level: ErrorCorrection::M,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location
    ///
    /// # Returns
    /// - `Ok(Config)` with the loaded configuration, or defaults if the file doesn't exist
    /// - `Err` if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path
    ///
    /// # Errors
    /// Returns an error if the file exists but is malformed or unreadable.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            serde_yaml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Saves the configuration to the default config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let contents = serde_yaml::to_string(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Falls back to `~/.config/satoshi-ui/config.yaml` if platform detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "satoshi-ui") {
            Ok(proj_dirs.config_dir().join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/satoshi-ui/config.yaml"))
        }
    }

    /// Returns the directory log files are written to
    pub fn log_dir() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "satoshi-ui") {
            Ok(proj_dirs.data_local_dir().to_path_buf())
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".local/share/satoshi-ui"))
        }
    }

    /// Locale to use, falling back to the currency's home locale
    pub fn effective_locale(&self) -> Locale {
        self.locale.unwrap_or_else(|| self.currency.home_locale())
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_duration_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
