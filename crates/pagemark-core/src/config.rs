//! Application configuration management.
//!
//! Handles loading, saving, and managing settings for toast durations and
//! picker defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::logo::LogoDescriptor;
use crate::picker::PickerTab;

/// Default icon color offered by the picker.
pub const DEFAULT_ICON_COLOR: &str = "#6d7b8a";

/// Toast durations for logo update outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Auto-dismiss delay for success toasts (None = manual dismiss).
    #[serde(default = "default_success_duration")]
    pub success_duration_ms: Option<u64>,
    /// Auto-dismiss delay for error toasts (None = manual dismiss).
    #[serde(default = "default_error_duration")]
    pub error_duration_ms: Option<u64>,
}

#[allow(clippy::unnecessary_wraps)]
const fn default_success_duration() -> Option<u64> {
    Some(3000)
}

#[allow(clippy::unnecessary_wraps)]
const fn default_error_duration() -> Option<u64> {
    Some(5000)
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_duration_ms: default_success_duration(),
            error_duration_ms: default_error_duration(),
        }
    }
}

/// Picker defaults for pages without a logo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickerConfig {
    /// Tab the picker opens on when the page has no logo.
    #[serde(default)]
    pub fallback_tab: PickerTab,
    /// Icon color preselected when the page does not use an icon.
    #[serde(default = "default_icon_color")]
    pub default_icon_color: String,
}

fn default_icon_color() -> String {
    DEFAULT_ICON_COLOR.to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            fallback_tab: PickerTab::default(),
            default_icon_color: default_icon_color(),
        }
    }
}

impl PickerConfig {
    /// Tab to open for a page logo.
    #[must_use]
    pub const fn tab_for(&self, logo: &LogoDescriptor) -> PickerTab {
        if logo.is_set() {
            logo.default_picker_tab()
        } else {
            self.fallback_tab
        }
    }

    /// Icon color to preselect for a page logo.
    #[must_use]
    pub fn icon_color_for<'a>(&'a self, logo: &'a LogoDescriptor) -> &'a str {
        logo.default_icon_color().unwrap_or(&self.default_icon_color)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Toast settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Picker settings.
    #[serde(default)]
    pub picker: PickerConfig,
}

impl AppConfig {
    /// Load configuration from the default location, or create default if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found, using defaults");
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                warn!("Failed to save default config: {}", e);
            }
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| Error::FileSystem {
            path: path.to_path_buf(),
            message: format!("Failed to read config file: {e}"),
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {e}")))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| Error::FileSystem {
                path: parent.to_path_buf(),
                message: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| Error::FileSystem {
            path: path.to_path_buf(),
            message: format!("Failed to write config file: {e}"),
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the path to the config file.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        config_file_path()
    }
}

/// Get the path to the config file.
fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("pagemark")
        .join("config.json")
}

/// Configuration manager that handles loading and caching config.
#[derive(Debug)]
pub struct ConfigManager {
    path: PathBuf,
    config: AppConfig,
}

impl ConfigManager {
    /// Create a config manager backed by the default config file.
    pub fn new() -> Result<Self> {
        Self::with_path(config_file_path())
    }

    /// Create a config manager backed by `path`.
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let config = AppConfig::load_from(&path)?;
        Ok(Self { path, config })
    }

    /// Get a reference to the current configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Path of the backing config file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace and persist the configuration.
    pub fn update(&mut self, config: AppConfig) -> Result<()> {
        if config.picker.default_icon_color.trim().is_empty() {
            return Err(Error::Configuration(
                "Default icon color must not be empty".to_string(),
            ));
        }

        self.config = config;
        self.config.save_to(&self.path)
    }

    /// Reset to default configuration.
    pub fn reset(&mut self) -> Result<()> {
        self.config = AppConfig::default();
        self.config.save_to(&self.path)
    }
}
