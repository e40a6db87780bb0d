//! Tab-level configuration management.
//!
//! This module provides configuration loading, saving, and validation for the
//! tunables the pane tree and tab coordinator consult: minimum pane sizes,
//! split and resize ratios, tab color alpha, and the debug log level.

use crate::error::ConfigError;
use crate::types::LogLevel;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a tab's pane tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum usable pane width in pixels.
    ///
    /// A vertical split needs at least twice this width.
    #[serde(default = "crate::defaults::min_pane_width")]
    pub min_pane_width: f32,

    /// Minimum usable pane height in pixels.
    ///
    /// A horizontal split needs at least twice this height.
    #[serde(default = "crate::defaults::min_pane_height")]
    pub min_pane_height: f32,

    /// Ratio given to the first child of a freshly created split
    #[serde(default = "crate::defaults::split_ratio")]
    pub split_ratio: f32,

    /// Ratio delta applied per keyboard resize step
    #[serde(default = "crate::defaults::resize_step")]
    pub resize_step: f32,

    /// Alpha applied to the custom tab color when the tab is deselected
    #[serde(default = "crate::defaults::deselected_tab_alpha")]
    pub deselected_tab_alpha: u8,

    /// Verbosity of the debug log file
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_pane_width: crate::defaults::min_pane_width(),
            min_pane_height: crate::defaults::min_pane_height(),
            split_ratio: crate::defaults::split_ratio(),
            resize_step: crate::defaults::resize_step(),
            deselected_tab_alpha: crate::defaults::deselected_tab_alpha(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Write to a temp file then rename so a crash never leaves a torn file
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Check that every field is inside its usable range
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(self.min_pane_width > 0.0) {
            return Err(ConfigError::Validation(format!(
                "min_pane_width must be positive, got {}",
                self.min_pane_width
            )));
        }
        if !(self.min_pane_height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "min_pane_height must be positive, got {}",
                self.min_pane_height
            )));
        }
        if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
            return Err(ConfigError::Validation(format!(
                "split_ratio must be strictly between 0 and 1, got {}",
                self.split_ratio
            )));
        }
        if !(self.resize_step > 0.0 && self.resize_step < 1.0) {
            return Err(ConfigError::Validation(format!(
                "resize_step must be strictly between 0 and 1, got {}",
                self.resize_step
            )));
        }
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("tabpane")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/tabpane on every unix, including macOS
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("tabpane")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
