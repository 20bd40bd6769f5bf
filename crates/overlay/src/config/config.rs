//! Configuration management for the overlay.
//!
//! Handles loading and saving the TOML configuration file with a
//! cross-platform path and atomic writes. A missing, unreadable or malformed
//! file never stops startup; the built-in defaults are used instead.

use crate::{AppError, AppResult, config::HotkeyConfig};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use overlay_core::HotkeyBinding;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Toggle shortcut.
    #[serde(default)]
    pub hotkey: HotkeyConfig,
}

impl Config {
    /// Load configuration from the platform config directory.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, creating a default file if none exists.
    ///
    /// Read and parse failures are logged and answered with defaults.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info!("No config found, creating default");
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(config_path = ?path, error = %e, "Failed to read config, using defaults");
                return Ok(Self::default());
            }
        };

        match toml::from_str::<Config>(&contents) {
            Ok(config) => {
                info!(config_path = ?path, "Configuration loaded");
                Ok(config)
            }
            Err(e) => {
                warn!(config_path = ?path, error = %e, "Failed to parse config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The stored shortcut, or the built-in default if the stored value is
    /// unusable.
    pub fn hotkey_binding(&self) -> HotkeyBinding {
        match self.hotkey.to_binding() {
            Ok(binding) => binding,
            Err(e) => {
                warn!(
                    error = %e,
                    default = %HotkeyBinding::DEFAULT,
                    "Stored hotkey is invalid, using default"
                );
                HotkeyBinding::DEFAULT
            }
        }
    }

    /// Replace the stored shortcut.
    pub fn set_hotkey_binding(&mut self, binding: HotkeyBinding) {
        self.hotkey = HotkeyConfig::from(binding);
    }

    /// Save configuration to the platform config directory.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                debug!(config_dir = ?parent, "Created config directory");
            }
        }

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "overlay", "Overlay").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
