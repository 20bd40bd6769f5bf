use crate::{AppError, AppResult, keymap};

use std::panic::Location;

use error_location::ErrorLocation;
use overlay_core::HotkeyBinding;
use serde::{Deserialize, Serialize};

/// Persisted toggle shortcut.
///
/// Stored as the raw key code and the raw modifier mask so that any binding
/// the recorder can produce survives a round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Platform key code of the shortcut key.
    pub key_code: u16,
    /// Raw modifier mask.
    pub modifiers: u64,
}

impl HotkeyConfig {
    /// Turn the stored pair back into a binding the host can register.
    ///
    /// Fails for an empty modifier set or a key the host has no global
    /// mapping for.
    #[track_caller]
    pub fn to_binding(&self) -> AppResult<HotkeyBinding> {
        let binding = HotkeyBinding::from_raw(self.key_code, self.modifiers)?;

        if !keymap::is_registrable(binding.key()) {
            return Err(AppError::ConfigError {
                reason: format!("Unknown key code in hotkey config: {}", self.key_code),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(binding)
    }
}

impl From<HotkeyBinding> for HotkeyConfig {
    fn from(binding: HotkeyBinding) -> Self {
        Self {
            key_code: binding.key().raw(),
            modifiers: binding.modifiers().bits(),
        }
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self::from(HotkeyBinding::DEFAULT)
    }
}
