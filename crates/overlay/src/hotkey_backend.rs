//! System-wide hotkey service backed by `global-hotkey`.

use crate::{AppError, AppResult, keymap};

use std::{collections::HashMap, panic::Location};

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyManager, hotkey::HotKey};
use overlay_core::{CoreResult, GlobalHotkeyService, HotkeyBinding, HotkeyError, RegistrationToken};
use tracing::{debug, instrument};

/// [`GlobalHotkeyService`] over the OS hotkey facility.
///
/// Must be created and used on the thread running the event loop; on Windows
/// that thread pumps the messages that carry `WM_HOTKEY`. The token handed to
/// the registry is the `global-hotkey` id, which is also the `id` carried by
/// every `GlobalHotKeyEvent`.
pub struct GlobalHotkeyBackend {
    manager: GlobalHotKeyManager,
    live: HashMap<RegistrationToken, HotKey>,
}

impl GlobalHotkeyBackend {
    /// Create the backend and its OS hotkey manager.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let manager = GlobalHotKeyManager::new().map_err(|e| AppError::Hotkey {
            source: HotkeyError::RegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            },
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            manager,
            live: HashMap::new(),
        })
    }
}

impl GlobalHotkeyService for GlobalHotkeyBackend {
    #[track_caller]
    fn register(&mut self, binding: &HotkeyBinding) -> CoreResult<RegistrationToken> {
        let hotkey =
            keymap::to_global_hotkey(binding).ok_or_else(|| HotkeyError::InvalidBinding {
                reason: format!("No global key mapping for key code {}", binding.key()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let token = RegistrationToken(hotkey.id());
        if self.live.contains_key(&token) {
            return Err(HotkeyError::AlreadyRegistered {
                token,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.manager.register(hotkey).map_err(|e| match e {
            global_hotkey::Error::AlreadyRegistered(_) => HotkeyError::AlreadyRegistered {
                token,
                location: ErrorLocation::from(Location::caller()),
            },
            other => HotkeyError::RegistrationFailed {
                reason: format!("Failed to register {}: {}", binding, other),
                location: ErrorLocation::from(Location::caller()),
            },
        })?;

        self.live.insert(token, hotkey);
        debug!(token = %token, binding = %binding, "OS hotkey registered");

        Ok(token)
    }

    #[track_caller]
    fn unregister(&mut self, token: RegistrationToken) -> CoreResult<()> {
        let Some(hotkey) = self.live.get(&token).copied() else {
            return Ok(());
        };

        self.manager
            .unregister(hotkey)
            .map_err(|e| HotkeyError::UnregistrationFailed {
                reason: format!("Failed to unregister {}: {}", token, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.live.remove(&token);
        debug!(token = %token, "OS hotkey unregistered");

        Ok(())
    }
}
