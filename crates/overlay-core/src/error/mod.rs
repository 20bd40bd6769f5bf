use crate::RegistrationToken;

use error_location::ErrorLocation;
use thiserror::Error;

/// Hotkey errors with source location tracking.
#[derive(Error, Debug)]
pub enum HotkeyError {
    /// The system-wide hotkey service rejected a registration.
    #[error("Hotkey registration failed: {reason} {location}")]
    RegistrationFailed {
        /// Human-readable reason reported by the service.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A registration with the same identifier is still live.
    #[error("Hotkey identifier {token} is already registered {location}")]
    AlreadyRegistered {
        /// The identifier that is still in use.
        token: RegistrationToken,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The system-wide hotkey service failed to release a registration.
    #[error("Hotkey unregistration failed: {reason} {location}")]
    UnregistrationFailed {
        /// Human-readable reason reported by the service.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A binding cannot be used as a global shortcut.
    #[error("Invalid hotkey binding: {reason} {location}")]
    InvalidBinding {
        /// Why the binding was rejected.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`HotkeyError`].
pub type Result<T> = std::result::Result<T, HotkeyError>;
