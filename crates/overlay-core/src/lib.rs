//! Overlay Core Library
//!
//! Global hotkey binding, capture and display for the overlay.
//!
//! # Example
//!
//! ```
//! use overlay_core::{
//!     CaptureState, HotkeyBinding, HotkeyCaptureSession, KeyCode, KeyEvent, ModifierFlags,
//! };
//!
//! let mut session = HotkeyCaptureSession::new(HotkeyBinding::DEFAULT);
//! session.begin();
//!
//! let event = KeyEvent::key_down(KeyCode::A, ModifierFlags::SHIFT);
//! let state = session.handle_event(&event);
//!
//! assert_eq!(
//!     state,
//!     CaptureState::Resolved(HotkeyBinding::new(KeyCode::A, ModifierFlags::SHIFT))
//! );
//! assert_eq!(session.state(), CaptureState::Idle);
//! ```

mod binding;
mod capture;
mod error;
mod label;
mod registry;

pub use {
    binding::{HotkeyBinding, KeyCode, KeyEvent, KeyEventKind, ModifierFlags},
    capture::{BindingCallback, CaptureState, HotkeyCaptureSession, RECORDING_PLACEHOLDER},
    error::HotkeyError,
    error::Result as CoreResult,
    label::{KeyLabelFormatter, LayoutResolver, NoLayout},
    registry::{
        GlobalHotkeyService, GlobalHotkeyState, HotkeyRegistry, LocalDisposition,
        RegistrationHandle, RegistrationToken, ToggleCallback,
    },
};

#[cfg(test)]
mod tests;
