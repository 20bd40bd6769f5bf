#[allow(clippy::module_inception)]
mod registry;
mod service;

pub use {
    registry::{
        GlobalHotkeyState, HotkeyRegistry, LocalDisposition, RegistrationHandle, ToggleCallback,
    },
    service::{GlobalHotkeyService, RegistrationToken},
};
