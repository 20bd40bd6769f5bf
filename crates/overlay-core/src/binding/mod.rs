mod hotkey_binding;
mod key_code;
mod key_event;
mod modifiers;

pub use {
    hotkey_binding::HotkeyBinding,
    key_code::KeyCode,
    key_event::{KeyEvent, KeyEventKind},
    modifiers::ModifierFlags,
};
