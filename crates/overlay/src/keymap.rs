//! Translation between tao key events, platform key codes and
//! `global-hotkey` codes.
//!
//! One table drives both directions so a key the window can report is
//! always a key the system-wide service can register.

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use overlay_core::{HotkeyBinding, KeyCode, ModifierFlags};
use tao::keyboard::{KeyCode as TaoKeyCode, ModifiersState};

macro_rules! key_table {
    ($(($key:ident, $variant:ident)),* $(,)?) => {
        /// Platform key code for a physical key reported by the window.
        ///
        /// Modifier keys and keys outside the table map to `None`.
        pub(crate) fn from_tao(code: TaoKeyCode) -> Option<KeyCode> {
            match code {
                $(TaoKeyCode::$variant => Some(KeyCode::$key),)*
                _ => None,
            }
        }

        /// `global-hotkey` code for a platform key code.
        pub(crate) fn to_global_code(key: KeyCode) -> Option<Code> {
            match key {
                $(KeyCode::$key => Some(Code::$variant),)*
                _ => None,
            }
        }
    };
}

key_table! {
    (A, KeyA), (B, KeyB), (C, KeyC), (D, KeyD), (E, KeyE), (F, KeyF), (G, KeyG),
    (H, KeyH), (I, KeyI), (J, KeyJ), (K, KeyK), (L, KeyL), (M, KeyM), (N, KeyN),
    (O, KeyO), (P, KeyP), (Q, KeyQ), (R, KeyR), (S, KeyS), (T, KeyT), (U, KeyU),
    (V, KeyV), (W, KeyW), (X, KeyX), (Y, KeyY), (Z, KeyZ),
    (DIGIT_0, Digit0), (DIGIT_1, Digit1), (DIGIT_2, Digit2), (DIGIT_3, Digit3),
    (DIGIT_4, Digit4), (DIGIT_5, Digit5), (DIGIT_6, Digit6), (DIGIT_7, Digit7),
    (DIGIT_8, Digit8), (DIGIT_9, Digit9),
    (SECTION, IntlBackslash),
    (GRAVE, Backquote),
    (EQUAL, Equal),
    (MINUS, Minus),
    (LEFT_BRACKET, BracketLeft),
    (RIGHT_BRACKET, BracketRight),
    (QUOTE, Quote),
    (SEMICOLON, Semicolon),
    (BACKSLASH, Backslash),
    (COMMA, Comma),
    (SLASH, Slash),
    (PERIOD, Period),
    (JIS_YEN, IntlYen),
    (JIS_UNDERSCORE, IntlRo),
    (RETURN, Enter),
    (TAB, Tab),
    (SPACE, Space),
    (DELETE, Backspace),
    (FORWARD_DELETE, Delete),
    (ESCAPE, Escape),
    (F1, F1), (F2, F2), (F3, F3), (F4, F4), (F5, F5), (F6, F6), (F7, F7), (F8, F8),
    (F9, F9), (F10, F10), (F11, F11), (F12, F12), (F13, F13), (F14, F14), (F15, F15),
    (HOME, Home),
    (END, End),
    (PAGE_UP, PageUp),
    (PAGE_DOWN, PageDown),
    (LEFT_ARROW, ArrowLeft),
    (RIGHT_ARROW, ArrowRight),
    (DOWN_ARROW, ArrowDown),
    (UP_ARROW, ArrowUp),
}

/// Whether the system-wide service can register `key`.
pub(crate) fn is_registrable(key: KeyCode) -> bool {
    to_global_code(key).is_some()
}

/// Raw modifier mask for the window's current modifier state.
pub(crate) fn modifiers_from_tao(state: ModifiersState) -> ModifierFlags {
    let mut flags = ModifierFlags::empty();
    flags.set(ModifierFlags::CONTROL, state.control_key());
    flags.set(ModifierFlags::OPTION, state.alt_key());
    flags.set(ModifierFlags::SHIFT, state.shift_key());
    flags.set(ModifierFlags::COMMAND, state.super_key());
    flags
}

/// `global-hotkey` modifiers for a canonical modifier set.
pub(crate) fn to_global_modifiers(flags: ModifierFlags) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    modifiers.set(Modifiers::CONTROL, flags.contains(ModifierFlags::CONTROL));
    modifiers.set(Modifiers::ALT, flags.contains(ModifierFlags::OPTION));
    modifiers.set(Modifiers::SHIFT, flags.contains(ModifierFlags::SHIFT));
    modifiers.set(Modifiers::SUPER, flags.contains(ModifierFlags::COMMAND));
    modifiers
}

/// The `global-hotkey` combination for a binding, if its key is mapped.
pub(crate) fn to_global_hotkey(binding: &HotkeyBinding) -> Option<HotKey> {
    let code = to_global_code(binding.key())?;
    Some(HotKey::new(
        Some(to_global_modifiers(binding.modifiers())),
        code,
    ))
}
