use crate::{KeyCode, ModifierFlags};

/// What happened on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    /// A key went down.
    KeyDown {
        /// Physical key that was pressed.
        key: KeyCode,
        /// Auto-repeat of a press already delivered.
        repeat: bool,
    },
    /// A key was released.
    KeyUp {
        /// Physical key that was released.
        key: KeyCode,
    },
    /// Only the modifier state changed; no key was pressed.
    FlagsChanged,
}

/// A keyboard event as delivered by the in-process event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Event kind and, for key-downs, the key.
    pub kind: KeyEventKind,
    /// Raw modifier mask at the time of the event.
    pub modifiers: ModifierFlags,
}

impl KeyEvent {
    /// A fresh (non-repeat) key-down.
    pub fn key_down(key: KeyCode, modifiers: ModifierFlags) -> Self {
        Self {
            kind: KeyEventKind::KeyDown { key, repeat: false },
            modifiers,
        }
    }

    /// An auto-repeat key-down.
    pub fn key_repeat(key: KeyCode, modifiers: ModifierFlags) -> Self {
        Self {
            kind: KeyEventKind::KeyDown { key, repeat: true },
            modifiers,
        }
    }

    /// A key release.
    pub fn key_up(key: KeyCode, modifiers: ModifierFlags) -> Self {
        Self {
            kind: KeyEventKind::KeyUp { key },
            modifiers,
        }
    }

    /// A modifier-only change.
    pub fn flags_changed(modifiers: ModifierFlags) -> Self {
        Self {
            kind: KeyEventKind::FlagsChanged,
            modifiers,
        }
    }

    /// Modifiers with non-semantic bits removed.
    pub fn canonical_modifiers(&self) -> ModifierFlags {
        self.modifiers.canonical()
    }
}
