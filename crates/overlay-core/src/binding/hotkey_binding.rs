use crate::{CoreResult, HotkeyError, KeyCode, ModifierFlags, label};

use std::{fmt, panic::Location};

use error_location::ErrorLocation;

/// One key combination bound to the toggle action.
///
/// Modifiers are canonicalized on construction, so the derived equality is
/// exactly "same key, same canonical modifier set". The value is immutable;
/// changing the shortcut means building a new binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotkeyBinding {
    key: KeyCode,
    modifiers: ModifierFlags,
}

impl HotkeyBinding {
    /// Built-in shortcut used when nothing valid is persisted: Control + §.
    pub const DEFAULT: Self = Self {
        key: KeyCode::SECTION,
        modifiers: ModifierFlags::CONTROL,
    };

    /// Create a binding, discarding non-semantic modifier bits.
    ///
    /// No validation happens here. Use [`HotkeyBinding::from_raw`] for values
    /// coming from outside the process.
    pub fn new(key: KeyCode, modifiers: ModifierFlags) -> Self {
        Self {
            key,
            modifiers: modifiers.canonical(),
        }
    }

    /// Rebuild a binding from a persisted `(key code, raw modifier mask)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`HotkeyError::InvalidBinding`] when the canonical modifier set
    /// is empty: a bare key is never a valid global shortcut.
    #[track_caller]
    pub fn from_raw(key_code: u16, raw_modifiers: u64) -> CoreResult<Self> {
        let binding = Self::new(KeyCode(key_code), ModifierFlags::from_raw(raw_modifiers));

        if !binding.has_modifiers() {
            return Err(HotkeyError::InvalidBinding {
                reason: format!(
                    "key {} has no Control/Option/Shift/Command modifier (raw mask {:#x})",
                    key_code, raw_modifiers
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(binding)
    }

    /// The platform key identifier.
    pub fn key(&self) -> KeyCode {
        self.key
    }

    /// The canonical modifier set.
    pub fn modifiers(&self) -> ModifierFlags {
        self.modifiers
    }

    /// Whether at least one canonical modifier is required.
    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// Whether an observed key and raw modifier mask trigger this binding.
    pub fn matches(&self, key: KeyCode, observed: ModifierFlags) -> bool {
        self.key == key && observed.matches(self.modifiers)
    }
}

impl Default for HotkeyBinding {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Renders with the static key table only; see
/// [`KeyLabelFormatter`](crate::KeyLabelFormatter) for layout-aware labels.
impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&label::format_with(self, |_| None))
    }
}
