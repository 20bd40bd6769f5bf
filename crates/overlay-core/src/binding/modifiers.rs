use bitflags::bitflags;

bitflags! {
    /// Raw modifier bitmask as reported by keyboard events.
    ///
    /// Bit positions follow the platform event mask, so persisted values and
    /// live events can be compared without translation. Only the four
    /// [`CANONICAL`](ModifierFlags::CANONICAL) bits carry meaning for a
    /// binding; the rest is state noise (lock keys, keypad origin, fn).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u64 {
        /// Caps Lock is engaged.
        const CAPS_LOCK = 1 << 16;
        /// Shift.
        const SHIFT = 1 << 17;
        /// Control.
        const CONTROL = 1 << 18;
        /// Option / Alt.
        const OPTION = 1 << 19;
        /// Command / Meta / Super.
        const COMMAND = 1 << 20;
        /// Key originated on the numeric keypad.
        const NUMERIC_PAD = 1 << 21;
        /// Help key.
        const HELP = 1 << 22;
        /// Fn key, or a key that only exists behind Fn.
        const FUNCTION = 1 << 23;

        /// Device-independent modifiers that take part in matching.
        const CANONICAL = Self::CONTROL.bits()
            | Self::OPTION.bits()
            | Self::SHIFT.bits()
            | Self::COMMAND.bits();
    }
}

impl ModifierFlags {
    /// Builds a set from a raw event mask, keeping every bit.
    pub const fn from_raw(raw: u64) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Drops everything outside Control/Option/Shift/Command.
    pub fn canonical(self) -> Self {
        self & Self::CANONICAL
    }

    /// Whether the canonical part of the set is empty.
    pub fn is_bare(self) -> bool {
        self.canonical().is_empty()
    }

    /// Exact set equality after canonicalizing both sides.
    ///
    /// `{Control}` does not satisfy `{Control, Shift}` and vice versa.
    pub fn matches(self, required: Self) -> bool {
        self.canonical() == required.canonical()
    }
}
