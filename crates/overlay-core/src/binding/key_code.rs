use std::fmt;

/// Opaque platform key identifier.
///
/// Values live in the macOS virtual key-code space. A code names a physical
/// key position, so the character it produces depends on the active keyboard
/// layout. Matching never looks at the layout; only labels do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u16);

#[allow(missing_docs)]
impl KeyCode {
    pub const A: Self = Self(0x00);
    pub const S: Self = Self(0x01);
    pub const D: Self = Self(0x02);
    pub const F: Self = Self(0x03);
    pub const H: Self = Self(0x04);
    pub const G: Self = Self(0x05);
    pub const Z: Self = Self(0x06);
    pub const X: Self = Self(0x07);
    pub const C: Self = Self(0x08);
    pub const V: Self = Self(0x09);
    /// ISO key left of `1` (`§` on most European layouts).
    pub const SECTION: Self = Self(0x0A);
    pub const B: Self = Self(0x0B);
    pub const Q: Self = Self(0x0C);
    pub const W: Self = Self(0x0D);
    pub const E: Self = Self(0x0E);
    pub const R: Self = Self(0x0F);
    pub const Y: Self = Self(0x10);
    pub const T: Self = Self(0x11);
    pub const DIGIT_1: Self = Self(0x12);
    pub const DIGIT_2: Self = Self(0x13);
    pub const DIGIT_3: Self = Self(0x14);
    pub const DIGIT_4: Self = Self(0x15);
    pub const DIGIT_6: Self = Self(0x16);
    pub const DIGIT_5: Self = Self(0x17);
    pub const EQUAL: Self = Self(0x18);
    pub const DIGIT_9: Self = Self(0x19);
    pub const DIGIT_7: Self = Self(0x1A);
    pub const MINUS: Self = Self(0x1B);
    pub const DIGIT_8: Self = Self(0x1C);
    pub const DIGIT_0: Self = Self(0x1D);
    pub const RIGHT_BRACKET: Self = Self(0x1E);
    pub const O: Self = Self(0x1F);
    pub const U: Self = Self(0x20);
    pub const LEFT_BRACKET: Self = Self(0x21);
    pub const I: Self = Self(0x22);
    pub const P: Self = Self(0x23);
    pub const RETURN: Self = Self(0x24);
    pub const L: Self = Self(0x25);
    pub const J: Self = Self(0x26);
    pub const QUOTE: Self = Self(0x27);
    pub const K: Self = Self(0x28);
    pub const SEMICOLON: Self = Self(0x29);
    pub const BACKSLASH: Self = Self(0x2A);
    pub const COMMA: Self = Self(0x2B);
    pub const SLASH: Self = Self(0x2C);
    pub const N: Self = Self(0x2D);
    pub const M: Self = Self(0x2E);
    pub const PERIOD: Self = Self(0x2F);
    pub const TAB: Self = Self(0x30);
    pub const SPACE: Self = Self(0x31);
    pub const GRAVE: Self = Self(0x32);
    pub const DELETE: Self = Self(0x33);
    pub const ESCAPE: Self = Self(0x35);
    /// JIS `¥` key.
    pub const JIS_YEN: Self = Self(0x5D);
    /// JIS `_` key.
    pub const JIS_UNDERSCORE: Self = Self(0x5E);
    pub const F5: Self = Self(0x60);
    pub const F6: Self = Self(0x61);
    pub const F7: Self = Self(0x62);
    pub const F3: Self = Self(0x63);
    pub const F8: Self = Self(0x64);
    pub const F9: Self = Self(0x65);
    pub const F11: Self = Self(0x67);
    pub const F10: Self = Self(0x6D);
    pub const F12: Self = Self(0x6F);
    pub const F13: Self = Self(0x69);
    pub const F14: Self = Self(0x6B);
    pub const F15: Self = Self(0x71);
    pub const HOME: Self = Self(0x73);
    pub const PAGE_UP: Self = Self(0x74);
    pub const FORWARD_DELETE: Self = Self(0x75);
    pub const F4: Self = Self(0x76);
    pub const END: Self = Self(0x77);
    pub const F2: Self = Self(0x78);
    pub const PAGE_DOWN: Self = Self(0x79);
    pub const F1: Self = Self(0x7A);
    pub const LEFT_ARROW: Self = Self(0x7B);
    pub const RIGHT_ARROW: Self = Self(0x7C);
    pub const DOWN_ARROW: Self = Self(0x7D);
    pub const UP_ARROW: Self = Self(0x7E);

    /// Raw numeric value of the code.
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
