use crate::{KeyCode, ModifierFlags};

/// Modifier glyphs in display order.
pub(crate) const MODIFIER_GLYPHS: [(ModifierFlags, char); 4] = [
    (ModifierFlags::CONTROL, '⌃'),
    (ModifierFlags::OPTION, '⌥'),
    (ModifierFlags::SHIFT, '⇧'),
    (ModifierFlags::COMMAND, '⌘'),
];

/// Display name for well-known keys.
pub(crate) fn static_name(key: KeyCode) -> Option<&'static str> {
    let name = match key {
        KeyCode::SECTION => "§",
        KeyCode::A => "A",
        KeyCode::B => "B",
        KeyCode::C => "C",
        KeyCode::D => "D",
        KeyCode::E => "E",
        KeyCode::F => "F",
        KeyCode::G => "G",
        KeyCode::H => "H",
        KeyCode::I => "I",
        KeyCode::J => "J",
        KeyCode::K => "K",
        KeyCode::L => "L",
        KeyCode::M => "M",
        KeyCode::N => "N",
        KeyCode::O => "O",
        KeyCode::P => "P",
        KeyCode::Q => "Q",
        KeyCode::R => "R",
        KeyCode::S => "S",
        KeyCode::T => "T",
        KeyCode::U => "U",
        KeyCode::V => "V",
        KeyCode::W => "W",
        KeyCode::X => "X",
        KeyCode::Y => "Y",
        KeyCode::Z => "Z",
        KeyCode::DIGIT_0 => "0",
        KeyCode::DIGIT_1 => "1",
        KeyCode::DIGIT_2 => "2",
        KeyCode::DIGIT_3 => "3",
        KeyCode::DIGIT_4 => "4",
        KeyCode::DIGIT_5 => "5",
        KeyCode::DIGIT_6 => "6",
        KeyCode::DIGIT_7 => "7",
        KeyCode::DIGIT_8 => "8",
        KeyCode::DIGIT_9 => "9",
        KeyCode::EQUAL => "=",
        KeyCode::MINUS => "-",
        KeyCode::RIGHT_BRACKET => "]",
        KeyCode::LEFT_BRACKET => "[",
        KeyCode::QUOTE => "'",
        KeyCode::SEMICOLON => ";",
        KeyCode::BACKSLASH => "\\",
        KeyCode::COMMA => ",",
        KeyCode::SLASH => "/",
        KeyCode::PERIOD => ".",
        KeyCode::GRAVE => "`",
        KeyCode::RETURN => "↩",
        KeyCode::TAB => "⇥",
        KeyCode::SPACE => "Space",
        KeyCode::DELETE => "⌫",
        KeyCode::ESCAPE => "⎋",
        KeyCode::F1 => "F1",
        KeyCode::F2 => "F2",
        KeyCode::F3 => "F3",
        KeyCode::F4 => "F4",
        KeyCode::F5 => "F5",
        KeyCode::F6 => "F6",
        KeyCode::F7 => "F7",
        KeyCode::F8 => "F8",
        KeyCode::F9 => "F9",
        KeyCode::F10 => "F10",
        KeyCode::F11 => "F11",
        KeyCode::F12 => "F12",
        KeyCode::HOME => "↖",
        KeyCode::END => "↘",
        KeyCode::PAGE_UP => "⇞",
        KeyCode::PAGE_DOWN => "⇟",
        KeyCode::LEFT_ARROW => "←",
        KeyCode::RIGHT_ARROW => "→",
        KeyCode::DOWN_ARROW => "↓",
        KeyCode::UP_ARROW => "↑",
        _ => return None,
    };

    Some(name)
}
