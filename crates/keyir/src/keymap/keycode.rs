//! Platform-neutral key codes.
//!
//! A [`KeyCode`] identifies a physical key position.  The numeric values follow
//! the ANSI key positions of the macOS virtual keycode space (`kVK_ANSI_*` in
//! HIToolbox `Events.h`), with one exception: [`KeyCode::ALT`] uses `0x383`,
//! a value outside that space, so that it never collides with a real key.
//!
//! # Why integers and not an enum? (for beginners)
//!
//! Key code sequences arrive from other devices.  A sender may well transmit a
//! code this build has never heard of, and the codec has to report that as an
//! error naming the offending value rather than refusing to represent it at
//! all.  A newtype over `i32` keeps every incoming value representable while
//! the associated constants give the well-known keys readable names.
//!
//! The constant values are a wire contract: they must never change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A key code in the platform-neutral enumeration.
///
/// Serializes as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub i32);

impl KeyCode {
    // Modifiers
    pub const CONTROL: KeyCode = KeyCode(0x3B);
    pub const RIGHT_SHIFT: KeyCode = KeyCode(0x3C);
    pub const RIGHT_CONTROL: KeyCode = KeyCode(0x3E);
    pub const COMMAND: KeyCode = KeyCode(0x37);
    pub const SHIFT: KeyCode = KeyCode(0x38);
    pub const ALT: KeyCode = KeyCode(0x383);

    // Letters
    pub const KEY_A: KeyCode = KeyCode(0x00);
    pub const KEY_S: KeyCode = KeyCode(0x01);
    pub const KEY_D: KeyCode = KeyCode(0x02);
    pub const KEY_F: KeyCode = KeyCode(0x03);
    pub const KEY_H: KeyCode = KeyCode(0x04);
    pub const KEY_G: KeyCode = KeyCode(0x05);
    pub const KEY_Z: KeyCode = KeyCode(0x06);
    pub const KEY_X: KeyCode = KeyCode(0x07);
    pub const KEY_C: KeyCode = KeyCode(0x08);
    pub const KEY_V: KeyCode = KeyCode(0x09);
    pub const KEY_B: KeyCode = KeyCode(0x0B);
    pub const KEY_Q: KeyCode = KeyCode(0x0C);
    pub const KEY_W: KeyCode = KeyCode(0x0D);
    pub const KEY_E: KeyCode = KeyCode(0x0E);
    pub const KEY_R: KeyCode = KeyCode(0x0F);
    pub const KEY_Y: KeyCode = KeyCode(0x10);
    pub const KEY_T: KeyCode = KeyCode(0x11);
    pub const KEY_O: KeyCode = KeyCode(0x1F);
    pub const KEY_U: KeyCode = KeyCode(0x20);
    pub const KEY_I: KeyCode = KeyCode(0x22);
    pub const KEY_P: KeyCode = KeyCode(0x23);
    pub const KEY_L: KeyCode = KeyCode(0x25);
    pub const KEY_J: KeyCode = KeyCode(0x26);
    pub const KEY_K: KeyCode = KeyCode(0x28);
    pub const KEY_N: KeyCode = KeyCode(0x2D);
    pub const KEY_M: KeyCode = KeyCode(0x2E);

    // Main-row digits
    pub const DIGIT_1: KeyCode = KeyCode(0x12);
    pub const DIGIT_2: KeyCode = KeyCode(0x13);
    pub const DIGIT_3: KeyCode = KeyCode(0x14);
    pub const DIGIT_4: KeyCode = KeyCode(0x15);
    pub const DIGIT_6: KeyCode = KeyCode(0x16);
    pub const DIGIT_5: KeyCode = KeyCode(0x17);
    pub const DIGIT_9: KeyCode = KeyCode(0x19);
    pub const DIGIT_7: KeyCode = KeyCode(0x1A);
    pub const DIGIT_8: KeyCode = KeyCode(0x1C);
    pub const DIGIT_0: KeyCode = KeyCode(0x1D);

    // Punctuation
    pub const EQUAL: KeyCode = KeyCode(0x18);
    pub const MINUS: KeyCode = KeyCode(0x1B);
    pub const BRACKET_RIGHT: KeyCode = KeyCode(0x1E);
    pub const BRACKET_LEFT: KeyCode = KeyCode(0x21);
    pub const QUOTE: KeyCode = KeyCode(0x27);
    pub const SEMICOLON: KeyCode = KeyCode(0x29);
    pub const BACKSLASH: KeyCode = KeyCode(0x2A);
    pub const COMMA: KeyCode = KeyCode(0x2B);
    pub const SLASH: KeyCode = KeyCode(0x2C);
    pub const PERIOD: KeyCode = KeyCode(0x2F);
    pub const GRAVE: KeyCode = KeyCode(0x32);

    // Numeric keypad
    pub const KEYPAD_DECIMAL: KeyCode = KeyCode(0x41);
    pub const KEYPAD_MULTIPLY: KeyCode = KeyCode(0x43);
    pub const KEYPAD_PLUS: KeyCode = KeyCode(0x45);
    pub const KEYPAD_CLEAR: KeyCode = KeyCode(0x47);
    pub const KEYPAD_DIVIDE: KeyCode = KeyCode(0x4B);
    pub const KEYPAD_ENTER: KeyCode = KeyCode(0x4C);
    pub const KEYPAD_MINUS: KeyCode = KeyCode(0x4E);
    pub const KEYPAD_EQUALS: KeyCode = KeyCode(0x51);
    pub const KEYPAD_0: KeyCode = KeyCode(0x52);
    pub const KEYPAD_1: KeyCode = KeyCode(0x53);
    pub const KEYPAD_2: KeyCode = KeyCode(0x54);
    pub const KEYPAD_3: KeyCode = KeyCode(0x55);
    pub const KEYPAD_4: KeyCode = KeyCode(0x56);
    pub const KEYPAD_5: KeyCode = KeyCode(0x57);
    pub const KEYPAD_6: KeyCode = KeyCode(0x58);
    pub const KEYPAD_7: KeyCode = KeyCode(0x59);
    pub const KEYPAD_8: KeyCode = KeyCode(0x5B);
    pub const KEYPAD_9: KeyCode = KeyCode(0x5C);

    // Control and editing keys
    pub const ENTER: KeyCode = KeyCode(0x24);
    pub const TAB: KeyCode = KeyCode(0x30);
    pub const SPACE: KeyCode = KeyCode(0x31);
    pub const DELETE: KeyCode = KeyCode(0x33);
    pub const ESCAPE: KeyCode = KeyCode(0x35);
    pub const CAPS_LOCK: KeyCode = KeyCode(0x39);
    pub const OPTION: KeyCode = KeyCode(0x3A);
    pub const RIGHT_OPTION: KeyCode = KeyCode(0x3D);
    pub const FUNCTION: KeyCode = KeyCode(0x3F);

    // Function keys
    pub const F1: KeyCode = KeyCode(0x7A);
    pub const F2: KeyCode = KeyCode(0x78);
    pub const F3: KeyCode = KeyCode(0x63);
    pub const F4: KeyCode = KeyCode(0x76);
    pub const F5: KeyCode = KeyCode(0x60);
    pub const F6: KeyCode = KeyCode(0x61);
    pub const F7: KeyCode = KeyCode(0x62);
    pub const F8: KeyCode = KeyCode(0x64);
    pub const F9: KeyCode = KeyCode(0x65);
    pub const F10: KeyCode = KeyCode(0x6D);
    pub const F11: KeyCode = KeyCode(0x67);
    pub const F12: KeyCode = KeyCode(0x6F);
    pub const F13: KeyCode = KeyCode(0x69);
    pub const F14: KeyCode = KeyCode(0x6B);
    pub const F15: KeyCode = KeyCode(0x71);
    pub const F16: KeyCode = KeyCode(0x6A);
    pub const F17: KeyCode = KeyCode(0x40);
    pub const F18: KeyCode = KeyCode(0x4F);
    pub const F19: KeyCode = KeyCode(0x50);
    pub const F20: KeyCode = KeyCode(0x5A);

    // Media
    pub const VOLUME_UP: KeyCode = KeyCode(0x48);
    pub const VOLUME_DOWN: KeyCode = KeyCode(0x49);
    pub const MUTE: KeyCode = KeyCode(0x4A);

    // Navigation
    pub const HELP: KeyCode = KeyCode(0x72);
    pub const HOME: KeyCode = KeyCode(0x73);
    pub const PAGE_UP: KeyCode = KeyCode(0x74);
    pub const FORWARD_DELETE: KeyCode = KeyCode(0x75);
    pub const END: KeyCode = KeyCode(0x77);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x79);
    pub const ARROW_LEFT: KeyCode = KeyCode(0x7B);
    pub const ARROW_RIGHT: KeyCode = KeyCode(0x7C);
    pub const ARROW_DOWN: KeyCode = KeyCode(0x7D);
    pub const ARROW_UP: KeyCode = KeyCode(0x7E);

    /// Every named key code, modifiers first.
    pub const NAMED: &'static [KeyCode] = &[
        KeyCode::CONTROL,
        KeyCode::RIGHT_SHIFT,
        KeyCode::RIGHT_CONTROL,
        KeyCode::COMMAND,
        KeyCode::SHIFT,
        KeyCode::ALT,
        KeyCode::KEY_A,
        KeyCode::KEY_S,
        KeyCode::KEY_D,
        KeyCode::KEY_F,
        KeyCode::KEY_H,
        KeyCode::KEY_G,
        KeyCode::KEY_Z,
        KeyCode::KEY_X,
        KeyCode::KEY_C,
        KeyCode::KEY_V,
        KeyCode::KEY_B,
        KeyCode::KEY_Q,
        KeyCode::KEY_W,
        KeyCode::KEY_E,
        KeyCode::KEY_R,
        KeyCode::KEY_Y,
        KeyCode::KEY_T,
        KeyCode::KEY_O,
        KeyCode::KEY_U,
        KeyCode::KEY_I,
        KeyCode::KEY_P,
        KeyCode::KEY_L,
        KeyCode::KEY_J,
        KeyCode::KEY_K,
        KeyCode::KEY_N,
        KeyCode::KEY_M,
        KeyCode::DIGIT_1,
        KeyCode::DIGIT_2,
        KeyCode::DIGIT_3,
        KeyCode::DIGIT_4,
        KeyCode::DIGIT_6,
        KeyCode::DIGIT_5,
        KeyCode::DIGIT_9,
        KeyCode::DIGIT_7,
        KeyCode::DIGIT_8,
        KeyCode::DIGIT_0,
        KeyCode::EQUAL,
        KeyCode::MINUS,
        KeyCode::BRACKET_RIGHT,
        KeyCode::BRACKET_LEFT,
        KeyCode::QUOTE,
        KeyCode::SEMICOLON,
        KeyCode::BACKSLASH,
        KeyCode::COMMA,
        KeyCode::SLASH,
        KeyCode::PERIOD,
        KeyCode::GRAVE,
        KeyCode::KEYPAD_DECIMAL,
        KeyCode::KEYPAD_MULTIPLY,
        KeyCode::KEYPAD_PLUS,
        KeyCode::KEYPAD_CLEAR,
        KeyCode::KEYPAD_DIVIDE,
        KeyCode::KEYPAD_ENTER,
        KeyCode::KEYPAD_MINUS,
        KeyCode::KEYPAD_EQUALS,
        KeyCode::KEYPAD_0,
        KeyCode::KEYPAD_1,
        KeyCode::KEYPAD_2,
        KeyCode::KEYPAD_3,
        KeyCode::KEYPAD_4,
        KeyCode::KEYPAD_5,
        KeyCode::KEYPAD_6,
        KeyCode::KEYPAD_7,
        KeyCode::KEYPAD_8,
        KeyCode::KEYPAD_9,
        KeyCode::ENTER,
        KeyCode::TAB,
        KeyCode::SPACE,
        KeyCode::DELETE,
        KeyCode::ESCAPE,
        KeyCode::CAPS_LOCK,
        KeyCode::OPTION,
        KeyCode::RIGHT_OPTION,
        KeyCode::FUNCTION,
        KeyCode::F1,
        KeyCode::F2,
        KeyCode::F3,
        KeyCode::F4,
        KeyCode::F5,
        KeyCode::F6,
        KeyCode::F7,
        KeyCode::F8,
        KeyCode::F9,
        KeyCode::F10,
        KeyCode::F11,
        KeyCode::F12,
        KeyCode::F13,
        KeyCode::F14,
        KeyCode::F15,
        KeyCode::F16,
        KeyCode::F17,
        KeyCode::F18,
        KeyCode::F19,
        KeyCode::F20,
        KeyCode::VOLUME_UP,
        KeyCode::VOLUME_DOWN,
        KeyCode::MUTE,
        KeyCode::HELP,
        KeyCode::HOME,
        KeyCode::PAGE_UP,
        KeyCode::FORWARD_DELETE,
        KeyCode::END,
        KeyCode::PAGE_DOWN,
        KeyCode::ARROW_LEFT,
        KeyCode::ARROW_RIGHT,
        KeyCode::ARROW_DOWN,
        KeyCode::ARROW_UP,
    ];

    /// Returns the raw integer value.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns `true` for Shift and Right-Shift.
    pub fn is_shift(self) -> bool {
        matches!(self, KeyCode::SHIFT | KeyCode::RIGHT_SHIFT)
    }

    /// Returns `true` for the modifiers that have no textual effect and are
    /// silently dropped by the encoder: Alt, Control, Right-Control, Command.
    pub fn is_dropped_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::ALT | KeyCode::CONTROL | KeyCode::RIGHT_CONTROL | KeyCode::COMMAND
        )
    }

    /// Returns `true` for any of the six modifiers the encoder special-cases.
    pub fn is_modifier(self) -> bool {
        self.is_shift() || self.is_dropped_modifier()
    }

    /// Returns the constant name of this code, or `None` if it is not one of
    /// the [`KeyCode::NAMED`] codes.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            KeyCode::CONTROL => "CONTROL",
            KeyCode::RIGHT_SHIFT => "RIGHT_SHIFT",
            KeyCode::RIGHT_CONTROL => "RIGHT_CONTROL",
            KeyCode::COMMAND => "COMMAND",
            KeyCode::SHIFT => "SHIFT",
            KeyCode::ALT => "ALT",
            KeyCode::KEY_A => "KEY_A",
            KeyCode::KEY_S => "KEY_S",
            KeyCode::KEY_D => "KEY_D",
            KeyCode::KEY_F => "KEY_F",
            KeyCode::KEY_H => "KEY_H",
            KeyCode::KEY_G => "KEY_G",
            KeyCode::KEY_Z => "KEY_Z",
            KeyCode::KEY_X => "KEY_X",
            KeyCode::KEY_C => "KEY_C",
            KeyCode::KEY_V => "KEY_V",
            KeyCode::KEY_B => "KEY_B",
            KeyCode::KEY_Q => "KEY_Q",
            KeyCode::KEY_W => "KEY_W",
            KeyCode::KEY_E => "KEY_E",
            KeyCode::KEY_R => "KEY_R",
            KeyCode::KEY_Y => "KEY_Y",
            KeyCode::KEY_T => "KEY_T",
            KeyCode::KEY_O => "KEY_O",
            KeyCode::KEY_U => "KEY_U",
            KeyCode::KEY_I => "KEY_I",
            KeyCode::KEY_P => "KEY_P",
            KeyCode::KEY_L => "KEY_L",
            KeyCode::KEY_J => "KEY_J",
            KeyCode::KEY_K => "KEY_K",
            KeyCode::KEY_N => "KEY_N",
            KeyCode::KEY_M => "KEY_M",
            KeyCode::DIGIT_1 => "DIGIT_1",
            KeyCode::DIGIT_2 => "DIGIT_2",
            KeyCode::DIGIT_3 => "DIGIT_3",
            KeyCode::DIGIT_4 => "DIGIT_4",
            KeyCode::DIGIT_6 => "DIGIT_6",
            KeyCode::DIGIT_5 => "DIGIT_5",
            KeyCode::DIGIT_9 => "DIGIT_9",
            KeyCode::DIGIT_7 => "DIGIT_7",
            KeyCode::DIGIT_8 => "DIGIT_8",
            KeyCode::DIGIT_0 => "DIGIT_0",
            KeyCode::EQUAL => "EQUAL",
            KeyCode::MINUS => "MINUS",
            KeyCode::BRACKET_RIGHT => "BRACKET_RIGHT",
            KeyCode::BRACKET_LEFT => "BRACKET_LEFT",
            KeyCode::QUOTE => "QUOTE",
            KeyCode::SEMICOLON => "SEMICOLON",
            KeyCode::BACKSLASH => "BACKSLASH",
            KeyCode::COMMA => "COMMA",
            KeyCode::SLASH => "SLASH",
            KeyCode::PERIOD => "PERIOD",
            KeyCode::GRAVE => "GRAVE",
            KeyCode::KEYPAD_DECIMAL => "KEYPAD_DECIMAL",
            KeyCode::KEYPAD_MULTIPLY => "KEYPAD_MULTIPLY",
            KeyCode::KEYPAD_PLUS => "KEYPAD_PLUS",
            KeyCode::KEYPAD_CLEAR => "KEYPAD_CLEAR",
            KeyCode::KEYPAD_DIVIDE => "KEYPAD_DIVIDE",
            KeyCode::KEYPAD_ENTER => "KEYPAD_ENTER",
            KeyCode::KEYPAD_MINUS => "KEYPAD_MINUS",
            KeyCode::KEYPAD_EQUALS => "KEYPAD_EQUALS",
            KeyCode::KEYPAD_0 => "KEYPAD_0",
            KeyCode::KEYPAD_1 => "KEYPAD_1",
            KeyCode::KEYPAD_2 => "KEYPAD_2",
            KeyCode::KEYPAD_3 => "KEYPAD_3",
            KeyCode::KEYPAD_4 => "KEYPAD_4",
            KeyCode::KEYPAD_5 => "KEYPAD_5",
            KeyCode::KEYPAD_6 => "KEYPAD_6",
            KeyCode::KEYPAD_7 => "KEYPAD_7",
            KeyCode::KEYPAD_8 => "KEYPAD_8",
            KeyCode::KEYPAD_9 => "KEYPAD_9",
            KeyCode::ENTER => "ENTER",
            KeyCode::TAB => "TAB",
            KeyCode::SPACE => "SPACE",
            KeyCode::DELETE => "DELETE",
            KeyCode::ESCAPE => "ESCAPE",
            KeyCode::CAPS_LOCK => "CAPS_LOCK",
            KeyCode::OPTION => "OPTION",
            KeyCode::RIGHT_OPTION => "RIGHT_OPTION",
            KeyCode::FUNCTION => "FUNCTION",
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
            KeyCode::F13 => "F13",
            KeyCode::F14 => "F14",
            KeyCode::F15 => "F15",
            KeyCode::F16 => "F16",
            KeyCode::F17 => "F17",
            KeyCode::F18 => "F18",
            KeyCode::F19 => "F19",
            KeyCode::F20 => "F20",
            KeyCode::VOLUME_UP => "VOLUME_UP",
            KeyCode::VOLUME_DOWN => "VOLUME_DOWN",
            KeyCode::MUTE => "MUTE",
            KeyCode::HELP => "HELP",
            KeyCode::HOME => "HOME",
            KeyCode::PAGE_UP => "PAGE_UP",
            KeyCode::FORWARD_DELETE => "FORWARD_DELETE",
            KeyCode::END => "END",
            KeyCode::PAGE_DOWN => "PAGE_DOWN",
            KeyCode::ARROW_LEFT => "ARROW_LEFT",
            KeyCode::ARROW_RIGHT => "ARROW_RIGHT",
            KeyCode::ARROW_DOWN => "ARROW_DOWN",
            KeyCode::ARROW_UP => "ARROW_UP",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i32> for KeyCode {
    fn from(value: i32) -> Self {
        KeyCode(value)
    }
}

impl From<KeyCode> for i32 {
    fn from(code: KeyCode) -> Self {
        code.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} (0x{:02X})", self.0),
            None => write!(f, "0x{:02X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_named_codes_are_unique() {
        let unique: HashSet<KeyCode> = KeyCode::NAMED.iter().copied().collect();
        assert_eq!(unique.len(), KeyCode::NAMED.len(), "duplicate value in NAMED");
    }

    #[test]
    fn test_every_named_code_has_a_name() {
        for &code in KeyCode::NAMED {
            assert!(code.name().is_some(), "0x{:02X} should have a name", code.0);
        }
    }

    #[test]
    fn test_unnamed_code_has_no_name() {
        assert_eq!(KeyCode(0x0A).name(), None);
        assert_eq!(KeyCode(-1).name(), None);
    }

    #[test]
    fn test_wire_values_are_stable() {
        assert_eq!(KeyCode::KEY_A.as_i32(), 0x00);
        assert_eq!(KeyCode::KEY_M.as_i32(), 0x2E);
        assert_eq!(KeyCode::SHIFT.as_i32(), 0x38);
        assert_eq!(KeyCode::RIGHT_SHIFT.as_i32(), 0x3C);
        assert_eq!(KeyCode::CONTROL.as_i32(), 0x3B);
        assert_eq!(KeyCode::RIGHT_CONTROL.as_i32(), 0x3E);
        assert_eq!(KeyCode::COMMAND.as_i32(), 0x37);
        assert_eq!(KeyCode::ALT.as_i32(), 0x383);
        assert_eq!(KeyCode::SPACE.as_i32(), 0x31);
        assert_eq!(KeyCode::KEYPAD_9.as_i32(), 0x5C);
        assert_eq!(KeyCode::ARROW_UP.as_i32(), 0x7E);
    }

    #[test]
    fn test_modifier_classification() {
        assert!(KeyCode::SHIFT.is_shift());
        assert!(KeyCode::RIGHT_SHIFT.is_shift());
        for m in [KeyCode::ALT, KeyCode::CONTROL, KeyCode::RIGHT_CONTROL, KeyCode::COMMAND] {
            assert!(m.is_dropped_modifier(), "{m} should be dropped");
            assert!(!m.is_shift(), "{m} is not a shift key");
        }
        // Option is a modifier on the keyboard, but the encoder does not special-case it.
        for k in [KeyCode::KEY_A, KeyCode::OPTION, KeyCode::RIGHT_OPTION, KeyCode::CAPS_LOCK] {
            assert!(!k.is_modifier(), "{k} should not be treated as a modifier");
        }
    }

    #[test]
    fn test_display_includes_name_and_hex() {
        assert_eq!(KeyCode::SHIFT.to_string(), "SHIFT (0x38)");
        assert_eq!(KeyCode(0x999).to_string(), "0x999");
    }

    #[test]
    fn test_i32_conversions() {
        let code: KeyCode = 0x31.into();
        assert_eq!(code, KeyCode::SPACE);
        assert_eq!(i32::from(KeyCode::TAB), 0x30);
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&vec![KeyCode::SHIFT, KeyCode::KEY_H]).unwrap();
        assert_eq!(json, "[56,4]");
        let back: Vec<KeyCode> = serde_json::from_str("[56,4]").unwrap();
        assert_eq!(back, vec![KeyCode::SHIFT, KeyCode::KEY_H]);
    }
}
