//! Text to key codes.
//!
//! Each character is matched case-insensitively against the alphabet's reverse
//! index.  Upper-case characters are preceded by [`KeyCode::SHIFT`].

use super::CodecError;
use crate::keymap::{Alphabet, KeyCode};

pub(crate) fn decode(alphabet: &Alphabet, text: &str) -> Result<Vec<KeyCode>, CodecError> {
    let mut codes = Vec::with_capacity(text.len());

    for (position, ch) in text.chars().enumerate() {
        let code = alphabet
            .reverse(ch)
            .ok_or(CodecError::UnmappedCharacter { ch, position })?;
        if ch.is_uppercase() {
            codes.push(KeyCode::SHIFT);
        }
        codes.push(code);
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Result<Vec<KeyCode>, CodecError> {
        decode(Alphabet::builtin(), text)
    }

    #[test]
    fn test_lowercase_letter() {
        assert_eq!(dec("a").unwrap(), vec![KeyCode::KEY_A]);
    }

    #[test]
    fn test_uppercase_letter_gets_shift() {
        assert_eq!(dec("A").unwrap(), vec![KeyCode::SHIFT, KeyCode::KEY_A]);
    }

    #[test]
    fn test_empty_text() {
        assert!(dec("").unwrap().is_empty());
    }

    #[test]
    fn test_hello_world() {
        let codes = dec("Hello World").unwrap();
        assert_eq!(
            codes,
            vec![
                KeyCode::SHIFT,
                KeyCode::KEY_H,
                KeyCode::KEY_E,
                KeyCode::KEY_L,
                KeyCode::KEY_L,
                KeyCode::KEY_O,
                KeyCode::SPACE,
                KeyCode::SHIFT,
                KeyCode::KEY_W,
                KeyCode::KEY_O,
                KeyCode::KEY_R,
                KeyCode::KEY_L,
                KeyCode::KEY_D,
            ]
        );
    }

    #[test]
    fn test_emoji_is_unmapped() {
        let err = dec("hi🦀").unwrap_err();
        assert_eq!(err, CodecError::UnmappedCharacter { ch: '🦀', position: 2 });
    }

    #[test]
    fn test_position_counts_characters_not_bytes() {
        // 'é' is two bytes in UTF-8 but one character.
        let err = dec("aé!").unwrap_err();
        assert_eq!(err, CodecError::UnmappedCharacter { ch: 'é', position: 1 });
    }

    #[test]
    fn test_shifted_symbol_is_unmapped() {
        assert!(dec("?").is_err());
        assert!(dec("Hello!").is_err());
    }

    #[test]
    fn test_collision_resolves_to_main_row() {
        assert_eq!(dec("1.").unwrap(), vec![KeyCode::DIGIT_1, KeyCode::PERIOD]);
    }
}
