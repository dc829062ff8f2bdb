//! # keyir
//!
//! A platform-neutral intermediate representation for key presses.
//!
//! Key presses captured on one device are recorded as a sequence of
//! [`KeyCode`]s, turned into text, carried to another device, and turned back
//! into key codes there.  Neither side needs to share the other's native
//! key-code space.
//!
//! # Architecture overview (for beginners)
//!
//! - **`keymap`** – The [`KeyCode`] constants and the [`Alphabet`], a fixed
//!   table mapping the printable subset of key codes to lower-case glyphs.
//!
//! - **`codec`** – The two conversions.  [`Codec::encode`] walks a key code
//!   sequence and builds text, tracking whether a shift key is pending.
//!   [`Codec::decode`] walks text and looks each character up in the
//!   alphabet's reverse index, inserting a shift before upper-case letters.
//!
//! - **`config`** – Optional TOML configuration for building an alphabet with
//!   extra or replacement glyphs.
//!
//! Shift is a key in its own right in a sequence, not a flag on another key:
//!
//! ```rust
//! use keyir::KeyCode;
//!
//! let codes = keyir::decode("Hi").unwrap();
//! assert_eq!(codes, vec![KeyCode::SHIFT, KeyCode::KEY_H, KeyCode::KEY_I]);
//! assert_eq!(keyir::encode(&codes).unwrap(), "Hi");
//! ```

pub mod codec;
pub mod config;
pub mod keymap;

pub use codec::{Codec, CodecError, ShiftState};
pub use config::{AlphabetConfig, ConfigError, GlyphEntry};
pub use keymap::{Alphabet, Collision, KeyCode, TieBreak};

/// Encodes `codes` with the built-in alphabet.
///
/// # Errors
///
/// Returns [`CodecError::UnresolvableCode`] for the first code with no glyph.
pub fn encode(codes: &[KeyCode]) -> Result<String, CodecError> {
    Codec::builtin().encode(codes)
}

/// Decodes `text` with the built-in alphabet.
///
/// # Errors
///
/// Returns [`CodecError::UnmappedCharacter`] for the first unmapped character.
pub fn decode(text: &str) -> Result<Vec<KeyCode>, CodecError> {
    Codec::builtin().decode(text)
}

/// Like [`encode`], for callers holding raw integers off the wire.
///
/// # Errors
///
/// See [`encode`].
///
/// # Examples
///
/// ```rust
/// assert_eq!(keyir::encode_raw(&[0x38, 0x04, 0x22]).unwrap(), "Hi");
/// ```
pub fn encode_raw(codes: &[i32]) -> Result<String, CodecError> {
    let codes: Vec<KeyCode> = codes.iter().copied().map(KeyCode::from).collect();
    encode(&codes)
}

/// Like [`decode`], returning raw integers for the wire.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_raw(text: &str) -> Result<Vec<i32>, CodecError> {
    Ok(decode(text)?.into_iter().map(i32::from).collect())
}
