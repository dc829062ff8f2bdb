//! Conversion between key code sequences and text.
//!
//! ```text
//! [SHIFT, KEY_H, KEY_I, SPACE]  --encode-->  "Hi "
//! "Hi "                         --decode-->  [SHIFT, KEY_H, KEY_I, SPACE]
//! ```
//!
//! Both directions are all-or-nothing: the first code or character that cannot
//! be translated fails the whole call and no partial output is returned.

pub mod decode;
pub mod encode;

use thiserror::Error;
use tracing::debug;

use crate::keymap::{Alphabet, KeyCode};

pub use encode::ShiftState;

/// Errors returned by [`Codec::encode`] and [`Codec::decode`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A key code in the input sequence has no glyph in the alphabet.
    ///
    /// `position` is the index of the offending code in the input slice.
    #[error("key code {code} at position {position} has no glyph")]
    UnresolvableCode { code: KeyCode, position: usize },

    /// A character of the input text matches no glyph, even ignoring case.
    ///
    /// `position` counts characters, not bytes.
    #[error("no key code produces {ch:?} at position {position}")]
    UnmappedCharacter { ch: char, position: usize },
}

/// Encoder/decoder bound to one [`Alphabet`].
///
/// A `Codec` holds no mutable state, so a single instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Codec<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet this codec translates with.
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Converts a key code sequence into text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnresolvableCode`] for the first code that needs
    /// a glyph and has none.
    pub fn encode(&self, codes: &[KeyCode]) -> Result<String, CodecError> {
        encode::encode(self.alphabet, codes).map_err(|e| {
            debug!(error = %e, len = codes.len(), "encode failed");
            e
        })
    }

    /// Converts text into the key code sequence that would type it.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnmappedCharacter`] for the first character with
    /// no matching glyph.
    pub fn decode(&self, text: &str) -> Result<Vec<KeyCode>, CodecError> {
        decode::decode(self.alphabet, text).map_err(|e| {
            debug!(error = %e, "decode failed");
            e
        })
    }
}

impl Codec<'static> {
    /// A codec over [`Alphabet::builtin`].
    pub fn builtin() -> Self {
        Self::new(Alphabet::builtin())
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}
