//! TOML configuration for building a custom [`Alphabet`].
//!
//! The built-in alphabet covers a US ANSI layout.  A configuration file can
//! add glyphs for further key codes, replace built-in glyphs, and choose the
//! collision rule used when decoding:
//!
//! ```toml
//! tie_break = "first_declared"
//!
//! [[glyphs]]
//! code = 0x24      # ENTER
//! glyph = "\n"
//!
//! [[glyphs]]
//! code = 0x2A      # BACKSLASH on a JIS keyboard
//! glyph = "¥"
//! ```
//!
//! Every field is optional.  An empty file produces an alphabet identical to
//! [`Alphabet::builtin`].
//!
//! The six modifier codes cannot be given glyphs: the encoder's shift handling
//! depends on them having none.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::keymap::alphabet::BUILTIN_GLYPHS;
use crate::keymap::{Alphabet, KeyCode, TieBreak};

/// Error type for loading and applying an alphabet configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A glyph is longer than one character.
    #[error("glyph {glyph:?} for key code {code} must be at most one character")]
    InvalidGlyph { code: KeyCode, glyph: String },

    /// A glyph is not in lower case.  Upper case is produced by a shift key.
    #[error("glyph {glyph:?} for key code {code} must be lower-case")]
    UppercaseGlyph { code: KeyCode, glyph: String },

    /// A glyph was given for a modifier key.
    #[error("modifier key code {0} cannot have a glyph")]
    ReservedModifier(KeyCode),
}

/// Alphabet configuration as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// Collision rule for the reverse index.
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Glyphs to add or replace, applied in order.
    #[serde(default)]
    pub glyphs: Vec<GlyphEntry>,
}

/// One configured glyph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlyphEntry {
    pub code: i32,
    pub glyph: String,
}

impl AlphabetConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed or has fields of
    /// the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            glyphs = config.glyphs.len(),
            "alphabet config loaded"
        );
        Ok(config)
    }
}

impl Alphabet {
    /// Builds an alphabet from the built-in table with `config` applied.
    ///
    /// A configured glyph for a code already in the table replaces it in
    /// place, keeping its declaration position; new codes are appended.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGlyph`], [`ConfigError::UppercaseGlyph`]
    /// or [`ConfigError::ReservedModifier`] for the first invalid entry.
    pub fn from_config(config: &AlphabetConfig) -> Result<Alphabet, ConfigError> {
        let mut entries: Vec<(KeyCode, String)> = BUILTIN_GLYPHS
            .iter()
            .map(|&(code, glyph)| (code, glyph.to_string()))
            .collect();

        for entry in &config.glyphs {
            let code = KeyCode(entry.code);
            if code.is_modifier() {
                return Err(ConfigError::ReservedModifier(code));
            }
            if entry.glyph.chars().count() > 1 {
                return Err(ConfigError::InvalidGlyph {
                    code,
                    glyph: entry.glyph.clone(),
                });
            }
            if entry.glyph.to_lowercase() != entry.glyph {
                return Err(ConfigError::UppercaseGlyph {
                    code,
                    glyph: entry.glyph.clone(),
                });
            }

            match entries.iter_mut().find(|(c, _)| *c == code) {
                Some((_, glyph)) => {
                    if *glyph != entry.glyph {
                        warn!(%code, old = ?glyph, new = ?entry.glyph, "replacing built-in glyph");
                    }
                    *glyph = entry.glyph.clone();
                }
                None => entries.push((code, entry.glyph.clone())),
            }
        }

        Ok(Alphabet::from_entries(entries, config.tie_break))
    }
}
