//! The alphabet table: key code to printable glyph, plus the reverse index.
//!
//! Glyphs are lower-case strings of zero or one character.  A zero-length
//! glyph marks a key that is part of the alphabet but produces no visible text
//! (keypad Enter and Clear).
//!
//! # Reverse lookups and collisions
//!
//! Several keys share a glyph: keypad `1` and main-row `1` both produce `"1"`,
//! keypad decimal and period both produce `"."`, and so on.  Turning text back
//! into key codes therefore needs a rule for picking one.  The reverse index is
//! built once, when the alphabet is constructed, and the [`TieBreak`] chosen at
//! that point decides every collision.  The same character always resolves to
//! the same key code for the lifetime of an [`Alphabet`].
//!
//! Matching uses Unicode case folding rather than plain lower-casing, so
//! characters such as `'ſ'` (long s) and `'K'` (Kelvin sign) find the `s` and
//! `k` keys.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicase::UniCase;

use super::keycode::KeyCode;

/// The built-in glyph entries, in declaration order.
///
/// The six modifier codes are deliberately absent: the encoder handles them
/// through its shift state instead of through a glyph.
pub(crate) const BUILTIN_GLYPHS: &[(KeyCode, &str)] = &[
    (KeyCode::KEY_A, "a"),
    (KeyCode::KEY_S, "s"),
    (KeyCode::KEY_D, "d"),
    (KeyCode::KEY_F, "f"),
    (KeyCode::KEY_H, "h"),
    (KeyCode::KEY_G, "g"),
    (KeyCode::KEY_Z, "z"),
    (KeyCode::KEY_X, "x"),
    (KeyCode::KEY_C, "c"),
    (KeyCode::KEY_V, "v"),
    (KeyCode::KEY_B, "b"),
    (KeyCode::KEY_Q, "q"),
    (KeyCode::KEY_W, "w"),
    (KeyCode::KEY_E, "e"),
    (KeyCode::KEY_R, "r"),
    (KeyCode::KEY_Y, "y"),
    (KeyCode::KEY_T, "t"),
    (KeyCode::DIGIT_1, "1"),
    (KeyCode::DIGIT_2, "2"),
    (KeyCode::DIGIT_3, "3"),
    (KeyCode::DIGIT_4, "4"),
    (KeyCode::DIGIT_6, "6"),
    (KeyCode::DIGIT_5, "5"),
    (KeyCode::EQUAL, "="),
    (KeyCode::DIGIT_9, "9"),
    (KeyCode::DIGIT_7, "7"),
    (KeyCode::MINUS, "-"),
    (KeyCode::DIGIT_8, "8"),
    (KeyCode::DIGIT_0, "0"),
    (KeyCode::BRACKET_RIGHT, "]"),
    (KeyCode::KEY_O, "o"),
    (KeyCode::KEY_U, "u"),
    (KeyCode::BRACKET_LEFT, "["),
    (KeyCode::KEY_I, "i"),
    (KeyCode::KEY_P, "p"),
    (KeyCode::KEY_L, "l"),
    (KeyCode::KEY_J, "j"),
    (KeyCode::QUOTE, "'"),
    (KeyCode::KEY_K, "k"),
    (KeyCode::SEMICOLON, ";"),
    (KeyCode::BACKSLASH, "\\"),
    (KeyCode::COMMA, ","),
    (KeyCode::SLASH, "/"),
    (KeyCode::KEY_N, "n"),
    (KeyCode::KEY_M, "m"),
    (KeyCode::PERIOD, "."),
    (KeyCode::GRAVE, "`"),
    (KeyCode::KEYPAD_DECIMAL, "."),
    (KeyCode::KEYPAD_MULTIPLY, "*"),
    (KeyCode::KEYPAD_PLUS, "+"),
    (KeyCode::KEYPAD_CLEAR, ""),
    (KeyCode::KEYPAD_DIVIDE, "/"),
    (KeyCode::KEYPAD_ENTER, ""),
    (KeyCode::KEYPAD_MINUS, "-"),
    (KeyCode::KEYPAD_EQUALS, "="),
    (KeyCode::KEYPAD_0, "0"),
    (KeyCode::KEYPAD_1, "1"),
    (KeyCode::KEYPAD_2, "2"),
    (KeyCode::KEYPAD_3, "3"),
    (KeyCode::KEYPAD_4, "4"),
    (KeyCode::KEYPAD_5, "5"),
    (KeyCode::KEYPAD_6, "6"),
    (KeyCode::KEYPAD_7, "7"),
    (KeyCode::KEYPAD_8, "8"),
    (KeyCode::KEYPAD_9, "9"),
    (KeyCode::TAB, "\t"),
    (KeyCode::SPACE, " "),
];

/// Rule for choosing a key code when several share a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The numerically lowest key code wins.  For the built-in table this
    /// always selects the main-row key over its keypad twin.
    #[default]
    LowestCode,
    /// The entry declared first wins.
    FirstDeclared,
}

/// A set of key codes whose glyphs are equal under case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Glyph of the chosen code.
    pub glyph: String,
    /// The colliding codes, ascending.
    pub codes: Vec<KeyCode>,
    /// The code the reverse index resolves the glyph to.
    pub chosen: KeyCode,
}

/// Immutable key code ⇄ glyph mapping.
#[derive(Debug, Clone)]
pub struct Alphabet {
    glyphs: BTreeMap<KeyCode, String>,
    reverse: HashMap<UniCase<String>, KeyCode>,
    tie_break: TieBreak,
}

impl Alphabet {
    /// Returns the process-wide built-in alphabet, resolving collisions by
    /// [`TieBreak::LowestCode`].
    pub fn builtin() -> &'static Alphabet {
        static BUILTIN: OnceLock<Alphabet> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Alphabet::from_entries(
                BUILTIN_GLYPHS
                    .iter()
                    .map(|&(code, glyph)| (code, glyph.to_string())),
                TieBreak::default(),
            )
        })
    }

    /// Builds an alphabet from entries given in declaration order.
    ///
    /// Callers must not repeat a code; [`crate::config`] guarantees this.
    pub(crate) fn from_entries<I>(entries: I, tie_break: TieBreak) -> Self
    where
        I: IntoIterator<Item = (KeyCode, String)>,
    {
        let mut glyphs = BTreeMap::new();
        let mut reverse: HashMap<UniCase<String>, KeyCode> = HashMap::new();

        for (code, glyph) in entries {
            if !glyph.is_empty() {
                match reverse.entry(fold(&glyph)) {
                    hash_map::Entry::Vacant(slot) => {
                        slot.insert(code);
                    }
                    hash_map::Entry::Occupied(mut slot) => {
                        if tie_break == TieBreak::LowestCode && code < *slot.get() {
                            slot.insert(code);
                        }
                    }
                }
            }
            glyphs.insert(code, glyph);
        }

        let alphabet = Self {
            glyphs,
            reverse,
            tie_break,
        };
        debug!(
            entries = alphabet.len(),
            collisions = alphabet.collisions().len(),
            ?tie_break,
            "alphabet built"
        );
        alphabet
    }

    /// Looks up the glyph for `code`.
    ///
    /// Returns `None` for every code without an entry, including all six
    /// modifiers and named keys such as the function keys.
    pub fn lookup(&self, code: KeyCode) -> Option<&str> {
        self.glyphs.get(&code).map(String::as_str)
    }

    /// Finds the key code whose glyph equals `ch`, ignoring case.
    pub fn reverse(&self, ch: char) -> Option<KeyCode> {
        self.reverse.get(&UniCase::unicode(ch.to_string())).copied()
    }

    /// The collision rule this alphabet was built with.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Lists every glyph claimed by more than one key code, ordered by glyph.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut by_chosen: BTreeMap<KeyCode, Vec<KeyCode>> = BTreeMap::new();
        for (&code, glyph) in &self.glyphs {
            if let Some(&chosen) = self.reverse.get(&fold(glyph)) {
                by_chosen.entry(chosen).or_default().push(code);
            }
        }

        let mut collisions: Vec<Collision> = by_chosen
            .into_iter()
            .filter(|(_, codes)| codes.len() > 1)
            .map(|(chosen, codes)| Collision {
                glyph: self.glyphs.get(&chosen).cloned().unwrap_or_default(),
                codes,
                chosen,
            })
            .collect();
        collisions.sort_by(|a, b| a.glyph.cmp(&b.glyph));
        collisions
    }

    /// Number of entries, including those with an empty glyph.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterates over all entries in ascending key code order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.glyphs.iter(),
        }
    }
}

/// Iterator returned by [`Alphabet::iter`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, KeyCode, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (KeyCode, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&code, glyph)| (code, glyph.as_str()))
    }
}

/// Reverse index key: compares and hashes by Unicode case folding.
fn fold(glyph: &str) -> UniCase<String> {
    UniCase::unicode(glyph.to_string())
}
