//! Key codes to text.
//!
//! The encoder is a two-state automaton:
//!
//! ```text
//!            SHIFT / RIGHT_SHIFT
//!   Idle ------------------------> Pending
//!    ^                               |
//!    +--- any code with a glyph -----+   (glyph emitted upper-cased)
//! ```
//!
//! Rules are checked in this order, first match wins:
//!
//! 1. `Pending`: the code's glyph is emitted upper-cased and the state returns
//!    to `Idle`.  The code must have a glyph, so a modifier arriving while a
//!    shift is pending (including a second shift) is an error.
//! 2. Shift or Right-Shift: move to `Pending`, emit nothing.
//! 3. Alt, Control, Right-Control, Command: dropped.
//! 4. Anything else: the glyph is emitted unchanged.
//!
//! A shift still pending at the end of the sequence produces nothing.

use tracing::trace;

use super::CodecError;
use crate::keymap::{Alphabet, KeyCode};

/// Shift state carried between consecutive codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftState {
    #[default]
    Idle,
    /// A shift key was seen; the next glyph is upper-cased.
    Pending,
}

impl ShiftState {
    /// Applies one code, appending any output to `out`.
    ///
    /// Returns the next state, or `None` if the code needed a glyph and the
    /// alphabet has none for it.
    pub fn step(self, code: KeyCode, alphabet: &Alphabet, out: &mut String) -> Option<ShiftState> {
        match self {
            ShiftState::Pending => {
                let glyph = alphabet.lookup(code)?;
                out.push_str(&glyph.to_uppercase());
                Some(ShiftState::Idle)
            }
            ShiftState::Idle if code.is_shift() => Some(ShiftState::Pending),
            ShiftState::Idle if code.is_dropped_modifier() => {
                trace!(%code, "modifier dropped");
                Some(ShiftState::Idle)
            }
            ShiftState::Idle => {
                out.push_str(alphabet.lookup(code)?);
                Some(ShiftState::Idle)
            }
        }
    }
}

pub(crate) fn encode(alphabet: &Alphabet, codes: &[KeyCode]) -> Result<String, CodecError> {
    let mut out = String::with_capacity(codes.len());
    let mut state = ShiftState::Idle;

    for (position, &code) in codes.iter().enumerate() {
        state = state
            .step(code, alphabet, &mut out)
            .ok_or(CodecError::UnresolvableCode { code, position })?;
    }

    if state == ShiftState::Pending {
        trace!("trailing shift ignored");
    }
    Ok(out)
}
