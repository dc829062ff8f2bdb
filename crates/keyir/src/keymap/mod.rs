//! Key codes and the alphabet table that gives them a textual form.
//!
//! [`KeyCode`] is the platform-neutral representation carried between
//! devices.  [`Alphabet`] maps the printable subset of those codes to glyphs.

pub mod alphabet;
pub mod keycode;

pub use alphabet::{Alphabet, Collision, TieBreak};
pub use keycode::KeyCode;
