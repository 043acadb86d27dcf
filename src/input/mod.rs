//! Input Decoding Module
//!
//! Turns the raw byte stream coming from a terminal in raw mode into logical
//! key events. Navigation keys arrive as multi-byte escape sequences, for
//! example `ESC [ A` for the up arrow or `ESC [ 5 ~` for Page Up.
//!
//! # Key Events
//!
//! The set of keys is closed: every byte sequence decodes to exactly one
//! [`Key`]. Sequences the decoder does not recognize degrade to
//! [`Key::Escape`] rather than surfacing as errors.

mod decoder;

pub use decoder::KeyDecoder;

/// The escape byte that starts every terminal sequence
pub const ESC: u8 = 0x1b;

/// Map a letter to the byte its Ctrl combination produces
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}

/// Ctrl-Q, the quit key
pub const CTRL_Q: u8 = ctrl_key(b'q');

/// Logical key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A byte with no special meaning
    Printable(u8),
    /// A C0 control byte or DEL (Ctrl combinations, Enter, Tab, Backspace)
    Control(u8),

    // Cursor keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Delete,

    Escape,
}

impl Key {
    /// Classify a byte read outside of an escape sequence
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x00..=0x1f | 0x7f => Key::Control(byte),
            _ => Key::Printable(byte),
        }
    }
}
