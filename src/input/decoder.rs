//! Key Decoder State Machine
//!
//! Decodes one key per call from a [`ByteSource`]. The decoder reads at most
//! four bytes for a key and never retries a read that timed out: if an escape
//! sequence is cut short, the result is a standalone [`Key::Escape`].
//!
//! States:
//! - Idle: waiting for the first byte of a key
//! - SawEscape: after ESC, waiting for the introducer
//! - SawIntroducer: after `ESC [`, `ESC O`, or ESC plus any other byte
//! - SawDigit: after `ESC [ <digit>`, waiting for `~`

use std::io;

use super::{Key, ESC};
use crate::core::Mode;
use crate::tty::ByteSource;

/// Decoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    SawEscape,
    SawIntroducer(u8),
    SawDigit(u8),
}

/// Outcome of feeding one read result to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Nothing arrived while idle
    NoKey,
    /// Need another byte
    Pending,
    /// A complete key
    Emit(Key),
}

/// The key decoder
#[derive(Debug)]
pub struct KeyDecoder {
    state: State,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecoder {
    /// Create a new decoder in the idle state
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Read and decode the next key
    ///
    /// Returns `Ok(None)` if no byte arrived within the source's read timeout.
    /// Once a byte has been read, exactly one key is returned.
    pub fn decode_next_key<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        mode: Mode,
    ) -> io::Result<Option<Key>> {
        loop {
            let byte = match source.read_byte() {
                Ok(byte) => byte,
                Err(e) => {
                    self.state = State::Idle;
                    return Err(e);
                },
            };

            match self.advance(byte, mode) {
                Step::NoKey => return Ok(None),
                Step::Pending => {},
                Step::Emit(key) => return Ok(Some(key)),
            }
        }
    }

    /// Feed one read result (`None` = timed out) to the state machine
    fn advance(&mut self, byte: Option<u8>, mode: Mode) -> Step {
        let step = match (self.state, byte) {
            (State::Idle, None) => Step::NoKey,
            (State::Idle, Some(ESC)) => {
                self.state = State::SawEscape;
                Step::Pending
            },
            (State::Idle, Some(b)) => Step::Emit(plain_key(b, mode)),

            // A sequence cut short by the read timeout is a lone Escape
            (_, None) => Step::Emit(Key::Escape),

            (State::SawEscape, Some(b)) => {
                self.state = State::SawIntroducer(b);
                Step::Pending
            },
            (State::SawIntroducer(b'['), Some(b)) if b.is_ascii_digit() => {
                self.state = State::SawDigit(b);
                Step::Pending
            },
            (State::SawIntroducer(b'['), Some(b)) => Step::Emit(csi_key(b)),
            (State::SawIntroducer(b'O'), Some(b)) => Step::Emit(ss3_key(b)),
            (State::SawIntroducer(intro), Some(b)) => {
                tracing::trace!("Unrecognized escape sequence: ESC {:#04x} {:#04x}", intro, b);
                Step::Emit(Key::Escape)
            },
            (State::SawDigit(digit), Some(b'~')) => Step::Emit(tilde_key(digit)),
            (State::SawDigit(digit), Some(b)) => {
                tracing::trace!("Unterminated escape sequence: ESC [ {} {:#04x}", digit as char, b);
                Step::Emit(Key::Escape)
            },
        };

        if let Step::Emit(_) = step {
            self.state = State::Idle;
        }
        step
    }
}

/// Decode a byte that is not part of an escape sequence
fn plain_key(byte: u8, mode: Mode) -> Key {
    if mode == Mode::Normal {
        match byte {
            b'h' => return Key::Left,
            b'j' => return Key::Down,
            b'k' => return Key::Up,
            b'l' => return Key::Right,
            _ => {},
        }
    }
    Key::from_byte(byte)
}

/// `ESC [ <final>`
fn csi_key(byte: u8) -> Key {
    match byte {
        b'A' => Key::Up,
        b'B' => Key::Down,
        b'C' => Key::Right,
        b'D' => Key::Left,
        b'H' => Key::Home,
        b'F' => Key::End,
        _ => {
            tracing::trace!("Unrecognized CSI final byte: {:#04x}", byte);
            Key::Escape
        },
    }
}

/// `ESC O <final>`, sent by some terminals for Home/End
fn ss3_key(byte: u8) -> Key {
    match byte {
        b'H' => Key::Home,
        b'F' => Key::End,
        _ => {
            tracing::trace!("Unrecognized SS3 final byte: {:#04x}", byte);
            Key::Escape
        },
    }
}

/// `ESC [ <digit> ~`
fn tilde_key(digit: u8) -> Key {
    match digit {
        b'1' | b'7' => Key::Home,
        b'3' => Key::Delete,
        b'4' | b'8' => Key::End,
        b'5' => Key::PageUp,
        b'6' => Key::PageDown,
        _ => {
            tracing::trace!("Unmapped key code: ESC [ {} ~", digit as char);
            Key::Escape
        },
    }
}
