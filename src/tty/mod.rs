//! Terminal handling for the controlling TTY
//!
//! This module owns everything that talks to the real terminal: entering and
//! leaving raw mode, querying the window size, and moving bytes in and out.
//! The rest of the editor only sees the [`ByteSource`] and [`FrameSink`]
//! traits, so it can be driven by scripted input in tests.

mod raw;
mod size;

use std::collections::VecDeque;
use std::io;

use nix::errno::Errno;
use nix::libc::{STDIN_FILENO, STDOUT_FILENO};
use nix::unistd::{read, write};

use crate::Result;

pub use raw::{restore_on_panic, RawMode};
pub use size::{parse_cursor_report, query_by_cursor_report, query_viewport_size, window_size_of, WindowSize};

/// A source of raw input bytes with a bounded wait
pub trait ByteSource {
    /// Read a single byte
    ///
    /// Returns `Ok(None)` if nothing arrived before the read timeout expired.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// A sink that receives complete frames
pub trait FrameSink {
    /// Write the whole frame to the terminal in one go
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;
}

/// Scripted input, used by tests and benchmarks
impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

/// Captured output, used by tests and benchmarks
impl FrameSink for Vec<u8> {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.extend_from_slice(frame);
        Ok(())
    }
}

/// The controlling terminal in raw mode
///
/// Dropping the terminal restores the attributes saved when it was opened.
pub struct Terminal {
    raw: RawMode<io::Stdin>,
}

impl Terminal {
    /// Put stdin into raw mode with the given read timeout (deciseconds)
    pub fn open(read_timeout_ds: u8) -> Result<Self> {
        let raw = RawMode::enable(io::stdin(), read_timeout_ds)?;
        Ok(Self { raw })
    }

    /// On panic, write `farewell` and leave raw mode before the message is shown
    pub fn restore_on_panic(&self, farewell: Vec<u8>) {
        restore_on_panic(io::stdin(), io::stdout(), self.raw.original(), farewell);
    }

    /// Query the window size, falling back to a cursor position report
    pub fn window_size(&mut self) -> Result<WindowSize> {
        query_viewport_size(self)
    }
}

impl ByteSource for Terminal {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match read(STDIN_FILENO, &mut buf) {
            Ok(1) => Ok(Some(buf[0])),
            Ok(_) => Ok(None),
            // VTIME expiry shows up as a zero-length read, but some platforms
            // report EAGAIN instead
            Err(Errno::EAGAIN) | Err(Errno::EINTR) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl FrameSink for Terminal {
    fn write_frame(&mut self, mut frame: &[u8]) -> io::Result<()> {
        // Bypass std's line-buffered stdout so a frame is never split at a newline
        while !frame.is_empty() {
            match write(STDOUT_FILENO, frame) {
                Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => frame = &frame[n..],
                Err(Errno::EINTR) => {},
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
