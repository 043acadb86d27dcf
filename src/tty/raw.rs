//! Raw mode
//!
//! [`RawMode`] captures the terminal attributes before switching the terminal
//! into raw mode and puts them back when dropped. Drop also runs while
//! unwinding from a panic, so every exit path restores the terminal.

use std::os::fd::{AsFd, AsRawFd};
use std::panic;

use nix::sys::termios::{
    self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices,
    Termios,
};
use nix::{libc, unistd};

use crate::{Error, Result};

/// RAII guard for raw terminal mode
pub struct RawMode<F: AsFd> {
    fd: F,
    /// Attributes observed before raw mode was entered
    original: Termios,
}

impl<F: AsFd> RawMode<F> {
    /// Switch the terminal behind `fd` into raw mode
    ///
    /// Disables line buffering, echo, signal keys, output post-processing and
    /// software flow control. Reads return after at most `read_timeout_ds`
    /// tenths of a second, even when no byte arrived.
    pub fn enable(fd: F, read_timeout_ds: u8) -> Result<Self> {
        let original = termios::tcgetattr(&fd).map_err(Error::TerminalConfig)?;

        let mut raw = original.clone();

        // No break-to-SIGINT, no CR->NL, no parity check, no 8th-bit strip, no Ctrl-S/Ctrl-Q
        raw.input_flags.remove(
            InputFlags::BRKINT
                | InputFlags::ICRNL
                | InputFlags::INPCK
                | InputFlags::ISTRIP
                | InputFlags::IXON,
        );
        // "\n" is not translated to "\r\n" on output
        raw.output_flags.remove(OutputFlags::OPOST);
        raw.control_flags.insert(ControlFlags::CS8);
        // No echo, no canonical mode, no Ctrl-V, no Ctrl-C/Ctrl-Z
        raw.local_flags.remove(
            LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG,
        );

        // A VTIME of zero would turn every read into a busy poll
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = read_timeout_ds.max(1);

        termios::tcsetattr(&fd, SetArg::TCSAFLUSH, &raw).map_err(Error::TerminalConfig)?;
        tracing::debug!("Raw mode enabled (VTIME={})", read_timeout_ds.max(1));

        Ok(Self { fd, original })
    }

    /// The attributes that will be restored on drop
    pub fn original(&self) -> &Termios {
        &self.original
    }
}

/// Put the terminal back before a panic message is printed
///
/// The guard only restores `original` while unwinding, after the default hook
/// has already written the message into a raw-mode screen. The installed hook
/// writes `farewell` to `output`, restores `original` on `input`, then hands
/// over to the previous hook.
pub fn restore_on_panic<I, O>(input: I, output: O, original: &Termios, farewell: Vec<u8>)
where
    I: AsFd + Send + Sync + 'static,
    O: AsFd + Send + Sync + 'static,
{
    // Termios is not Sync, the plain libc struct is
    let saved = libc::termios::from(original.clone());
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = unistd::write(output.as_fd().as_raw_fd(), &farewell);
        let _ = termios::tcsetattr(&input, SetArg::TCSAFLUSH, &Termios::from(saved));
        tracing::error!("Panic: {}", info);
        previous(info);
    }));
}

impl<F: AsFd> Drop for RawMode<F> {
    fn drop(&mut self) {
        match termios::tcsetattr(&self.fd, SetArg::TCSAFLUSH, &self.original) {
            Ok(()) => tracing::debug!("Raw mode disabled"),
            Err(e) => tracing::error!("Failed to restore terminal attributes: {}", e),
        }
    }
}
