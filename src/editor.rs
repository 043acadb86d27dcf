//! Editor main loop
//!
//! Maps decoded keys to commands on the session and drives the
//! render → read → decode → dispatch cycle. The loop never blocks for longer
//! than the terminal's read timeout, and only repaints after a key changed
//! something.

use crate::core::{Direction, Mode, Session, Viewport};
use crate::input::{Key, KeyDecoder, CTRL_Q};
use crate::renderer::{clear_screen, render_frame, RenderOptions};
use crate::tty::{ByteSource, FrameSink, WindowSize};
use crate::Result;

/// What the loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Continue,
    Quit,
}

/// Apply one key to the session
pub fn dispatch(session: &mut Session, key: Key) -> Command {
    match key {
        Key::Control(CTRL_Q) => return Command::Quit,

        Key::Home => session.cursor.carriage_return(),
        Key::End => {
            // End of the visible width, but never past the end of the line
            let viewport = &session.viewport;
            let end = viewport.col_offset + viewport.cols.saturating_sub(1);
            session.cursor.col = end.min(session.document.line_len(session.cursor.row));
        },

        Key::PageUp | Key::PageDown => {
            let direction = if key == Key::PageUp {
                Direction::Up
            } else {
                Direction::Down
            };
            for _ in 0..session.viewport.rows {
                session.move_cursor(direction);
            }
        },

        Key::Up => session.move_cursor(Direction::Up),
        Key::Down => session.move_cursor(Direction::Down),
        Key::Left => session.move_cursor(Direction::Left),
        Key::Right => session.move_cursor(Direction::Right),

        Key::Printable(b'i') if session.mode == Mode::Normal => session.set_mode(Mode::Insert),
        Key::Escape if session.mode == Mode::Insert => session.set_mode(Mode::Normal),

        _ => {},
    }
    Command::Continue
}

/// Viewport for a window, leaving room for the status line if enabled
pub fn viewport_for(size: WindowSize, options: &RenderOptions) -> Viewport {
    let reserved = usize::from(options.status_line);
    Viewport::new(
        usize::from(size.rows).saturating_sub(reserved),
        usize::from(size.cols),
    )
}

/// The editor: a session plus the machinery to drive it
#[derive(Debug)]
pub struct Editor {
    session: Session,
    decoder: KeyDecoder,
    options: RenderOptions,
    /// The screen is out of date
    dirty: bool,
}

impl Editor {
    /// Create an editor for a session
    pub fn new(session: Session, options: RenderOptions) -> Self {
        Self {
            session,
            decoder: KeyDecoder::new(),
            options,
            dirty: true,
        }
    }

    /// The current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Scroll to the cursor and write one frame
    pub fn refresh_screen<T: FrameSink + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        self.session.scroll();
        let viewport = &self.session.viewport;
        debug_assert!(
            viewport.rows == 0 || viewport.cols == 0 || viewport.contains(&self.session.cursor),
            "cursor {:?} outside {:?}",
            self.session.cursor,
            viewport
        );
        let frame = render_frame(&self.session, &self.options);
        term.write_frame(&frame)?;
        self.dirty = false;
        Ok(())
    }

    /// Read at most one key and apply it
    ///
    /// Returns `None` if the read timed out without a key.
    pub fn process_keypress<T: ByteSource + ?Sized>(
        &mut self,
        term: &mut T,
    ) -> Result<Option<Command>> {
        let Some(key) = self.decoder.decode_next_key(term, self.session.mode)? else {
            return Ok(None);
        };

        tracing::trace!("Key: {:?}", key);
        let command = dispatch(&mut self.session, key);
        self.dirty = true;
        Ok(Some(command))
    }

    /// Run until the user quits
    ///
    /// On quit the screen is cleared. Restoring the terminal mode is left to
    /// whoever owns the raw mode guard.
    pub fn run<T: ByteSource + FrameSink + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        loop {
            if self.dirty {
                self.refresh_screen(term)?;
            }

            // A timeout is where periodic work would go
            if let Some(Command::Quit) = self.process_keypress(term)? {
                term.write_frame(&clear_screen())?;
                tracing::info!("Quit requested");
                return Ok(());
            }
        }
    }
}
