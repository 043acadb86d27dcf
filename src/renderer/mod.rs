//! Frame Renderer
//!
//! Composes a complete frame into one byte buffer. The caller hands the
//! buffer to the terminal in a single write, so the screen never shows a
//! half-drawn frame.
//!
//! # Frame Layout
//!
//! - Cursor hidden, moved home
//! - One row per viewport row: document text, `~` past the end of the
//!   document, or the welcome banner when the document is empty
//! - Each row erased to the right instead of clearing the whole screen
//! - Optional status line as the last row
//! - Cursor placed and shown again

mod ansi;

pub use ansi::{
    cursor_position, CLEAR_SCREEN, CRLF, CURSOR_HOME, ERASE_LINE_RIGHT, HIDE_CURSOR, SHOW_CURSOR,
};

use crate::core::Session;
use crate::VERSION;

/// Filler shown on rows past the end of the document
const FILLER: &[u8] = b"~";

/// Shown in place of control bytes in the document
const PLACEHOLDER: u8 = b'?';

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw a status line below the text rows
    pub status_line: bool,
    /// Show the welcome banner for an empty document
    pub welcome: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            status_line: true,
            welcome: true,
        }
    }
}

/// Text of the welcome banner
pub fn welcome_message() -> String {
    format!("Tilde editor -- version {}", VERSION)
}

/// Bytes that clear the screen and home the cursor
pub fn clear_screen() -> Vec<u8> {
    [CLEAR_SCREEN, CURSOR_HOME].concat()
}

/// Render one frame of the session
///
/// The viewport must already follow the cursor (see [`Session::scroll`]).
pub fn render_frame(session: &Session, options: &RenderOptions) -> Vec<u8> {
    let viewport = &session.viewport;
    let mut frame = Vec::with_capacity((viewport.rows + 1) * (viewport.cols + 8) + 32);

    frame.extend_from_slice(HIDE_CURSOR);
    frame.extend_from_slice(CURSOR_HOME);

    draw_rows(&mut frame, session, options);
    if options.status_line {
        if viewport.rows > 0 {
            frame.extend_from_slice(CRLF);
        }
        draw_status_line(&mut frame, session);
    }

    let (row, col) = viewport.screen_position(&session.cursor);
    cursor_position(&mut frame, row, col);
    frame.extend_from_slice(SHOW_CURSOR);

    frame
}

fn draw_rows(frame: &mut Vec<u8>, session: &Session, options: &RenderOptions) {
    let viewport = &session.viewport;
    let document = &session.document;

    for y in 0..viewport.rows {
        match document.line_at(y + viewport.row_offset) {
            Some(line) => draw_text(frame, line.visible(viewport.col_offset, viewport.cols)),
            None if document.is_empty() && options.welcome && y == viewport.rows / 2 => {
                draw_welcome(frame, viewport.cols);
            },
            None => frame.extend_from_slice(FILLER),
        }

        frame.extend_from_slice(ERASE_LINE_RIGHT);
        if y + 1 < viewport.rows {
            frame.extend_from_slice(CRLF);
        }
    }
}

/// Document text, with control bytes made harmless
///
/// An ESC or other C0 byte from the file would otherwise be interpreted by
/// the terminal. Each one still takes exactly one column.
fn draw_text(frame: &mut Vec<u8>, text: &[u8]) {
    frame.extend(text.iter().map(|&b| match b {
        0x00..=0x1f | 0x7f => PLACEHOLDER,
        _ => b,
    }));
}

/// Centered banner, truncated to the screen width
fn draw_welcome(frame: &mut Vec<u8>, cols: usize) {
    let message = welcome_message();
    let len = message.len().min(cols);
    let padding = (cols - len) / 2;

    frame.resize(frame.len() + padding, b' ');
    frame.extend_from_slice(&message.as_bytes()[..len]);
}

/// Mode on the left, file name and position on the right
fn draw_status_line(frame: &mut Vec<u8>, session: &Session) {
    let cols = session.viewport.cols;

    let mut status = format!("-- {} --", session.mode.label()).into_bytes();
    status.truncate(cols);

    let position = format!(
        "{} {}/{}",
        session.file_name.as_deref().unwrap_or("[No Name]"),
        session.cursor.row + 1,
        session.document.line_count()
    );
    if status.len() + position.len() < cols {
        status.resize(cols - position.len(), b' ');
        status.extend_from_slice(position.as_bytes());
    }

    frame.extend_from_slice(&status);
    frame.extend_from_slice(ERASE_LINE_RIGHT);
}
