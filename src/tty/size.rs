//! Window size queries
//!
//! The primary strategy asks the kernel with `TIOCGWINSZ`. Some terminals
//! report zero columns there, so the fallback pushes the cursor into the
//! bottom-right corner and reads back a cursor position report.

use std::os::fd::{AsFd, AsRawFd};

use nix::libc;

use super::{ByteSource, FrameSink};
use crate::{Error, Result};

/// Move the cursor as far right and down as the terminal allows
const MOVE_TO_BOTTOM_RIGHT: &[u8] = b"\x1b[999C\x1b[999B";

/// Device status report: "where is the cursor?"
const REQUEST_CURSOR_POSITION: &[u8] = b"\x1b[6n";

/// Longest reply we are willing to collect
const MAX_REPORT_LEN: usize = 31;

/// Window size in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Number of rows
    pub rows: u16,
    /// Number of columns
    pub cols: u16,
}

impl WindowSize {
    /// Create a new window size
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { rows, cols }
    }
}

impl From<libc::winsize> for WindowSize {
    fn from(ws: libc::winsize) -> Self {
        Self {
            rows: ws.ws_row,
            cols: ws.ws_col,
        }
    }
}

/// Get the window size of a terminal with `TIOCGWINSZ`
///
/// Returns `None` if the ioctl fails (for example, `fd` is not a terminal).
pub fn window_size_of<F: AsFd>(fd: F) -> Option<WindowSize> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ only writes into the winsize we pass in
    let result = unsafe { libc::ioctl(fd.as_fd().as_raw_fd(), libc::TIOCGWINSZ, &mut ws) };

    if result == 0 {
        Some(ws.into())
    } else {
        None
    }
}

/// Query the viewport size of the controlling terminal
///
/// Uses the ioctl on stdout first. If that fails or reports zero columns,
/// falls back to [`query_by_cursor_report`] over `term`.
pub fn query_viewport_size<T: ByteSource + FrameSink>(term: &mut T) -> Result<WindowSize> {
    match window_size_of(std::io::stdout()) {
        Some(size) if size.cols > 0 => {
            tracing::info!("Window size from ioctl: {}x{}", size.cols, size.rows);
            Ok(size)
        },
        _ => {
            tracing::info!("ioctl gave no window size, asking the terminal");
            query_by_cursor_report(term)
        },
    }
}

/// Determine the window size from a cursor position report
///
/// Moves the cursor to the bottom-right corner, requests its position and
/// parses the `ESC [ rows ; cols R` reply from the input stream.
pub fn query_by_cursor_report<T: ByteSource + FrameSink>(term: &mut T) -> Result<WindowSize> {
    let request = [MOVE_TO_BOTTOM_RIGHT, REQUEST_CURSOR_POSITION].concat();
    term.write_frame(&request)?;

    let mut reply = Vec::with_capacity(MAX_REPORT_LEN);
    while reply.len() < MAX_REPORT_LEN {
        match term.read_byte()? {
            Some(b'R') | None => break,
            Some(byte) => reply.push(byte),
        }
    }

    let size = parse_cursor_report(&reply)?;
    tracing::info!("Window size from cursor report: {}x{}", size.cols, size.rows);
    Ok(size)
}

/// Parse a cursor position report (`ESC [ row ; col`, trailing `R` optional)
pub fn parse_cursor_report(reply: &[u8]) -> Result<WindowSize> {
    let reply = reply.strip_suffix(b"R").unwrap_or(reply);

    let Some(body) = reply.strip_prefix(b"\x1b[") else {
        return Err(Error::ViewportQuery(format!(
            "unexpected cursor report {:?}",
            String::from_utf8_lossy(reply)
        )));
    };

    let body = std::str::from_utf8(body)
        .map_err(|_| Error::ViewportQuery("cursor report is not ASCII".to_string()))?;

    let (rows, cols) = body
        .split_once(';')
        .ok_or_else(|| Error::ViewportQuery(format!("malformed cursor report {:?}", body)))?;

    let parse = |field: &str| {
        field
            .parse::<u16>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| Error::ViewportQuery(format!("bad dimension {:?}", field)))
    };

    Ok(WindowSize {
        rows: parse(rows)?,
        cols: parse(cols)?,
    })
}
