//! Output escape sequences
//!
//! Only the handful of VT100 sequences the editor emits. Every terminal
//! emulator in common use understands these.

use std::io::Write;

/// Erase the whole screen
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";

/// Move the cursor to the top-left corner
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Hide the cursor (DECTCEM reset)
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";

/// Show the cursor (DECTCEM set)
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

/// Erase from the cursor to the end of the line
pub const ERASE_LINE_RIGHT: &[u8] = b"\x1b[K";

/// Line break in raw mode (no output post-processing)
pub const CRLF: &[u8] = b"\r\n";

/// Append a CUP sequence for the 0-indexed `(row, col)`
pub fn cursor_position(out: &mut Vec<u8>, row: usize, col: usize) {
    // Writing into a Vec cannot fail
    let _ = write!(out, "\x1b[{};{}H", row + 1, col + 1);
}
