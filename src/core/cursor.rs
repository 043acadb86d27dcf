//! Cursor state management
//!
//! The cursor lives in document coordinates. One row past the last line is
//! a valid position, so the cursor can sit below the text at column 0.

use super::Document;

/// Direction of a single cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor position in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column (byte offset in the line, 0-indexed)
    pub col: usize,
    /// Row (line index, 0-indexed)
    pub row: usize,
}

impl Cursor {
    /// Create a new cursor at the top of the document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor at the given position
    pub fn at(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Move one step, wrapping across line ends
    ///
    /// Left at column 0 goes to the end of the previous line, Right at the end
    /// of a line goes to the start of the next one. The column is then clamped
    /// to the length of the line under the cursor.
    pub fn move_in(&mut self, direction: Direction, document: &Document) {
        match direction {
            Direction::Up => {
                self.row = self.row.saturating_sub(1);
            },
            Direction::Down => {
                if self.row < document.line_count() {
                    self.row += 1;
                }
            },
            Direction::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = document.line_len(self.row);
                }
            },
            Direction::Right => {
                if let Some(line) = document.line_at(self.row) {
                    if self.col < line.len() {
                        self.col += 1;
                    } else {
                        self.row += 1;
                        self.col = 0;
                    }
                }
            },
        }

        self.clamp_to(document);
    }

    /// Pull the cursor back inside the document
    pub fn clamp_to(&mut self, document: &Document) {
        self.row = self.row.min(document.line_count());
        self.col = self.col.min(document.line_len(self.row));
    }

    /// Carriage return - move to column 0
    pub fn carriage_return(&mut self) {
        self.col = 0;
    }
}
