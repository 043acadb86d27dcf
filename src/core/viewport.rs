//! Viewport scrolling
//!
//! The viewport is the window of the document shown on screen. Offsets only
//! move as far as needed to keep the cursor visible.

use super::Cursor;

/// Visible region of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First document row on screen
    pub row_offset: usize,
    /// First document column on screen
    pub col_offset: usize,
    /// Number of text rows on screen
    pub rows: usize,
    /// Number of columns on screen
    pub cols: usize,
}

impl Viewport {
    /// Create a viewport at the top-left of the document
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }

    /// Scroll so the cursor is inside the viewport
    pub fn follow(&mut self, cursor: &Cursor) {
        self.row_offset = follow_axis(self.row_offset, self.rows, cursor.row);
        self.col_offset = follow_axis(self.col_offset, self.cols, cursor.col);
    }

    /// Check whether the cursor is inside the viewport
    pub fn contains(&self, cursor: &Cursor) -> bool {
        (self.row_offset..self.row_offset + self.rows).contains(&cursor.row)
            && (self.col_offset..self.col_offset + self.cols).contains(&cursor.col)
    }

    /// Cursor position relative to the top-left of the screen (row, col)
    pub fn screen_position(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.row.saturating_sub(self.row_offset),
            cursor.col.saturating_sub(self.col_offset),
        )
    }
}

/// Smallest change to `offset` that puts `pos` in `[offset, offset + size)`
fn follow_axis(offset: usize, size: usize, pos: usize) -> usize {
    let size = size.max(1);
    if pos < offset {
        pos
    } else if pos >= offset + size {
        pos + 1 - size
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_scrolls_down() {
        let mut viewport = Viewport::new(20, 80);
        viewport.follow(&Cursor::at(0, 25));
        // Cursor ends up on the last visible row
        assert_eq!(viewport.row_offset, 6);
        assert_eq!(viewport.screen_position(&Cursor::at(0, 25)), (19, 0));
    }

    #[test]
    fn test_follow_scrolls_up() {
        let mut viewport = Viewport::new(20, 80);
        viewport.row_offset = 30;
        viewport.follow(&Cursor::at(0, 12));
        assert_eq!(viewport.row_offset, 12);
    }

    #[test]
    fn test_follow_keeps_offset_when_visible() {
        let mut viewport = Viewport::new(20, 80);
        viewport.row_offset = 10;
        viewport.follow(&Cursor::at(0, 15));
        assert_eq!(viewport.row_offset, 10);
    }

    #[test]
    fn test_follow_columns() {
        let mut viewport = Viewport::new(20, 10);
        viewport.follow(&Cursor::at(14, 0));
        assert_eq!(viewport.col_offset, 5);

        viewport.follow(&Cursor::at(7, 0));
        assert_eq!(viewport.col_offset, 5);

        viewport.follow(&Cursor::at(2, 0));
        assert_eq!(viewport.col_offset, 2);
    }

    #[test]
    fn test_follow_zero_sized() {
        let mut viewport = Viewport::new(0, 0);
        viewport.follow(&Cursor::at(3, 7));
        assert_eq!(viewport.row_offset, 7);
        assert_eq!(viewport.col_offset, 3);
    }

    #[test]
    fn test_contains() {
        let mut viewport = Viewport::new(5, 5);
        assert!(viewport.contains(&Cursor::at(4, 4)));
        assert!(!viewport.contains(&Cursor::at(5, 0)));

        let cursor = Cursor::at(42, 17);
        viewport.follow(&cursor);
        assert!(viewport.contains(&cursor));
    }
}
