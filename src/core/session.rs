//! Editor session
//!
//! All mutable editor state in one owned value. Components receive the
//! session by reference instead of reaching for globals.

use super::{Cursor, Direction, Document, Mode, Viewport};

/// The state of one editing session
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The text being viewed
    pub document: Document,
    /// Cursor in document coordinates
    pub cursor: Cursor,
    /// Visible region
    pub viewport: Viewport,
    /// Current editing mode
    pub mode: Mode,
    /// Name shown in the status line
    pub file_name: Option<String>,
}

impl Session {
    /// Create a session showing `document` in `viewport`
    pub fn new(document: Document, viewport: Viewport) -> Self {
        Self {
            document,
            viewport,
            ..Self::default()
        }
    }

    /// Move the cursor one step within the document
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.move_in(direction, &self.document);
    }

    /// Scroll the viewport to the cursor; done once per frame
    pub fn scroll(&mut self) {
        self.viewport.follow(&self.cursor);
    }

    /// Switch editing mode
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!("Mode {} -> {}", self.mode.label(), mode.label());
            self.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(lines: usize, rows: usize) -> Session {
        let text: Vec<String> = (0..lines).map(|i| format!("line {}", i)).collect();
        let document = text.iter().map(String::as_str).collect();
        Session::new(document, Viewport::new(rows, 80))
    }

    #[test]
    fn test_session_new() {
        let session = session(3, 10);
        assert_eq!(session.cursor, Cursor::new());
        assert_eq!(session.mode, Mode::Normal);
        assert_eq!(session.document.line_count(), 3);
        assert!(session.file_name.is_none());
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut session = session(100, 10);
        session.cursor.row = 15;
        session.scroll();
        assert_eq!(session.viewport.row_offset, 6);
    }

    #[test]
    fn test_move_cursor_respects_document() {
        let mut session = session(2, 10);
        for _ in 0..5 {
            session.move_cursor(Direction::Down);
        }
        assert_eq!(session.cursor.row, 2);
    }

    #[test]
    fn test_set_mode() {
        let mut session = session(0, 10);
        session.set_mode(Mode::Insert);
        assert_eq!(session.mode, Mode::Insert);
    }
}
