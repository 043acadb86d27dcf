//! Editor Core Module
//!
//! Platform-independent editor state. This module contains:
//! - Document buffer (lines of bytes)
//! - Cursor position and movement rules
//! - Viewport scrolling
//! - Editing mode
//! - The session tying them together
//!
//! Nothing here touches the terminal: given the same keys, the core always
//! ends up in the same state.

mod cursor;
mod document;
mod mode;
mod session;
mod viewport;

pub use cursor::{Cursor, Direction};
pub use document::{Document, Line};
pub use mode::Mode;
pub use session::Session;
pub use viewport::Viewport;
