//! Tilde Editor Library
//!
//! A small terminal text editor built directly on termios, without a TUI library.
//! This crate provides:
//!
//! - `tty`: raw mode, window size queries, byte-level terminal I/O
//! - `input`: key decoding from raw bytes (including escape sequences)
//! - `core`: document, cursor, viewport and the editor session
//! - `renderer`: frame composition into a single output buffer
//! - `editor`: key dispatch and the main loop
//! - `app`: configuration and logging

pub mod app;
pub mod core;
pub mod editor;
pub mod error;
pub mod input;
pub mod renderer;
pub mod tty;

pub use error::{Error, Result};

/// Version shown in the welcome banner and `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
