//! Error types for the editor
//!
//! Only fatal conditions are represented here. Unrecognized escape sequences
//! are not errors: the key decoder turns them into a plain `Escape` key.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::app::ConfigError;

/// Editor error type
#[derive(Error, Debug)]
pub enum Error {
    /// Getting or setting terminal attributes failed
    #[error("Failed to configure terminal: {0}")]
    TerminalConfig(#[source] nix::Error),

    /// Neither the ioctl nor the cursor position report gave a usable size
    #[error("Failed to query window size: {0}")]
    ViewportQuery(String),

    /// The file given on the command line could not be opened or read
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, Error>;
