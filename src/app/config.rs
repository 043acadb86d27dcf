//! Configuration for the editor

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Mode;
use crate::renderer::RenderOptions;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Read timeout in tenths of a second (raw mode VTIME)
    pub read_timeout_ds: u8,
    /// Reserve the last row for a status line
    pub status_line: bool,
    /// Mode the editor starts in
    pub start_mode: Mode,
    /// Show the welcome banner for an empty document
    pub welcome: bool,
    /// Append logs to this file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_timeout_ds: 1,
            status_line: true,
            start_mode: Mode::Normal,
            welcome: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from the default location or return default config
    ///
    /// A missing file is not an error; a broken one is.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        // Try to load from ~/.config/tilde/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                return Self::load(&config_path);
            }
        }
        Ok(Self::default())
    }

    /// Options for the frame renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            status_line: self.status_line,
            welcome: self.welcome,
        }
    }

    /// Fix up values the terminal cannot honor
    fn normalized(mut self) -> Self {
        // VTIME=0 with VMIN=0 makes every read return immediately
        self.read_timeout_ds = self.read_timeout_ds.max(1);
        self
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("tilde"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
