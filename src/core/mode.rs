//! Editing mode

use serde::{Deserialize, Serialize};

/// Editing mode
///
/// In normal mode `h`, `j`, `k` and `l` move the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

impl Mode {
    /// Label shown in the status line
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
        }
    }
}
