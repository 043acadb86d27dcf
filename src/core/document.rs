//! Document buffer
//!
//! A document is an ordered list of lines. Lines hold raw bytes: files are
//! not required to be valid UTF-8, and nothing is lost by loading them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::{Error, Result};

/// A single line of text, without its line terminator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Create a line from its content
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Number of bytes in the line
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the line has no content
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The content of the line
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The part of the line in columns `[start, start + width)`
    ///
    /// Returns an empty slice if the line ends before `start`.
    pub fn visible(&self, start: usize, width: usize) -> &[u8] {
        let start = start.min(self.bytes.len());
        let end = start.saturating_add(width).min(self.bytes.len());
        &self.bytes[start..end]
    }
}

/// The text being edited
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document from a line source
    ///
    /// Splits on `\n` and strips every trailing `\r`/`\n` from each line.
    pub fn load<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut document = Self::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            while let Some(b'\n' | b'\r') = buf.last() {
                buf.pop();
            }
            document.append(&buf);
        }

        Ok(document)
    }

    /// Load a document from a file
    pub fn open(path: &Path) -> Result<Self> {
        let to_error = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(to_error)?;
        let document = Self::load(BufReader::new(file)).map_err(to_error)?;

        tracing::info!(
            "Loaded {} lines from {}",
            document.line_count(),
            path.display()
        );
        Ok(document)
    }

    /// Append a line at the end of the document
    pub fn append(&mut self, bytes: &[u8]) {
        self.lines.push(Line::new(bytes));
    }

    /// Get the line at the given row
    pub fn line_at(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Length of the line at the given row, 0 past the end of the document
    pub fn line_len(&self, row: usize) -> usize {
        self.line_at(row).map_or(0, Line::len)
    }

    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Document {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(|s| Line::new(s.as_bytes())).collect(),
        }
    }
}
