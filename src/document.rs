//! In-memory view of a Markdown document as an ordered list of lines.
//!
//! Every line keeps its terminator (`\n` or `\r\n`), so concatenating the
//! lines reproduces the original bytes exactly. Only the last line of a
//! document can lack a terminator.

use std::ops::Range;
use std::path::Path;

use crate::error::SortError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split text into lines, keeping each line's terminator.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Read the whole file into memory.
    pub fn read(path: &Path) -> Result<Self, SortError> {
        let text = std::fs::read_to_string(path).map_err(|e| SortError::io(path, e))?;
        let document = Self::from_text(&text);
        log::debug!(
            "[glossort-document] Read {} lines from {}",
            document.len(),
            path.display()
        );
        Ok(document)
    }

    /// Write the whole document back in one operation.
    pub fn write(&self, path: &Path) -> Result<(), SortError> {
        std::fs::write(path, self.to_text()).map_err(|e| SortError::io(path, e))?;
        log::debug!(
            "[glossort-document] Wrote {} lines to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replace a range of lines with `replacement`.
    pub fn replace_range(&mut self, range: Range<usize>, replacement: Vec<String>) {
        self.lines.splice(range, replacement);
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

/// Line content without its trailing `\n` or `\r\n`.
pub fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// A line is blank when it holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
