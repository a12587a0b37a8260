//! Output formatting module for glossort
//!
//! A formatter turns a [`ProcessReport`] into lines tagged with the stream
//! they belong on; [`OutputWriter`] then routes them to stdout or stderr.

use crate::sorter::ProcessReport;
use std::io::{self, Write};

pub mod formatters;

// Re-export formatters
pub use formatters::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub stream: Stream,
    pub text: String,
}

impl OutputLine {
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stdout,
            text: text.into(),
        }
    }

    pub fn stderr(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stderr,
            text: text.into(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the result of processing one document
    fn format_report(&self, report: &ProcessReport, file_path: &str) -> Vec<OutputLine>;
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable diagnostics and diffs
    #[default]
    Text,
    /// One JSON document describing every section
    Json,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }

    /// Create a formatter instance for this format
    pub fn create_formatter(&self, quiet: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new().quiet(quiet)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Output writer that handles stdout/stderr routing
#[derive(Debug, Default)]
pub struct OutputWriter;

impl OutputWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write every line to its stream, in order
    pub fn write(&self, lines: &[OutputLine]) -> io::Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        for line in lines {
            match line.stream {
                Stream::Stdout => {
                    let mut out = stdout.lock();
                    writeln!(out, "{}", line.text)?;
                    out.flush()?;
                }
                Stream::Stderr => {
                    let mut err = stderr.lock();
                    writeln!(err, "{}", line.text)?;
                    err.flush()?;
                }
            }
        }
        Ok(())
    }
}
