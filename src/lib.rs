//! glossort: keeps glossary tables in alphabetical order.
//!
//! A glossary document is split into sections (`### 1-9`, `### A` …
//! `### Z`), each holding one Markdown table. This crate locates every
//! section's table body, derives a sort key from the first cell of each row
//! and either reports sections that are out of order or rewrites them.

pub mod config;
pub mod diff;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod output;
pub mod row_key;
pub mod sections;
pub mod sorter;

pub use crate::config::Config;
pub use crate::document::Document;
pub use crate::error::SortError;
pub use crate::sorter::{ProcessReport, SectionReport, SectionStatus, SortMode, process_document};

use std::path::Path;

/// Check or fix the document at `path`.
///
/// In fix mode the whole document is written back, even when no section
/// needed reordering.
pub fn sort_file(path: &Path, config: &Config, mode: SortMode) -> Result<ProcessReport, SortError> {
    let mut document = Document::read(path)?;
    let report = process_document(&mut document, config, mode)?;

    if mode == SortMode::Fix {
        document.write(path)?;
    }

    Ok(report)
}
