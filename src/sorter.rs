//! Sort & verify/fix engine.
//!
//! Every located section body is stably sorted by row key and compared with
//! the original. In check mode a mismatch is recorded together with a diff;
//! in fix mode the sorted rows replace the body in the document. Sorting
//! never changes the number of lines, so line indices found by the locator
//! stay valid while earlier sections are rewritten.

use std::ops::Range;

use serde::Serialize;

use crate::config::Config;
use crate::diff::{DiffOp, diff_lines};
use crate::document::{Document, line_content};
use crate::error::SortError;
use crate::row_key::KeyExtractor;
use crate::sections::{SectionLocator, SectionOutcome};

/// Check reports unsorted sections; Fix rewrites them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Check,
    Fix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Sorted,
    Unsorted,
    Fixed,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub section: String,
    /// Heading line the section was searched for, e.g. `### A`
    pub heading: String,
    pub status: SectionStatus,
    /// 1-based first body line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<usize>,
    /// 1-based last body line; `start_line - 1` for an empty body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    /// Original vs. sorted body, only for unsorted sections
    #[serde(skip)]
    pub diff: Vec<DiffOp>,
}

impl SectionReport {
    fn missing(section: String, heading: String) -> Self {
        Self {
            section,
            heading,
            status: SectionStatus::Missing,
            start_line: None,
            end_line: None,
            diff: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    pub mode: SortMode,
    pub sections: Vec<SectionReport>,
}

impl ProcessReport {
    /// True when no section was left out of order.
    pub fn is_sorted(&self) -> bool {
        !self.sections.iter().any(|s| s.status == SectionStatus::Unsorted)
    }

    /// True when fix mode reordered at least one section.
    pub fn changed(&self) -> bool {
        self.sections.iter().any(|s| s.status == SectionStatus::Fixed)
    }

    pub fn missing(&self) -> impl Iterator<Item = &SectionReport> {
        self.sections.iter().filter(|s| s.status == SectionStatus::Missing)
    }
}

/// Stable sort of `rows` by row key; rows with equal keys keep their order.
pub fn sort_rows(rows: &[String], extractor: &KeyExtractor) -> Vec<String> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_cached_key(|row| extractor.row_key(row));
    sorted
}

/// Rows of `body`, each ending in a line terminator.
///
/// The last line of a document may lack one. The terminator belongs to the
/// position, so the unterminated row borrows the document's line ending
/// while sorting and whichever row lands last gives it back. The flag says
/// whether an ending was added.
fn terminated_rows(document: &Document, body: &Range<usize>) -> (Vec<String>, bool) {
    let lines = document.lines();
    let mut rows = lines[body.clone()].to_vec();
    let unterminated = body.end == lines.len() && rows.last().is_some_and(|last| !last.ends_with('\n'));
    if !unterminated {
        return (rows, false);
    }

    let ending = match lines[..body.end - 1].last() {
        Some(previous) if previous.ends_with("\r\n") => "\r\n",
        _ => "\n",
    };
    if let Some(last) = rows.last_mut() {
        last.push_str(ending);
    }
    (rows, true)
}

/// Check or fix every configured section of `document` in place.
pub fn process_document(document: &mut Document, config: &Config, mode: SortMode) -> Result<ProcessReport, SortError> {
    let extractor = KeyExtractor::new(&config.global.particles)?;
    let locator = SectionLocator::new(&config.global);
    let outcomes = locator.locate(document.lines());
    let mut sections = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        let location = match outcome {
            SectionOutcome::Located(location) => location,
            SectionOutcome::Missing { section } => {
                let heading = locator.heading_for(&section);
                sections.push(SectionReport::missing(section, heading));
                continue;
            }
        };

        let body = location.body();
        let (rows, added_ending) = terminated_rows(document, &body);
        let mut sorted = sort_rows(&rows, &extractor);

        let (status, diff) = if rows == sorted {
            (SectionStatus::Sorted, Vec::new())
        } else {
            match mode {
                SortMode::Check => {
                    log::debug!("[glossort-sorter] Section '{}' is out of order", location.section);
                    (SectionStatus::Unsorted, diff_lines(rows.as_slice(), sorted.as_slice()))
                }
                SortMode::Fix => {
                    log::debug!("[glossort-sorter] Reordering section '{}'", location.section);
                    if added_ending && let Some(last) = sorted.last_mut() {
                        let content_len = line_content(last).len();
                        last.truncate(content_len);
                    }
                    document.replace_range(body.clone(), sorted);
                    (SectionStatus::Fixed, Vec::new())
                }
            }
        };

        sections.push(SectionReport {
            heading: locator.heading_for(&location.section),
            section: location.section,
            status,
            start_line: Some(body.start + 1),
            end_line: Some(body.end),
            diff,
        });
    }

    Ok(ProcessReport { mode, sections })
}
