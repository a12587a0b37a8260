//! Section locator.
//!
//! A glossary is split into sections headed `### 1-9`, `### A` … `### Z`,
//! each followed by one table. The locator walks the headings in their
//! fixed order with a single forward cursor and reports, for every section,
//! either the line range of its table body or that it is missing.

use std::ops::Range;

use crate::config::GlobalConfig;
use crate::document::{is_blank, line_content};

/// `1-9` followed by the letters `A` through `Z`.
pub fn default_sections() -> Vec<String> {
    std::iter::once("1-9".to_string())
        .chain(('A'..='Z').map(|c| c.to_string()))
        .collect()
}

/// Where a section's sortable rows live, as 0-based line indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLocation {
    pub section: String,
    pub heading_line: usize,
    /// First row after the table header and separator lines
    pub body_start: usize,
    /// First blank line after the table, or the document length
    pub body_end: usize,
}

impl SectionLocation {
    pub fn body(&self) -> Range<usize> {
        self.body_start..self.body_end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    Located(SectionLocation),
    Missing { section: String },
}

pub struct SectionLocator<'a> {
    heading_prefix: &'a str,
    sections: &'a [String],
}

impl<'a> SectionLocator<'a> {
    pub fn new(config: &'a GlobalConfig) -> Self {
        Self {
            heading_prefix: &config.heading_prefix,
            sections: &config.sections,
        }
    }

    /// The exact heading line (without terminator) expected for `section`.
    pub fn heading_for(&self, section: &str) -> String {
        format!("{}{}", self.heading_prefix, section)
    }

    /// Locate every configured section, in order.
    ///
    /// A missing heading leaves the cursor where it was, so later sections
    /// are still searched from the last heading that was found.
    pub fn locate(&self, lines: &[String]) -> Vec<SectionOutcome> {
        let mut cursor = 0;
        let mut outcomes = Vec::with_capacity(self.sections.len());

        for section in self.sections {
            let heading = self.heading_for(section);
            let Some(heading_line) = find_heading(lines, &heading, cursor) else {
                log::debug!("[glossort-sections] '{heading}' not found from line {}", cursor + 1);
                outcomes.push(SectionOutcome::Missing {
                    section: section.clone(),
                });
                continue;
            };

            cursor = heading_line + 1;
            let body = find_table_body(lines, heading_line + 1);
            log::debug!(
                "[glossort-sections] '{heading}' at line {}, body lines {}..{}",
                heading_line + 1,
                body.start + 1,
                body.end
            );
            outcomes.push(SectionOutcome::Located(SectionLocation {
                section: section.clone(),
                heading_line,
                body_start: body.start,
                body_end: body.end,
            }));
        }

        outcomes
    }
}

/// Index of the first line at or after `from` that is exactly `heading`.
pub fn find_heading(lines: &[String], heading: &str, from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| line_content(line) == heading)
        .map(|(idx, _)| idx)
}

/// Body range of the table starting at or after `start`.
///
/// The first non-blank line is the table header and the line after it the
/// separator; the body runs from there to the next blank line or to the end
/// of the document. With no table at all the range is empty.
pub fn find_table_body(lines: &[String], start: usize) -> Range<usize> {
    let len = lines.len();
    let Some(header) = (start..len).find(|&n| !is_blank(&lines[n])) else {
        return len..len;
    };
    let end = (header..len).find(|&n| is_blank(&lines[n])).unwrap_or(len);
    (header + 2).min(end)..end
}
