//! Default text output formatter with colors

use crate::diff::DiffOp;
use crate::output::{OutputFormatter, OutputLine};
use crate::sorter::{ProcessReport, SectionStatus, SortMode};
use colored::*;

/// Default human-readable formatter with colors
pub struct TextFormatter {
    use_colors: bool,
    quiet: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            use_colors: true,
            quiet: false,
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_colors() -> Self {
        Self {
            use_colors: false,
            quiet: false,
        }
    }

    /// Quiet mode drops the diff and the success message but keeps diagnostics
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn render_diff(&self, ops: &[DiffOp]) -> String {
        let mut out = String::new();
        for op in ops {
            let line = format!("{}{}", op.marker(), op.line().trim_end_matches(['\n', '\r']));
            let painted = match op {
                DiffOp::Equal(_) => line,
                DiffOp::Delete(_) => self.paint(&line, Color::Red),
                DiffOp::Insert(_) => self.paint(&line, Color::Green),
            };
            out.push_str(&painted);
            out.push('\n');
        }
        out
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &ProcessReport, _file_path: &str) -> Vec<OutputLine> {
        let mut lines = Vec::new();

        for section in &report.sections {
            match section.status {
                SectionStatus::Missing => {
                    let message = format!("> Missing section \"{}\"", section.heading);
                    lines.push(OutputLine::stderr(self.paint(&message, Color::Yellow)));
                }
                SectionStatus::Unsorted => {
                    let message = format!(
                        "> Section \"{}\" is not alphabetically ordered. Showing diff:",
                        section.heading
                    );
                    lines.push(OutputLine::stderr(self.paint(&message, Color::Yellow)));
                    if !self.quiet {
                        lines.push(OutputLine::stdout(self.render_diff(&section.diff)));
                    }
                }
                SectionStatus::Sorted | SectionStatus::Fixed => {}
            }
        }

        if report.mode == SortMode::Fix && !self.quiet {
            lines.push(OutputLine::stdout(self.paint(
                "The document has been sorted successfully.",
                Color::Green,
            )));
        }
        if !report.is_sorted() {
            lines.push(OutputLine::stderr(
                self.paint("> The document is not properly sorted.", Color::Red),
            ));
        }

        lines
    }
}
