//! JSON output formatter

use crate::output::{OutputFormatter, OutputLine};
use crate::sorter::ProcessReport;
use serde_json::json;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ProcessReport, file_path: &str) -> Vec<OutputLine> {
        let document = json!({
            "file": file_path,
            "mode": report.mode,
            "sorted": report.is_sorted(),
            "fixed": report.changed(),
            "sections": report.sections,
        });
        vec![OutputLine::stdout(
            serde_json::to_string_pretty(&document).unwrap_or_default(),
        )]
    }
}
