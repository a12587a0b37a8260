//! Process exit status of the `glossort` binary.

use crate::sorter::ProcessReport;

pub const SUCCESS: i32 = 0;
/// A section is out of order and `--fix` was not given.
pub const UNSORTED: i32 = 1;
/// The file or the configuration could not be used.
pub const TOOL_ERROR: i32 = 2;

/// Exit status for a completed run. Missing sections never affect it.
pub fn for_report(report: &ProcessReport) -> i32 {
    if report.is_sorted() { SUCCESS } else { UNSORTED }
}
