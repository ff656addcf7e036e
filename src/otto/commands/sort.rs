use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::sorter;
use std::path::Path;

pub fn run(path: &Path) -> Result<CmdResult> {
    let report = sorter::organize(path)?;
    let mut result = CmdResult::default();
    if report.failed_archives > 0 || report.skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} file(s) could not be sorted, see the log for details",
            report.failed_archives + report.skipped
        )));
    }
    result.add_message(CmdMessage::success("Files sorted successfully."));
    Ok(result.with_sort_report(report))
}
