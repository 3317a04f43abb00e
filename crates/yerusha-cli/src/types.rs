use std::path::PathBuf;

use yerusha_model::ValidationReport;

/// Outcome of one `validate` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub document: PathBuf,
    pub report: ValidationReport,
    pub report_path: Option<PathBuf>,
}
