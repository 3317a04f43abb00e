//! JSON report output for downstream consumers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use yerusha_model::ValidationReport;

const REPORT_SCHEMA: &str = "yerusha.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    document: &'a str,
    valid: bool,
    fields_checked: usize,
    failures: &'a [yerusha_model::FieldResult],
}

/// Write the validation report as a versioned JSON payload under
/// `output_dir`, returning the path written.
///
/// # Errors
///
/// Fails if the directory cannot be created or the file cannot be written.
pub fn write_report_json(
    output_dir: &Path,
    document_name: &str,
    report: &ValidationReport,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        document: document_name,
        valid: report.is_valid(),
        fields_checked: report.fields_checked,
        failures: &report.failures,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
