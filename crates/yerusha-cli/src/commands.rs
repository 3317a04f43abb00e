use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use yerusha_ingest::{load_ruleset_labels, read_document};
use yerusha_model::{FieldSpec, Scope};
use yerusha_rules::RuleSet;
use yerusha_validate::{run_validation, write_report_json};

use crate::cli::{FieldsArgs, ValidateArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_validate(args: &ValidateArgs) -> Result<RunResult> {
    let span = info_span!("validate", document = %args.document.display());
    let _guard = span.enter();
    let start = Instant::now();

    // Configuration and document are loaded fresh per run; nothing observes
    // a reload mid-run.
    let rules = RuleSet::load(&args.rules).context("load rule configuration")?;
    let mut document = read_document(&args.document).context("read document")?;
    if let Some(ruleset) = &args.ruleset {
        let labels = load_ruleset_labels(ruleset).context("load ruleset labels")?;
        document = document.with_labels(labels);
    }

    let report = run_validation(&rules.fields, &document);

    let report_path = match &args.report_dir {
        Some(dir) => {
            let path = write_report_json(dir, &document_name(&args.document), &report)
                .context("write validation report")?;
            Some(path)
        }
        None => None,
    };

    info!(
        document = %args.document.display(),
        fields_checked = report.fields_checked,
        failures = report.failure_count(),
        duration_ms = start.elapsed().as_millis(),
        "validation finished"
    );

    Ok(RunResult {
        document: args.document.clone(),
        report,
        report_path,
    })
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let rules = RuleSet::load(&args.rules).context("load rule configuration")?;
    let mut table = Table::new();
    table.set_header(vec!["Identifier", "Field", "Scope", "Checks"]);
    apply_table_style(&mut table);
    for spec in &rules.fields {
        let scope = match spec.scope {
            Scope::Anchor => "anchor",
            Scope::Logical => "logical",
        };
        table.add_row(vec![
            spec.identifier.clone(),
            spec.field_name.clone(),
            scope.to_string(),
            describe_checks(spec),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn describe_checks(spec: &FieldSpec) -> String {
    let mut checks = Vec::new();
    if spec.required {
        checks.push("required".to_string());
    }
    if spec.pattern.is_some() {
        checks.push("pattern".to_string());
    }
    if !spec.valid_content.is_empty() {
        checks.push(format!("vocabulary({})", spec.valid_content.len()));
    }
    if let Some(counterpart) = &spec.either_field {
        checks.push(format!("either({counterpart})"));
    }
    if !spec.required_if_present.is_empty() {
        checks.push(format!("depends({})", spec.required_if_present.join(", ")));
    }
    if spec.min_word_count > 0 {
        checks.push(format!("min-words({})", spec.min_word_count));
    }
    checks.join(", ")
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string()
}
