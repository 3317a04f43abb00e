//! The validation engine: orchestrates occurrence resolution, normalization,
//! and the field checks into one report.

use tracing::{debug, info};

use yerusha_ingest::DocumentMetadata;
use yerusha_model::{FieldResult, FieldSpec, ValidationReport};

use crate::checks::run_checks;
use crate::cross::CrossFieldIndex;
use crate::normalize::normalize;
use crate::resolve::resolve_values;

/// Validate a document's metadata against the configured specifications.
///
/// For each specification, in configuration order: resolve its display label
/// (ruleset lookup, identifier fallback), resolve the document value(s) it
/// applies to, normalize each, run every check, and keep the failing results.
///
/// Pure and deterministic: re-running with the same inputs produces an
/// identical report.
pub fn run_validation(specs: &[FieldSpec], document: &DocumentMetadata) -> ValidationReport {
    let index = CrossFieldIndex::build(specs, document);

    let mut failures = Vec::new();
    let mut fields_checked = 0;
    for (position, spec) in specs.iter().enumerate() {
        let label = document
            .label_for(&spec.field_name)
            .unwrap_or(&spec.identifier);

        for raw in resolve_values(specs, position, document) {
            let value = normalize(raw);
            let mut result = FieldResult::new(label, value.clone());
            run_checks(spec, &value, &index, &mut result);
            fields_checked += 1;
            if !result.is_valid {
                debug!(
                    identifier = %spec.identifier,
                    messages = result.messages.len(),
                    "field failed validation"
                );
                failures.push(result);
            }
        }
    }

    info!(
        fields_checked,
        failures = failures.len(),
        "validation run complete"
    );
    ValidationReport {
        failures,
        fields_checked,
    }
}
