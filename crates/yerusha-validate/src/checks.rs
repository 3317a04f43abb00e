//! The six field checks.
//!
//! Every check runs against the already-normalized value; there is no
//! short-circuiting. Each failure records its configured message on the
//! result (deduplicated there) and flips the result invalid. The fixed order
//! below determines message ordering, nothing else.

use yerusha_model::{FieldResult, FieldSpec};

use crate::cross::CrossFieldIndex;

/// Delimiter between tokens of a controlled-vocabulary value.
const VOCABULARY_DELIMITER: &str = "; ";

pub(crate) fn run_checks(
    spec: &FieldSpec,
    value: &str,
    index: &CrossFieldIndex<'_>,
    result: &mut FieldResult,
) {
    check_required(spec, value, result);
    check_pattern(spec, value, result);
    check_valid_content(spec, value, result);
    check_either(spec, value, index, result);
    check_required_if_present(spec, value, index, result);
    check_min_word_count(spec, value, result);
}

fn check_required(spec: &FieldSpec, value: &str, result: &mut FieldResult) {
    if spec.required && value.is_empty() {
        result.add_failure(&spec.required_message);
    }
}

fn check_pattern(spec: &FieldSpec, value: &str, result: &mut FieldResult) {
    if value.is_empty() {
        return;
    }
    let Some(pattern) = &spec.pattern else {
        return;
    };
    // Partial match anywhere in the value, not a full-string anchor.
    if !pattern.is_match(value) {
        result.add_failure(&spec.pattern_message);
    }
}

fn check_valid_content(spec: &FieldSpec, value: &str, result: &mut FieldResult) {
    if spec.valid_content.is_empty() || value.is_empty() {
        return;
    }
    for token in value.split(VOCABULARY_DELIMITER) {
        if !spec.valid_content.iter().any(|term| term == token) {
            result.add_failure(&spec.valid_content_message);
        }
    }
}

fn check_either(
    spec: &FieldSpec,
    value: &str,
    index: &CrossFieldIndex<'_>,
    result: &mut FieldResult,
) {
    let Some(counterpart) = &spec.either_field else {
        return;
    };
    if index.counterpart_is_blank(counterpart) && value.is_empty() {
        result.add_failure(&spec.either_message);
    }
}

fn check_required_if_present(
    spec: &FieldSpec,
    value: &str,
    index: &CrossFieldIndex<'_>,
    result: &mut FieldResult,
) {
    if spec.required_if_present.is_empty() || value.is_empty() {
        return;
    }
    for reference in &spec.required_if_present {
        if index.counterpart_is_blank(reference) {
            result.add_failure(&spec.required_if_present_message);
        }
    }
}

fn check_min_word_count(spec: &FieldSpec, value: &str, result: &mut FieldResult) {
    if spec.min_word_count == 0 {
        return;
    }
    if value.split(' ').count() < spec.min_word_count {
        result.add_failure(&spec.min_word_count_message);
    }
}
