//! End-to-end tests for the validation engine.

use std::collections::HashMap;

use regex::Regex;

use yerusha_ingest::{DocumentMetadata, MetadataEntry};
use yerusha_model::{FieldSpec, Scope};
use yerusha_validate::run_validation;

fn spec(identifier: &str, field_name: &str) -> FieldSpec {
    FieldSpec::new(identifier, field_name, Scope::Logical)
}

fn required(identifier: &str, field_name: &str, message: &str) -> FieldSpec {
    let mut spec = spec(identifier, field_name);
    spec.required = true;
    spec.required_message = message.to_string();
    spec
}

fn document(entries: &[(&str, &str)]) -> DocumentMetadata {
    DocumentMetadata::new(
        entries
            .iter()
            .map(|(name, value)| MetadataEntry::new(*name, *value))
            .collect(),
    )
}

#[test]
fn required_field_missing_from_document() {
    let specs = vec![required("creator", "Creator", "A creator must be given")];
    let report = run_validation(&specs, &document(&[("Language", "Hebrew")]));

    assert!(!report.is_valid());
    assert_eq!(report.fields_checked, 1);
    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.value, "");
    assert_eq!(failure.messages, vec!["A creator must be given"]);
}

#[test]
fn pattern_matches_anywhere_in_value() {
    let mut year = spec("year", "PublicationYear");
    year.pattern = Some(Regex::new(r"\d{4}").expect("valid pattern"));
    year.pattern_message = "Year must contain four digits".to_string();
    let specs = vec![year];

    let report = run_validation(&specs, &document(&[("PublicationYear", "19th century")]));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(
        report.failures[0].messages,
        vec!["Year must contain four digits"]
    );

    // Substring match semantics: extra text around the match is fine.
    let report = run_validation(&specs, &document(&[("PublicationYear", "printed 1923 in Vilna")]));
    assert!(report.is_valid());

    // Empty values skip the pattern check entirely.
    let report = run_validation(&specs, &document(&[]));
    assert!(report.is_valid());
}

#[test]
fn controlled_vocabulary_tokens() {
    let mut language = spec("language", "Language");
    language.valid_content = vec![
        "Hebrew".to_string(),
        "Yiddish".to_string(),
        "Russian".to_string(),
    ];
    language.valid_content_message = "Language not permitted".to_string();
    let specs = vec![language];

    let report = run_validation(&specs, &document(&[("Language", "Hebrew; Yiddish")]));
    assert!(report.is_valid());

    let report = run_validation(&specs, &document(&[("Language", "Hebrew; French")]));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].messages, vec!["Language not permitted"]);

    // Several bad tokens still yield the message once.
    let report = run_validation(&specs, &document(&[("Language", "French; German")]));
    assert_eq!(report.failures[0].messages.len(), 1);
}

#[test]
fn repeatable_field_occurrences_are_assigned_in_order() {
    let mut first = required("subject-1", "Subject", "First subject missing");
    first.valid_content = vec!["A".to_string()];
    first.valid_content_message = "First subject not permitted".to_string();
    let mut second = spec("subject-2", "Subject");
    second.valid_content = vec!["A".to_string()];
    second.valid_content_message = "Second subject not permitted".to_string();
    let specs = vec![first, second];

    let report = run_validation(
        &specs,
        &document(&[("Subject", "A"), ("Subject", "B"), ("Subject", "C")]),
    );

    // Spec 1 sees "A" (valid), spec 2 sees "B" (invalid); "C" is never checked.
    assert_eq!(report.fields_checked, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].value, "B");
    assert_eq!(
        report.failures[0].messages,
        vec!["Second subject not permitted"]
    );
}

#[test]
fn either_field_requires_one_of_two() {
    let mut person = spec("creator-person", "Creator");
    person.either_field = Some("creator-corporate".to_string());
    person.either_message = "Give a person or a body".to_string();
    let corporate = spec("creator-corporate", "CorporateCreator");
    let specs = vec![person, corporate];

    // Both blank: the either check fails on the person spec.
    let report = run_validation(&specs, &document(&[]));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].messages, vec!["Give a person or a body"]);

    // Counterpart filled: satisfied even though this field is empty.
    let report = run_validation(
        &specs,
        &document(&[("CorporateCreator", "Jewish Community of Vilna")]),
    );
    assert!(report.is_valid());

    // Whitespace-only counterpart is still blank.
    let report = run_validation(&specs, &document(&[("CorporateCreator", "   ")]));
    assert_eq!(report.failures.len(), 1);
}

#[test]
fn required_if_present_fails_once_for_many_blank_references() {
    let mut date_end = spec("date-end", "DateEnd");
    date_end.required_if_present = vec!["date-start".to_string(), "date-note".to_string()];
    date_end.required_if_present_message = "Date range must be complete".to_string();
    let specs = vec![
        date_end,
        spec("date-start", "DateStart"),
        spec("date-note", "DateNote"),
    ];

    // Both referenced fields blank: message appears exactly once.
    let report = run_validation(&specs, &document(&[("DateEnd", "1944")]));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(
        report.failures[0].messages,
        vec!["Date range must be complete"]
    );

    // Dependency only applies when this field has content.
    let report = run_validation(&specs, &document(&[]));
    assert!(report.is_valid());

    // All referenced fields filled: no failure.
    let report = run_validation(
        &specs,
        &document(&[("DateEnd", "1944"), ("DateStart", "1939"), ("DateNote", "circa")]),
    );
    assert!(report.is_valid());
}

#[test]
fn cross_field_lookup_crosses_scopes() {
    let mut logical = spec("note", "Note");
    logical.required_if_present = vec!["title".to_string()];
    logical.required_if_present_message = "Title required when a note exists".to_string();
    let title = FieldSpec::new("title", "TitleDocMain", Scope::Anchor);
    let specs = vec![logical, title];

    let document = DocumentMetadata::new(vec![MetadataEntry::new("Note", "see archive")])
        .with_anchor(vec![MetadataEntry::new("TitleDocMain", "Records")]);
    let report = run_validation(&specs, &document);
    assert!(report.is_valid());
}

#[test]
fn minimum_word_count() {
    let mut description = spec("description", "Description");
    description.min_word_count = 3;
    description.min_word_count_message = "Description too short".to_string();
    let specs = vec![description];

    let report = run_validation(&specs, &document(&[("Description", "two words")]));
    assert_eq!(report.failures.len(), 1);

    let report = run_validation(&specs, &document(&[("Description", "three short words")]));
    assert!(report.is_valid());
}

#[test]
fn identical_messages_from_different_checks_are_not_repeated() {
    let mut creator = required("creator", "Creator", "Creator information incomplete");
    creator.min_word_count = 2;
    creator.min_word_count_message = "Creator information incomplete".to_string();
    let specs = vec![creator];

    let report = run_validation(&specs, &document(&[]));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(
        report.failures[0].messages,
        vec!["Creator information incomplete"]
    );
}

#[test]
fn values_are_normalized_before_checks() {
    let mut email = required("contact", "Contact", "Contact required");
    email.pattern = Some(Regex::new("@").expect("valid pattern"));
    email.pattern_message = "Not an email".to_string();
    let specs = vec![email];

    let report = run_validation(
        &specs,
        &document(&[("Contact", "tsdavo@archives.gov.ua\u{00A0}¶more")]),
    );
    // Normalized value is reported even when checks pass.
    assert!(report.is_valid());

    let mut strict = spec("contact-strict", "Contact");
    strict.pattern = Some(Regex::new("^x$").expect("valid pattern"));
    strict.pattern_message = "mismatch".to_string();
    let specs = vec![strict];
    let report = run_validation(
        &specs,
        &document(&[("Contact", "tsdavo@archives.gov.ua\u{00A0}¶more")]),
    );
    assert_eq!(
        report.failures[0].value,
        "tsdavo@archives.gov.ua <br/><br/>more"
    );
}

#[test]
fn display_label_falls_back_to_identifier() {
    let specs = vec![required("creator", "Creator", "A creator must be given")];

    let labeled = DocumentMetadata::new(vec![]).with_labels(HashMap::from([(
        "Creator".to_string(),
        "Creator of the material".to_string(),
    )]));
    let report = run_validation(&specs, &labeled);
    assert_eq!(report.failures[0].label, "Creator of the material");

    let unlabeled = DocumentMetadata::new(vec![]);
    let report = run_validation(&specs, &unlabeled);
    assert_eq!(report.failures[0].label, "creator");
}

#[test]
fn rerun_is_deterministic() {
    let mut language = required("language", "Language", "Language required");
    language.valid_content = vec!["Hebrew".to_string()];
    language.valid_content_message = "Language not permitted".to_string();
    let mut description = spec("description", "Description");
    description.min_word_count = 10;
    description.min_word_count_message = "Description too short".to_string();
    let specs = vec![language, description];
    let document = document(&[("Language", "French"), ("Description", "short")]);

    let first = run_validation(&specs, &document);
    let second = run_validation(&specs, &document);
    assert_eq!(first, second);
    assert_eq!(first.failures.len(), 2);
}
