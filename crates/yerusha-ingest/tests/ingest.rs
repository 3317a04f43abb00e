//! Integration tests for document and ruleset ingestion.

use std::io::Write;

use tempfile::NamedTempFile;

use yerusha_ingest::{IngestError, load_ruleset_labels, read_document};
use yerusha_model::Scope;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn reads_document_with_both_scopes() {
    let file = write_file(
        r#"<document>
  <anchor>
    <metadata name="TitleDocMain">Communal records</metadata>
  </anchor>
  <logical>
    <metadata name="Creator">Jewish Community of Vilna</metadata>
    <metadata name="Creator">Levi, Simon</metadata>
    <metadata name="Language">Hebrew</metadata>
  </logical>
</document>"#,
    );

    let document = read_document(file.path()).expect("read document");
    let anchor = document.entries(Scope::Anchor);
    assert_eq!(anchor.len(), 1);
    assert_eq!(anchor[0].name, "TitleDocMain");
    assert_eq!(anchor[0].value.as_deref(), Some("Communal records"));

    let logical = document.entries(Scope::Logical);
    assert_eq!(logical.len(), 3);
    assert_eq!(logical[0].value.as_deref(), Some("Jewish Community of Vilna"));
    assert_eq!(logical[1].value.as_deref(), Some("Levi, Simon"));
}

#[test]
fn document_without_anchor_serves_logical_for_anchor_scope() {
    let file = write_file(
        r#"<document>
  <logical>
    <metadata name="Creator">Levi, Simon</metadata>
  </logical>
</document>"#,
    );

    let document = read_document(file.path()).expect("read document");
    assert!(document.anchor.is_none());
    assert_eq!(document.entries(Scope::Anchor).len(), 1);
}

#[test]
fn empty_metadata_element_has_no_value() {
    let file = write_file(
        r#"<document>
  <logical>
    <metadata name="Creator"/>
  </logical>
</document>"#,
    );

    let document = read_document(file.path()).expect("read document");
    assert_eq!(document.logical[0].value, None);
}

#[test]
fn missing_logical_scope_is_an_error() {
    let file = write_file("<document></document>");
    let error = read_document(file.path()).expect_err("must fail");
    assert!(matches!(error, IngestError::MissingLogicalScope { .. }));
}

#[test]
fn malformed_document_is_an_error() {
    let file = write_file("<document><logical>");
    let error = read_document(file.path()).expect_err("must fail");
    assert!(matches!(error, IngestError::DocumentParse { .. }));
}

#[test]
fn ruleset_prefers_english_label() {
    let file = write_file(
        r#"<ruleset>
  <metadataType name="Creator">
    <label lang="de">Urheber</label>
    <label lang="en">Creator</label>
  </metadataType>
  <metadataType name="TitleDocMain">
    <label>Main title</label>
  </metadataType>
  <metadataType name="Unlabeled"/>
</ruleset>"#,
    );

    let labels = load_ruleset_labels(file.path()).expect("load labels");
    assert_eq!(labels.get("Creator").map(String::as_str), Some("Creator"));
    assert_eq!(
        labels.get("TitleDocMain").map(String::as_str),
        Some("Main title")
    );
    assert!(!labels.contains_key("Unlabeled"));
}
