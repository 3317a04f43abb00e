//! Occurrence resolution: which document value(s) a specification validates.
//!
//! Configurations may declare several independent rule-sets against the same
//! repeatable field name ("first creator" vs "second creator"). Matching is
//! positional within appearance order on both sides: the Nth-declared
//! sibling specification gets the Nth document occurrence.

use yerusha_ingest::DocumentMetadata;
use yerusha_model::FieldSpec;

/// 1-based occurrence of the spec at `index` among the specs sharing its
/// field name; 0 when the field name is declared only once ("match all").
pub(crate) fn occurrence(specs: &[FieldSpec], index: usize) -> usize {
    let name = &specs[index].field_name;
    let mut siblings = 0;
    let mut position = 0;
    for (i, spec) in specs.iter().enumerate() {
        if spec.field_name == *name {
            siblings += 1;
            if i <= index {
                position += 1;
            }
        }
    }
    if siblings > 1 { position } else { 0 }
}

/// Resolve the raw document value(s) the spec at `index` applies to.
///
/// Always yields at least one element: a document with no matching entry
/// still produces a single missing value, so every specification results in
/// at least one validation result.
pub fn resolve_values<'a>(
    specs: &[FieldSpec],
    index: usize,
    document: &'a DocumentMetadata,
) -> Vec<Option<&'a str>> {
    let spec = &specs[index];
    let wanted = occurrence(specs, index);

    let mut values = Vec::new();
    let mut counter = 1;
    for entry in document.entries(spec.scope) {
        if entry.name == spec.field_name {
            if wanted == 0 || counter == wanted {
                values.push(entry.value.as_deref());
            }
            counter += 1;
        }
    }
    if values.is_empty() {
        values.push(None);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use yerusha_ingest::MetadataEntry;
    use yerusha_model::Scope;

    fn spec(identifier: &str, field_name: &str) -> FieldSpec {
        FieldSpec::new(identifier, field_name, Scope::Logical)
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
    fn single_spec_matches_all_occurrences() {
        let specs = vec![spec("language", "Language")];
        let document = document(&[("Language", "Hebrew"), ("Language", "Yiddish")]);
        let values = resolve_values(&specs, 0, &document);
        assert_eq!(values, vec![Some("Hebrew"), Some("Yiddish")]);
    }

    #[test]
    fn sibling_specs_match_positionally() {
        let specs = vec![
            spec("subject-1", "Subject"),
            spec("subject-2", "Subject"),
            spec("language", "Language"),
        ];
        let document = document(&[
            ("Subject", "A"),
            ("Language", "Hebrew"),
            ("Subject", "B"),
            ("Subject", "C"),
        ]);
        assert_eq!(resolve_values(&specs, 0, &document), vec![Some("A")]);
        assert_eq!(resolve_values(&specs, 1, &document), vec![Some("B")]);
        // "C" has no third sibling spec and is never checked.
        assert_eq!(occurrence(&specs, 2), 0);
    }

    #[test]
    fn missing_field_synthesizes_one_value() {
        let specs = vec![spec("creator", "Creator")];
        let document = document(&[("Language", "Hebrew")]);
        assert_eq!(resolve_values(&specs, 0, &document), vec![None]);
    }

    #[test]
    fn sibling_spec_beyond_document_occurrences_is_missing() {
        let specs = vec![spec("subject-1", "Subject"), spec("subject-2", "Subject")];
        let document = document(&[("Subject", "A")]);
        assert_eq!(resolve_values(&specs, 1, &document), vec![None]);
    }
}
