//! One-time lookup maps for the cross-field checks.
//!
//! The either-of and required-if-present checks resolve a counterpart
//! specification by identifier and then its first matching document value by
//! field name. Both lookups are built once per run instead of rescanning the
//! specification and document lists inside every check.
//!
//! Counterpart values are looked up across both scopes, anchor first. The
//! cross-scope behavior is deliberate; narrowing it to the checked field's
//! own scope would silently change which documents pass.

use std::collections::HashMap;

use yerusha_ingest::DocumentMetadata;
use yerusha_model::FieldSpec;

pub(crate) struct CrossFieldIndex<'a> {
    spec_by_identifier: HashMap<&'a str, &'a FieldSpec>,
    first_value_by_field: HashMap<&'a str, Option<&'a str>>,
}

impl<'a> CrossFieldIndex<'a> {
    pub(crate) fn build(specs: &'a [FieldSpec], document: &'a DocumentMetadata) -> Self {
        let mut spec_by_identifier = HashMap::new();
        for spec in specs {
            spec_by_identifier
                .entry(spec.identifier.as_str())
                .or_insert(spec);
        }

        let mut first_value_by_field = HashMap::new();
        for entry in document.all_entries() {
            first_value_by_field
                .entry(entry.name.as_str())
                .or_insert(entry.value.as_deref());
        }

        Self {
            spec_by_identifier,
            first_value_by_field,
        }
    }

    /// True when the referenced field has no usable content: the identifier
    /// is unknown, the document has no entry for its field name, or the
    /// entry's raw value is blank/whitespace-only.
    pub(crate) fn counterpart_is_blank(&self, identifier: &str) -> bool {
        let Some(spec) = self.spec_by_identifier.get(identifier) else {
            return true;
        };
        match self.first_value_by_field.get(spec.field_name.as_str()) {
            Some(Some(value)) => value.trim().is_empty(),
            _ => true,
        }
    }
}
