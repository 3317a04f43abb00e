//! In-memory view of one document's metadata, as the validation engine sees it.

use std::collections::HashMap;

use yerusha_model::Scope;

/// One named metadata entry in document order.
///
/// `value` is `None` when the source carried the element without text content;
/// the normalizer later folds that into an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub name: String,
    pub value: Option<String>,
}

impl MetadataEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// The flat metadata lists of one document, split into its two scopes, plus
/// the schema-derived display labels.
///
/// This is a stable snapshot: the engine treats it as read-only input for the
/// duration of one run.
#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    /// Anchor (parent) scope; absent for single-unit documents.
    pub anchor: Option<Vec<MetadataEntry>>,
    /// Logical (child) scope; always present.
    pub logical: Vec<MetadataEntry>,
    labels: HashMap<String, String>,
}

impl DocumentMetadata {
    pub fn new(logical: Vec<MetadataEntry>) -> Self {
        Self {
            anchor: None,
            logical,
            labels: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Vec<MetadataEntry>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    /// Entries of the given scope in document order.
    ///
    /// An anchor-scoped lookup on a document without an anchor falls back to
    /// the logical scope, matching how single-unit documents are validated.
    pub fn entries(&self, scope: Scope) -> &[MetadataEntry] {
        match scope {
            Scope::Anchor => self.anchor.as_deref().unwrap_or(&self.logical),
            Scope::Logical => &self.logical,
        }
    }

    /// All entries across both scopes, anchor first, in document order.
    /// Cross-field checks look up counterpart values through this view.
    pub fn all_entries(&self) -> impl Iterator<Item = &MetadataEntry> {
        self.anchor
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .chain(self.logical.iter())
    }

    /// English display label for a metadata type name, if the ruleset has one.
    pub fn label_for(&self, field_name: &str) -> Option<&str> {
        self.labels.get(field_name).map(String::as_str)
    }
}
