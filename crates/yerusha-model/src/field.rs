use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which document structure a field specification is matched against.
///
/// Multi-volume documents carry a separate anchor record above the logical
/// unit; single-unit documents only have the logical structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Anchor,
    #[default]
    Logical,
}

/// One configured rule-set for one logical metadata field.
///
/// `field_name` is deliberately not unique: a configuration may declare
/// several specifications against the same repeatable field (e.g. a first
/// and a second creator), which are then matched positionally against the
/// document occurrences.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Unique key, referenced by the cross-field checks of other specs.
    pub identifier: String,
    /// Metadata type name used to match document entries.
    pub field_name: String,
    pub scope: Scope,

    pub required: bool,
    pub required_message: String,

    /// Matched anywhere within the value, not anchored.
    pub pattern: Option<Regex>,
    pub pattern_message: String,

    /// Controlled vocabulary; empty means no constraint.
    pub valid_content: Vec<String>,
    pub valid_content_message: String,

    /// Identifier of a counterpart spec of which at least one must have content.
    pub either_field: Option<String>,
    pub either_message: String,

    /// Identifiers of specs that must have content whenever this field does.
    pub required_if_present: Vec<String>,
    pub required_if_present_message: String,

    /// Minimum number of space-separated words; 0 means no constraint.
    pub min_word_count: usize,
    pub min_word_count_message: String,
}

impl FieldSpec {
    /// Create a specification with no constraints configured.
    pub fn new(
        identifier: impl Into<String>,
        field_name: impl Into<String>,
        scope: Scope,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            field_name: field_name.into(),
            scope,
            required: false,
            required_message: String::new(),
            pattern: None,
            pattern_message: String::new(),
            valid_content: Vec::new(),
            valid_content_message: String::new(),
            either_field: None,
            either_message: String::new(),
            required_if_present: Vec::new(),
            required_if_present_message: String::new(),
            min_word_count: 0,
            min_word_count_message: String::new(),
        }
    }
}
