//! Loads the declarative rule configuration from its XML file.
//!
//! One `<field>` record per rule-set. Attributes carry the identity and the
//! required flag; child elements carry the optional checks:
//!
//! ```xml
//! <config>
//!   <field identifier="creator-1" metadata="Creator" docType="logical"
//!          required="true" requiredMessage="A creator must be given">
//!     <pattern message="Year must be four digits">\d{4}</pattern>
//!     <validContent message="Language not permitted">
//!       <value>Hebrew</value>
//!       <value>Yiddish</value>
//!     </validContent>
//!     <either field="creator-corporate" message="Give a person or a body"/>
//!     <requiredIfPresent message="Date range must be complete">
//!       <field>date-start</field>
//!     </requiredIfPresent>
//!     <minWordCount message="Description too short">50</minWordCount>
//!   </field>
//! </config>
//! ```
//!
//! The loaded snapshot is immutable; callers re-load for a fresh run rather
//! than observing configuration changes mid-run.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use yerusha_model::{FieldSpec, Scope};

use crate::error::{Result, RulesError};

#[derive(Debug, Deserialize)]
struct ConfigXml {
    #[serde(rename = "field", default)]
    fields: Vec<FieldXml>,
}

#[derive(Debug, Deserialize)]
struct FieldXml {
    #[serde(rename = "@identifier")]
    identifier: String,
    #[serde(rename = "@metadata")]
    metadata: String,
    #[serde(rename = "@docType", default)]
    doc_type: Option<String>,
    #[serde(rename = "@required", default)]
    required: bool,
    #[serde(rename = "@requiredMessage", default)]
    required_message: Option<String>,
    pattern: Option<PatternXml>,
    #[serde(rename = "validContent")]
    valid_content: Option<ValidContentXml>,
    either: Option<EitherXml>,
    #[serde(rename = "requiredIfPresent")]
    required_if_present: Option<RequiredIfPresentXml>,
    #[serde(rename = "minWordCount")]
    min_word_count: Option<MinWordCountXml>,
}

#[derive(Debug, Deserialize)]
struct PatternXml {
    #[serde(rename = "@message", default)]
    message: Option<String>,
    #[serde(rename = "$text")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct ValidContentXml {
    #[serde(rename = "@message", default)]
    message: Option<String>,
    #[serde(rename = "value", default)]
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EitherXml {
    #[serde(rename = "@field")]
    field: String,
    #[serde(rename = "@message", default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RequiredIfPresentXml {
    #[serde(rename = "@message", default)]
    message: Option<String>,
    #[serde(rename = "field", default)]
    fields: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MinWordCountXml {
    #[serde(rename = "@message", default)]
    message: Option<String>,
    #[serde(rename = "$text")]
    value: String,
}

/// An immutable snapshot of the rule configuration for one validation run.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub fields: Vec<FieldSpec>,
}

impl RuleSet {
    /// Load and verify a rule configuration file.
    ///
    /// Verification happens eagerly: duplicate identifiers, uncompilable
    /// patterns, unparsable word counts, and cross-references to unknown
    /// identifiers all fail the load. A run never starts against a
    /// half-usable configuration.
    ///
    /// # Errors
    ///
    /// See [`RulesError`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: ConfigXml =
            quick_xml::de::from_str(&text).map_err(|source| RulesError::Xml {
                path: path.to_path_buf(),
                source,
            })?;

        let mut fields = Vec::with_capacity(parsed.fields.len());
        for record in parsed.fields {
            fields.push(build_spec(record)?);
        }
        verify_unique_identifiers(&fields)?;
        verify_references(&fields)?;

        if fields.is_empty() {
            warn!(path = %path.display(), "rule configuration declares no fields");
        }
        debug!(path = %path.display(), field_count = fields.len(), "rule configuration loaded");
        Ok(Self { fields })
    }

    pub fn get(&self, identifier: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.identifier == identifier)
    }
}

fn build_spec(record: FieldXml) -> Result<FieldSpec> {
    let scope = match record.doc_type.as_deref() {
        Some("anchor") => Scope::Anchor,
        _ => Scope::Logical,
    };
    let mut spec = FieldSpec::new(record.identifier, record.metadata, scope);

    spec.required = record.required;
    spec.required_message = record
        .required_message
        .unwrap_or_else(|| "A value is required".to_string());

    if let Some(pattern) = record.pattern {
        let compiled =
            Regex::new(&pattern.value).map_err(|error| RulesError::InvalidPattern {
                identifier: spec.identifier.clone(),
                pattern: pattern.value.clone(),
                message: error.to_string(),
            })?;
        spec.pattern = Some(compiled);
        spec.pattern_message = pattern
            .message
            .unwrap_or_else(|| "Value does not match the expected format".to_string());
    }

    if let Some(valid_content) = record.valid_content {
        spec.valid_content = valid_content.values;
        spec.valid_content_message = valid_content
            .message
            .unwrap_or_else(|| "Value is not in the list of permitted terms".to_string());
    }

    if let Some(either) = record.either {
        spec.either_field = Some(either.field);
        spec.either_message = either.message.unwrap_or_else(|| {
            "Either this field or its counterpart must have a value".to_string()
        });
    }

    if let Some(dependency) = record.required_if_present {
        // Legacy configurations encode "no dependency" as a single empty
        // entry; a true empty sequence is the model here.
        spec.required_if_present = dependency
            .fields
            .into_iter()
            .filter(|reference| !reference.trim().is_empty())
            .collect();
        spec.required_if_present_message = dependency
            .message
            .unwrap_or_else(|| "A dependent field is missing its value".to_string());
    }

    if let Some(word_count) = record.min_word_count {
        let trimmed = word_count.value.trim();
        spec.min_word_count =
            trimmed
                .parse::<usize>()
                .map_err(|_| RulesError::InvalidWordCount {
                    identifier: spec.identifier.clone(),
                    value: word_count.value.clone(),
                })?;
        spec.min_word_count_message = word_count
            .message
            .unwrap_or_else(|| format!("Value must contain at least {trimmed} words"));
    }

    Ok(spec)
}

fn verify_unique_identifiers(fields: &[FieldSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for spec in fields {
        if !seen.insert(spec.identifier.as_str()) {
            return Err(RulesError::DuplicateIdentifier {
                identifier: spec.identifier.clone(),
            });
        }
    }
    Ok(())
}

fn verify_references(fields: &[FieldSpec]) -> Result<()> {
    let known: HashSet<&str> = fields.iter().map(|spec| spec.identifier.as_str()).collect();
    for spec in fields {
        let references = spec
            .either_field
            .iter()
            .chain(spec.required_if_present.iter());
        for reference in references {
            if !known.contains(reference.as_str()) {
                return Err(RulesError::UnknownReference {
                    identifier: spec.identifier.clone(),
                    reference: reference.clone(),
                });
            }
        }
    }
    Ok(())
}
