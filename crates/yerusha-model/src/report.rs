use serde::{Deserialize, Serialize};

/// Outcome of validating one resolved value of one configured field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldResult {
    /// Display label of the owning specification.
    pub label: String,
    /// Normalized value; empty string represents "no value".
    pub value: String,
    /// Starts true, flips to false on the first failed check, never back.
    pub is_valid: bool,
    /// Ordered, deduplicated error messages.
    pub messages: Vec<String>,
}

impl FieldResult {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            is_valid: true,
            messages: Vec::new(),
        }
    }

    /// Record a failed check. The same message is never stored twice within
    /// one result, even when several checks share it.
    pub fn add_failure(&mut self, message: &str) {
        self.is_valid = false;
        if !self.messages.iter().any(|existing| existing == message) {
            self.messages.push(message.to_string());
        }
    }
}

/// Result of one validation run: the failing field results only.
///
/// An empty `failures` list means the document passed. Callers that need to
/// distinguish "run occurred, zero failures" from "no run occurred" get that
/// from the `Result` wrapping around the run, not from this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub failures: Vec<FieldResult>,
    /// Total number of field occurrences checked, passing ones included.
    pub fields_checked: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn message_count(&self) -> usize {
        self.failures.iter().map(|result| result.messages.len()).sum()
    }
}
