//! Error types for document and ruleset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a document or its ruleset.
///
/// Any of these aborts the validation run; a partially read document must
/// never produce a partial report.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read a file from disk.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document XML could not be parsed.
    #[error("failed to parse document {path}: {source}")]
    DocumentParse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// Ruleset XML could not be parsed.
    #[error("failed to parse ruleset {path}: {source}")]
    RulesetParse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// The document has no logical metadata structure.
    #[error("document {path} has no logical metadata scope")]
    MissingLogicalScope { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::MissingLogicalScope {
            path: PathBuf::from("/data/record.xml"),
        };
        assert_eq!(
            err.to_string(),
            "document /data/record.xml has no logical metadata scope"
        );
    }
}
