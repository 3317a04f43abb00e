#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rule configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule configuration {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("duplicate field identifier in configuration: {identifier}")]
    DuplicateIdentifier { identifier: String },

    #[error("field {identifier} references unknown identifier {reference}")]
    UnknownReference {
        identifier: String,
        reference: String,
    },

    #[error("field {identifier} has an invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        identifier: String,
        pattern: String,
        message: String,
    },

    #[error("field {identifier} has an invalid minimum word count '{value}'")]
    InvalidWordCount { identifier: String, value: String },
}

pub type Result<T> = std::result::Result<T, RulesError>;
