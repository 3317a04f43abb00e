//! Reads a document metadata file into [`DocumentMetadata`].
//!
//! The file carries the already-extracted metadata of one document as flat
//! name/value lists, split into an optional `<anchor>` scope and a required
//! `<logical>` scope:
//!
//! ```xml
//! <document>
//!   <anchor>
//!     <metadata name="TitleDocMain">Communal records</metadata>
//!   </anchor>
//!   <logical>
//!     <metadata name="Creator">Jewish Community of Vilna</metadata>
//!     <metadata name="Creator">Levi, Simon</metadata>
//!   </logical>
//! </document>
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::document::{DocumentMetadata, MetadataEntry};
use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct DocumentXml {
    anchor: Option<ScopeXml>,
    logical: Option<ScopeXml>,
}

#[derive(Debug, Default, Deserialize)]
struct ScopeXml {
    #[serde(rename = "metadata", default)]
    entries: Vec<MetadataXml>,
}

#[derive(Debug, Deserialize)]
struct MetadataXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "$text", default)]
    value: Option<String>,
}

/// Read a document metadata file.
///
/// # Errors
///
/// Fails if the file cannot be read, is not well-formed XML, or lacks a
/// `<logical>` scope. No partial document is ever returned.
pub fn read_document(path: &Path) -> Result<DocumentMetadata> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: DocumentXml =
        quick_xml::de::from_str(&text).map_err(|source| IngestError::DocumentParse {
            path: path.to_path_buf(),
            source,
        })?;

    let logical = parsed
        .logical
        .ok_or_else(|| IngestError::MissingLogicalScope {
            path: path.to_path_buf(),
        })?;

    let mut document = DocumentMetadata::new(into_entries(logical));
    if let Some(anchor) = parsed.anchor {
        document = document.with_anchor(into_entries(anchor));
    }
    debug!(
        path = %path.display(),
        anchor_entries = document.anchor.as_ref().map(Vec::len).unwrap_or(0),
        logical_entries = document.logical.len(),
        "document read"
    );
    Ok(document)
}

fn into_entries(scope: ScopeXml) -> Vec<MetadataEntry> {
    scope
        .entries
        .into_iter()
        .map(|entry| MetadataEntry {
            name: entry.name,
            value: entry.value,
        })
        .collect()
}
