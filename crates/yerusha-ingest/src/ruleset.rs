//! Display-label lookup from a ruleset file.
//!
//! The ruleset describes the document's metadata schema; validation only
//! needs its English labels:
//!
//! ```xml
//! <ruleset>
//!   <metadataType name="Creator">
//!     <label lang="en">Creator</label>
//!     <label lang="de">Urheber</label>
//!   </metadataType>
//! </ruleset>
//! ```
//!
//! A configured field whose name is absent here is not an error; its display
//! label falls back to the specification identifier at validation time.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct RulesetXml {
    #[serde(rename = "metadataType", default)]
    types: Vec<MetadataTypeXml>,
}

#[derive(Debug, Deserialize)]
struct MetadataTypeXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "label", default)]
    labels: Vec<LabelXml>,
}

#[derive(Debug, Deserialize)]
struct LabelXml {
    #[serde(rename = "@lang", default)]
    lang: Option<String>,
    #[serde(rename = "$text", default)]
    text: Option<String>,
}

/// Load the `field name -> English display label` lookup from a ruleset file.
///
/// Prefers the `lang="en"` label; falls back to the first label of the type.
/// Types without any label text are omitted from the map.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed.
pub fn load_ruleset_labels(path: &Path) -> Result<HashMap<String, String>> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: RulesetXml =
        quick_xml::de::from_str(&text).map_err(|source| IngestError::RulesetParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut labels = HashMap::new();
    for metadata_type in parsed.types {
        if let Some(label) = pick_label(&metadata_type.labels) {
            labels.insert(metadata_type.name, label.to_string());
        }
    }
    debug!(path = %path.display(), label_count = labels.len(), "ruleset labels loaded");
    Ok(labels)
}

fn pick_label(labels: &[LabelXml]) -> Option<&str> {
    let english = labels
        .iter()
        .find(|label| label.lang.as_deref() == Some("en"));
    english
        .or_else(|| labels.first())
        .and_then(|label| label.text.as_deref())
}
