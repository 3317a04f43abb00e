pub mod document;
pub mod error;
pub mod reader;
pub mod ruleset;

pub use document::{DocumentMetadata, MetadataEntry};
pub use error::{IngestError, Result};
pub use reader::read_document;
pub use ruleset::load_ruleset_labels;
