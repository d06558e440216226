//! JSON format
//!
//! Dumps the assembled document as JSON: the title plus the flat node
//! sequence, each node tagged with its `type`.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON dump of the document structure"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
    }
}
