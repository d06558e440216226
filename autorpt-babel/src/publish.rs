//! Document publishing pipeline.
//!
//! Provides a high-level API for turning an assembled report document into an
//! output format. This module bridges the gap between the format registry and
//! file I/O, handling both in-memory and file-based output.
//!
//! The built-in sink persists through here; for more control over the
//! conversion, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::ir::nodes::Document;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new(&document, "html")
///     .with_output_path("report.html")
///     .with_option("theme", "serif");
/// ```
///
/// If no output path is provided, the content is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The assembled document to convert.
    pub document: &'a Document,
    /// Target format name (e.g., "html", "markdown").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., theme selection).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    /// Creates a publish request for the given document and format.
    pub fn new(document: &'a Document, format: &'a str) -> Self {
        Self {
            document,
            format,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a format-specific option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output path given).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

impl PublishResult {
    /// The written path, if the artifact went to disk.
    pub fn into_path(self) -> Option<PathBuf> {
        match self.artifact {
            PublishArtifact::File(path) => Some(path),
            PublishArtifact::InMemory(_) => None,
        }
    }
}

/// Publishes a document as described by `spec`.
///
/// # Errors
///
/// Returns [`FormatError`] if the format is unknown, serialization fails or
/// the output file cannot be written. Nothing is written on serialization
/// failure.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    let registry = FormatRegistry::with_defaults();
    let text = registry.serialize_with_options(spec.document, spec.format, &spec.options)?;
    match spec.output {
        Some(path) => write_to_path(path, text).map(|path| PublishResult {
            artifact: PublishArtifact::File(path),
        }),
        None => Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        }),
    }
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    match fs::write(&path, text.as_bytes()) {
        Ok(()) => Ok(path),
        Err(source) => Err(FormatError::Write { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::{DocNode, InlineContent, Paragraph};
    use tempfile::tempdir;

    fn sample_document() -> Document {
        Document {
            title: Some("Sample".to_string()),
            children: vec![DocNode::Paragraph(Paragraph {
                content: vec![InlineContent::Text("Paragraph text.".to_string())],
            })],
        }
    }

    #[test]
    fn publishes_to_memory_when_no_output_path() {
        let doc = sample_document();
        let result = publish(PublishSpec::new(&doc, "html")).expect("publish");
        match result.artifact {
            PublishArtifact::InMemory(content) => {
                assert!(content.contains("Paragraph text."));
            }
            PublishArtifact::File(_) => panic!("expected in-memory artifact"),
        }
    }

    #[test]
    fn writes_to_disk_when_output_path_provided() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.md");
        let doc = sample_document();
        let result =
            publish(PublishSpec::new(&doc, "markdown").with_output_path(&path)).expect("publish");
        assert_eq!(result.into_path(), Some(path.clone()));
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("Paragraph text."));
    }

    #[test]
    fn reports_write_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("output.md");
        let doc = sample_document();
        let result = publish(PublishSpec::new(&doc, "markdown").with_output_path(&path));
        assert!(matches!(result, Err(FormatError::Write { .. })));
        assert!(!path.exists());
    }
}
