//! Batch input format
//!
//! A batch is an ordered list of sources. Each entry is either a bare path or
//! a record with per-source overrides:
//!
//! ```json
//! [
//!   "intro.md",
//!   {"file": "sales.xlsx", "options": {"sheet_name": "Q1", "table_title": "Q1 Sales"}}
//! ]
//! ```
//!
//! Option keys are snake_case; the camelCase spellings are accepted too.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-source overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    #[serde(alias = "startHeaderLevel", skip_serializing_if = "Option::is_none")]
    pub start_header_level: Option<u8>,
    #[serde(alias = "sheetName", skip_serializing_if = "Option::is_none")]
    pub sheet_name: Option<String>,
    #[serde(alias = "tableTitle", skip_serializing_if = "Option::is_none")]
    pub table_title: Option<String>,
    #[serde(alias = "includeHeader", skip_serializing_if = "Option::is_none")]
    pub include_header: Option<bool>,
}

/// One entry of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceSpec {
    Path(PathBuf),
    Detailed {
        file: PathBuf,
        #[serde(default)]
        options: SourceOptions,
    },
}

impl SourceSpec {
    pub fn path(&self) -> &Path {
        match self {
            SourceSpec::Path(path) => path,
            SourceSpec::Detailed { file, .. } => file,
        }
    }

    /// Overrides for this source; bare paths have none.
    pub fn options(&self) -> SourceOptions {
        match self {
            SourceSpec::Path(_) => SourceOptions::default(),
            SourceSpec::Detailed { options, .. } => options.clone(),
        }
    }
}

impl From<&str> for SourceSpec {
    fn from(path: &str) -> Self {
        SourceSpec::Path(PathBuf::from(path))
    }
}

impl From<PathBuf> for SourceSpec {
    fn from(path: PathBuf) -> Self {
        SourceSpec::Path(path)
    }
}

/// A complete report description, as read from a JSON manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(alias = "startHeaderLevel", skip_serializing_if = "Option::is_none")]
    pub start_header_level: Option<u8>,
    pub sources: Vec<SourceSpec>,
}

impl Manifest {
    /// Parse a manifest. A bare JSON array is read as a source list.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.is_array() {
            Ok(Manifest {
                sources: serde_json::from_value(value)?,
                ..Manifest::default()
            })
        } else {
            serde_json::from_value(value)
        }
    }

    /// Resolve relative source paths against `base`.
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        for source in &mut self.sources {
            let path = match source {
                SourceSpec::Path(path) => path,
                SourceSpec::Detailed { file, .. } => file,
            };
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}
