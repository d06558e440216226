//! Report assembly from markdown and spreadsheet sources
//!
//!     This crate composes markdown files and spreadsheet tables into a single report document,
//!     keeping heading hierarchy, lists, quotes and tables, and writes the result in one of
//!     several output formats (HTML, Markdown, JSON, outline).
//!
//!     This is a pure lib, that is, it powers autorpt-cli but is shell agnostic: no code here
//!     prints to stdout or reads env vars. Diagnostics go through the `log` facade and the host
//!     decides where they end up.
//!
//! Architecture
//!
//!     Sources flow through a small pipeline into a document sink:
//!
//!         markdown text ─► block parser ─► content formatter ─┐
//!                                                               ├─► DocumentSink ─► persist
//!         spreadsheet ───► tabular reader ─► table renderer ──┘
//!
//!     The assembler sequences this per source and records a per-source status, so one broken
//!     source never stops a batch. The sink is a trait (./sink.rs); the IR document
//!     (./ir/nodes.rs) is the built-in implementation and persists through the format registry.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── sink.rs                 # DocumentSink trait, implemented by the IR document
//!     ├── source.rs               # SourceKind + SourceReader (filesystem, calamine)
//!     ├── manifest.rs             # batch input format (serde)
//!     ├── assembler.rs            # per-source orchestration, BatchResult
//!     ├── tabular                 # TabularValue, number formatting, table renderer
//!     ├── common                  # inline markup stripping, content formatter
//!     ├── ir                      # flat document representation
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # serialize + write
//!     └── formats
//!         ├── markdown            # block parser (input) and comrak serializer (output)
//!         ├── html
//!         ├── json
//!         └── outline
//!
//! Testing
//!
//!     Unit tests live next to the code. Integration tests are under tests/, one directory per
//!     concern, mounted from tests/lib.rs since rust does not discover tests in subdirectories.
//!
//! Library Choices
//!
//!     Output formats are written through their libraries: comrak for markdown, html5ever and
//!     markup5ever_rcdom for HTML, serde_json for JSON. Spreadsheets are read with calamine.
//!     Source markdown is deliberately not parsed with comrak: only ATX headers are structural
//!     and everything between them is classified paragraph by paragraph.

pub mod assembler;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod manifest;
pub mod publish;
pub mod registry;
pub mod sink;
pub mod source;
pub mod tabular;

pub use assembler::{
    heading_depth, AssembleOptions, Assembler, BatchResult, FileResult, FileStatus,
    GenerateOutcome, TableOptions,
};
pub use error::{FormatError, SourceError};
pub use format::Format;
pub use formats::markdown::parser::{parse_blocks, Block, BlockKind};
pub use ir::nodes::Document;
pub use manifest::{Manifest, SourceOptions, SourceSpec};
pub use registry::FormatRegistry;
pub use sink::{DocumentSink, Emphasis, ParagraphStyle};
pub use source::{FsSourceReader, SourceKind, SourceReader};
pub use tabular::{CellValue, Column, Number, TabularValue};

use std::path::Path;

/// Build a report from `sources` into a fresh document and write it to
/// `output`. Returns `false` when the report could not be written.
pub fn convert_mixed_content(sources: &[SourceSpec], output: &Path, title: Option<&str>) -> bool {
    Assembler::new(Document::default()).generate(sources, output, title)
}

/// Append `sources` to an existing document.
pub fn add_mixed_content_to_existing(
    document: &mut Document,
    sources: &[SourceSpec],
    start_level: u8,
) -> BatchResult {
    Assembler::new(document).add_batch(sources, start_level)
}

/// Append one markdown file to an existing document.
pub fn add_markdown_to_existing(
    document: &mut Document,
    path: &Path,
    start_level: u8,
) -> Result<bool, SourceError> {
    Assembler::new(document).add_markdown(path, start_level)
}

/// Append one spreadsheet table to an existing document.
pub fn add_table_to_existing(
    document: &mut Document,
    path: &Path,
    options: &TableOptions,
) -> Result<bool, SourceError> {
    Assembler::new(document).add_table(path, options)
}
