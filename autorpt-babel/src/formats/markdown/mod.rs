//! Markdown format implementation
//!
//! Markdown appears twice in this crate, with different jobs:
//!
//! - [`parser`] splits markdown *sources* into header sections. It is a
//!   line scanner, not a CommonMark parser: only ATX headers are structural,
//!   everything else is body text for the content formatter.
//! - [`serializer`] writes the assembled document as CommonMark *output*.
//!
//! # Library Choice
//!
//! Output goes through `comrak`: its AST serializer handles escaping, list
//! markers and GFM tables, so no markdown is assembled by hand.
//!
//! # Element Mapping Table
//!
//! | Document node    | Markdown output         | Notes                                  |
//! |------------------|-------------------------|----------------------------------------|
//! | Title            | `# Title`               | Prepended before the first node        |
//! | Heading          | `#` to `######`         | Depths 7..=9 collapse to h6            |
//! | Paragraph        | Paragraph               | Emphasis becomes `*x*` / `**x**`       |
//! | List             | `- item` / `1. item`    | Tight lists                            |
//! | Table            | GFM table               | Column alignment from the first row    |
//!
//! # Lossy Conversions
//!
//! - Headings deeper than 6 are written as h6
//! - Per-cell alignment is reduced to one alignment per column

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for Markdown output
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with GFM tables"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc)
    }
}
