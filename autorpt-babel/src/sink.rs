//! Document sink capability
//!
//! The renderers never build output formats directly. They drive a
//! [`DocumentSink`], which accumulates headings, paragraphs and tables and
//! finally persists itself. The IR [`Document`] is the built-in sink; tests
//! and embedders can supply their own.

use crate::error::FormatError;
use crate::ir::nodes::{Document, DocNode, Heading, InlineContent, List, ListItem, Paragraph, Table};
use crate::publish::{publish, PublishSpec};
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Deepest heading the sink supports. Depth 0 is the document title style.
pub const MAX_HEADING_DEPTH: u8 = 9;

/// Paragraph style tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    Bullet,
    Number,
}

/// Emphasis applied to every run of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Emphasis {
    #[default]
    None,
    Bold,
    Italic,
}

/// Something that accumulates document elements and can persist them.
pub trait DocumentSink {
    /// Add a heading. Depth 0 is the document title; depths above
    /// [`MAX_HEADING_DEPTH`] are clamped.
    fn add_heading(&mut self, text: &str, depth: u8);

    /// Add a paragraph with a style tag and emphasis on its runs.
    fn add_paragraph(&mut self, text: &str, style: ParagraphStyle, emphasis: Emphasis);

    /// Add a fully populated table.
    fn add_table(&mut self, table: Table);

    /// Persist the accumulated document to `path`.
    fn persist(
        &self,
        path: &Path,
        options: &HashMap<String, String>,
    ) -> Result<PathBuf, FormatError>;
}

impl<S: DocumentSink + ?Sized> DocumentSink for &mut S {
    fn add_heading(&mut self, text: &str, depth: u8) {
        (**self).add_heading(text, depth)
    }

    fn add_paragraph(&mut self, text: &str, style: ParagraphStyle, emphasis: Emphasis) {
        (**self).add_paragraph(text, style, emphasis)
    }

    fn add_table(&mut self, table: Table) {
        (**self).add_table(table)
    }

    fn persist(
        &self,
        path: &Path,
        options: &HashMap<String, String>,
    ) -> Result<PathBuf, FormatError> {
        (**self).persist(path, options)
    }
}

fn emphasized(text: &str, emphasis: Emphasis) -> Vec<InlineContent> {
    let run = InlineContent::Text(text.to_string());
    match emphasis {
        Emphasis::None => vec![run],
        Emphasis::Bold => vec![InlineContent::Bold(vec![run])],
        Emphasis::Italic => vec![InlineContent::Italic(vec![run])],
    }
}

impl DocumentSink for Document {
    fn add_heading(&mut self, text: &str, depth: u8) {
        if depth == 0 {
            // Latest title wins.
            self.title = Some(text.to_string());
            return;
        }
        self.children.push(DocNode::Heading(Heading {
            level: depth.min(MAX_HEADING_DEPTH),
            content: vec![InlineContent::Text(text.to_string())],
        }));
    }

    fn add_paragraph(&mut self, text: &str, style: ParagraphStyle, emphasis: Emphasis) {
        let content = emphasized(text, emphasis);
        let ordered = match style {
            ParagraphStyle::Normal => {
                self.children.push(DocNode::Paragraph(Paragraph { content }));
                return;
            }
            ParagraphStyle::Bullet => false,
            ParagraphStyle::Number => true,
        };

        // Consecutive list-styled paragraphs of the same kind form one list.
        if let Some(DocNode::List(list)) = self.children.last_mut() {
            if list.ordered == ordered {
                list.items.push(ListItem { content });
                return;
            }
        }
        self.children.push(DocNode::List(List {
            items: vec![ListItem { content }],
            ordered,
        }));
    }

    fn add_table(&mut self, table: Table) {
        self.children.push(DocNode::Table(table));
    }

    fn persist(
        &self,
        path: &Path,
        options: &HashMap<String, String>,
    ) -> Result<PathBuf, FormatError> {
        let registry = FormatRegistry::with_defaults();
        let filename = path.to_string_lossy();
        let format = registry
            .detect_format_from_filename(&filename)
            .ok_or_else(|| FormatError::FormatNotFound(filename.to_string()))?;

        let mut spec = PublishSpec::new(self, &format).with_output_path(path);
        for (key, value) in options {
            spec = spec.with_option(key.as_str(), value.as_str());
        }
        let result = publish(spec)?;
        Ok(result.into_path().unwrap_or_else(|| path.to_path_buf()))
    }
}
