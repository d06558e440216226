//! Outline formatter for assembled documents
//!
//! The outline is a visual tree of the document, one node per line, meant
//! for inspecting what a run produced. Labels are truncated to 30 characters.
//!
//! ```text
//! ⧉ Quarterly Report
//! ├─ § 1 Overview
//! ├─ ¶ Revenue grew in every region…
//! ├─ ☰ 2 items
//! │ ├─ • North
//! │ └─ • South
//! └─ ▦ 1 rows × 2 columns
//!   ├─ ≡ Region | Revenue
//!   └─ ≡ North | 1,000
//! ```
//!
//! Icons
//!     Document: ⧉
//!     Heading: § (followed by its depth)
//!     Paragraph: ¶ (𝐼 or 𝐁 marks emphasized text)
//!     List: ☰ (ordered lists say so)
//!     ListItem: •
//!     Table: ▦
//!     TableRow: ≡

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{plain_text, DocNode, Document, InlineContent};

const MAX_LABEL: usize = 30;

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_LABEL - 1).collect();
        format!("{}…", cut.trim_end())
    }
}

fn emphasis_marker(content: &[InlineContent]) -> &'static str {
    match content.first() {
        Some(InlineContent::Italic(_)) => "𝐼 ",
        Some(InlineContent::Bold(_)) => "𝐁 ",
        _ => "",
    }
}

fn node_label(node: &DocNode) -> String {
    match node {
        DocNode::Heading(heading) => {
            format!("§ {} {}", heading.level, truncate(&plain_text(&heading.content)))
        }
        DocNode::Paragraph(paragraph) => format!(
            "¶ {}{}",
            emphasis_marker(&paragraph.content),
            truncate(&plain_text(&paragraph.content))
        ),
        DocNode::List(list) if list.ordered => format!("☰ {} items, ordered", list.items.len()),
        DocNode::List(list) => format!("☰ {} items", list.items.len()),
        DocNode::Table(table) => format!(
            "▦ {} rows × {} columns",
            table.body().len(),
            table.column_count()
        ),
    }
}

fn child_labels(node: &DocNode) -> Vec<String> {
    match node {
        DocNode::List(list) => list
            .items
            .iter()
            .map(|item| format!("• {}", truncate(&plain_text(&item.content))))
            .collect(),
        DocNode::Table(table) => table
            .rows
            .iter()
            .map(|row| {
                let cells: Vec<&str> = row.cells.iter().map(|cell| cell.text.as_str()).collect();
                format!("≡ {}", truncate(&cells.join(" | ")))
            })
            .collect(),
        DocNode::Heading(_) | DocNode::Paragraph(_) => Vec::new(),
    }
}

/// Render the document outline.
pub fn to_outline(doc: &Document) -> String {
    let mut output = format!("⧉ {}\n", truncate(doc.title.as_deref().unwrap_or("Document")));

    let count = doc.children.len();
    for (index, node) in doc.children.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└─" } else { "├─" };
        let prefix = if is_last { "  " } else { "│ " };
        output.push_str(&format!("{connector} {}\n", node_label(node)));

        let children = child_labels(node);
        let child_count = children.len();
        for (child_index, label) in children.iter().enumerate() {
            let child_connector = if child_index + 1 == child_count {
                "└─"
            } else {
                "├─"
            };
            output.push_str(&format!("{prefix}{child_connector} {label}\n"));
        }
    }

    output
}

/// Format implementation for the document outline
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineFormat;

impl Format for OutlineFormat {
    fn name(&self) -> &str {
        "outline"
    }

    fn description(&self) -> &str {
        "Visual tree of the assembled document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_outline(doc))
    }
}
