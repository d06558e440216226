//! Core data structures for the Intermediate Representation (IR).
//!
//! The IR is flat: headings do not own the content that follows them, they
//! are simply the next node in sequence. This mirrors how the document sink
//! is driven (append heading, append paragraph, append table).

use serde::Serialize;

/// A universal, semantic representation of a document node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocNode {
    Heading(Heading),
    Paragraph(Paragraph),
    List(List),
    Table(Table),
}

/// Represents the root of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Document title, rendered with the title style (heading depth 0).
    pub title: Option<String>,
    pub children: Vec<DocNode>,
}

/// Represents a heading with a specific level (1..=9).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub content: Vec<InlineContent>,
}

/// Represents a paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub content: Vec<InlineContent>,
}

/// Represents a list of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub items: Vec<ListItem>,
    pub ordered: bool,
}

/// Represents an item in a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub content: Vec<InlineContent>,
}

/// Represents a table as an addressable grid of cells.
///
/// The first `header_rows` rows are header rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
    pub header_rows: usize,
}

/// Represents a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// Represents a table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableCell {
    pub text: String,
    pub bold: bool,
    pub align: TableCellAlignment,
}

/// Alignment of a table cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableCellAlignment {
    Left,
    Center,
    Right,
    #[default]
    None,
}

/// Represents inline content. Only emphasis runs are modelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum InlineContent {
    Text(String),
    Bold(Vec<InlineContent>),
    Italic(Vec<InlineContent>),
}

impl InlineContent {
    /// The plain text of this run with emphasis removed.
    pub fn plain_text(&self) -> String {
        match self {
            InlineContent::Text(text) => text.clone(),
            InlineContent::Bold(children) | InlineContent::Italic(children) => {
                children.iter().map(InlineContent::plain_text).collect()
            }
        }
    }
}

/// Concatenate the plain text of a sequence of inline runs.
pub fn plain_text(content: &[InlineContent]) -> String {
    content.iter().map(InlineContent::plain_text).collect()
}

impl Table {
    /// Create an empty `row_count` x `col_count` grid. The first row is the header.
    pub fn new(row_count: usize, col_count: usize) -> Self {
        let rows = (0..row_count)
            .map(|_| TableRow {
                cells: vec![TableCell::default(); col_count],
            })
            .collect();
        Table {
            rows,
            header_rows: usize::from(row_count > 0),
        }
    }

    /// Address a single cell for editing.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.cells.get_mut(col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(col)
    }

    pub fn header(&self) -> &[TableRow] {
        &self.rows[..self.header_rows.min(self.rows.len())]
    }

    pub fn body(&self) -> &[TableRow] {
        &self.rows[self.header_rows.min(self.rows.len())..]
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }
}
