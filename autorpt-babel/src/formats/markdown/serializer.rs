//! Markdown serialization (Document → Markdown export)
//!
//! Converts the assembled document to CommonMark with the GFM table
//! extension. Pipeline: IR nodes → Comrak AST → Markdown string

use crate::error::FormatError;
use crate::ir::nodes::{DocNode, Document, InlineContent, Table, TableCell, TableCellAlignment};
use comrak::nodes::{
    Ast, AstNode, ListDelimType, ListType, NodeHeading, NodeList, NodeTable, NodeValue,
    TableAlignment,
};
use comrak::{format_commonmark, Arena, ComrakOptions};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::RefCell;

// Comrak pads single-digit ordered markers to four columns (`1.  item`).
static WIDE_ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d+\.)  (\S)").unwrap());

/// Serialize a document to Markdown
pub fn serialize_to_markdown(doc: &Document) -> Result<String, FormatError> {
    let arena = Arena::new();
    let root = build_comrak_ast(&arena, doc);

    let mut output = Vec::new();
    let options = default_comrak_options();
    format_commonmark(root, &options, &mut output).map_err(|e| {
        FormatError::SerializationError(format!("Comrak serialization failed: {e}"))
    })?;

    let markdown = String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))?;

    // Comrak separates adjacent lists with an HTML comment
    let cleaned = markdown.replace("<!-- end list -->\n\n", "");
    let cleaned = WIDE_ORDERED_MARKER.replace_all(&cleaned, "$1 $2");

    Ok(prepend_title_as_h1(&cleaned, doc.title.as_deref()))
}

/// The document title is not part of the node sequence, so it is written as
/// a leading H1.
fn prepend_title_as_h1(markdown: &str, title: Option<&str>) -> String {
    match title {
        Some(t) => format!("# {t}\n\n{markdown}"),
        None => markdown.to_string(),
    }
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options
}

fn alloc<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

/// Build a Comrak AST from the flat node sequence
fn build_comrak_ast<'a>(arena: &'a Arena<AstNode<'a>>, doc: &Document) -> &'a AstNode<'a> {
    let root = alloc(arena, NodeValue::Document);

    for node in &doc.children {
        match node {
            DocNode::Heading(heading) => {
                // Markdown stops at h6; deeper headings share it
                let heading_node = alloc(
                    arena,
                    NodeValue::Heading(NodeHeading {
                        level: heading.level.clamp(1, 6),
                        setext: false,
                    }),
                );
                root.append(heading_node);
                add_inlines(arena, heading_node, &heading.content);
            }

            DocNode::Paragraph(paragraph) => {
                let para_node = alloc(arena, NodeValue::Paragraph);
                root.append(para_node);
                add_inlines(arena, para_node, &paragraph.content);
            }

            DocNode::List(list) => {
                let list_type = if list.ordered {
                    ListType::Ordered
                } else {
                    ListType::Bullet
                };
                let list_node = alloc(arena, NodeValue::List(list_meta(list_type)));
                root.append(list_node);

                for item in &list.items {
                    let item_node = alloc(arena, NodeValue::Item(list_meta(list_type)));
                    list_node.append(item_node);
                    let para_node = alloc(arena, NodeValue::Paragraph);
                    item_node.append(para_node);
                    add_inlines(arena, para_node, &item.content);
                }
            }

            DocNode::Table(table) => {
                if table.column_count() > 0 {
                    root.append(build_table(arena, table));
                }
            }
        }
    }

    root
}

fn list_meta(list_type: ListType) -> NodeList {
    NodeList {
        list_type,
        marker_offset: 0,
        padding: 0,
        start: 1,
        delimiter: ListDelimType::Period,
        bullet_char: b'-',
        tight: true,
    }
}

fn table_alignment(align: TableCellAlignment) -> TableAlignment {
    match align {
        TableCellAlignment::Left => TableAlignment::Left,
        TableCellAlignment::Right => TableAlignment::Right,
        TableCellAlignment::Center => TableAlignment::Center,
        TableCellAlignment::None => TableAlignment::None,
    }
}

/// GFM tables carry one alignment per column. A column takes the alignment
/// of its first body cell.
fn column_alignments(table: &Table) -> Vec<TableAlignment> {
    (0..table.column_count())
        .map(|col| {
            table
                .body()
                .first()
                .and_then(|row| row.cells.get(col))
                .map_or(TableAlignment::None, |cell| table_alignment(cell.align))
        })
        .collect()
}

fn build_table<'a>(arena: &'a Arena<AstNode<'a>>, table: &Table) -> &'a AstNode<'a> {
    let alignments = column_alignments(table);
    let table_node = alloc(
        arena,
        NodeValue::Table(NodeTable {
            num_columns: alignments.len(),
            num_rows: table.rows.len(),
            num_nonempty_cells: 0,
            alignments,
        }),
    );

    for (index, row) in table.rows.iter().enumerate() {
        let header = index < table.header_rows.max(1);
        let row_node = alloc(arena, NodeValue::TableRow(header));
        table_node.append(row_node);
        for cell in &row.cells {
            let cell_node = alloc(arena, NodeValue::TableCell);
            row_node.append(cell_node);
            add_cell_text(arena, cell_node, cell, header);
        }
    }

    table_node
}

fn add_cell_text<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    cell: &TableCell,
    header: bool,
) {
    if cell.text.is_empty() {
        return;
    }
    let text = alloc(arena, NodeValue::Text(cell.text.replace('\n', " ")));
    // Header cells already render bold
    if cell.bold && !header {
        let strong = alloc(arena, NodeValue::Strong);
        parent.append(strong);
        strong.append(text);
    } else {
        parent.append(text);
    }
}

fn add_inlines<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    content: &[InlineContent],
) {
    for inline in content {
        add_inline_to_node(arena, parent, inline);
    }
}

/// Add inline content to a comrak node
fn add_inline_to_node<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    inline: &InlineContent,
) {
    match inline {
        InlineContent::Text(text) => {
            parent.append(alloc(arena, NodeValue::Text(text.replace('\n', " "))));
        }

        InlineContent::Bold(children) => {
            let strong_node = alloc(arena, NodeValue::Strong);
            parent.append(strong_node);
            add_inlines(arena, strong_node, children);
        }

        InlineContent::Italic(children) => {
            let emph_node = alloc(arena, NodeValue::Emph);
            parent.append(emph_node);
            add_inlines(arena, emph_node, children);
        }
    }
}
