//! Document → Markdown output
//!
//! The written markdown is parsed back with comrak and checked by node type.

use crate::common::assemble;
use comrak::nodes::{AstNode, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};
use autorpt_babel::format::Format;
use autorpt_babel::formats::markdown::MarkdownFormat;
use std::collections::HashSet;

fn collect_node_types<'a>(node: &'a AstNode<'a>, types: &mut HashSet<&'static str>) {
    let type_name = match &node.data.borrow().value {
        NodeValue::Document => "Document",
        NodeValue::Paragraph => "Paragraph",
        NodeValue::Heading(_) => "Heading",
        NodeValue::List(_) => "List",
        NodeValue::Item(_) => "Item",
        NodeValue::Emph => "Emph",
        NodeValue::Strong => "Strong",
        NodeValue::Table(_) => "Table",
        NodeValue::Text(_) => "Text",
        _ => "Other",
    };
    types.insert(type_name);
    for child in node.children() {
        collect_node_types(child, types);
    }
}

fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options
}

#[test]
fn test_export_round_trips_through_comrak() {
    let doc = assemble(&["intro.md", "sales.xlsx"]);
    let md = MarkdownFormat.serialize(&doc).unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, &md, &comrak_options());
    let mut types = HashSet::new();
    collect_node_types(root, &mut types);

    for expected in ["Heading", "Paragraph", "List", "Item", "Emph", "Table"] {
        assert!(types.contains(expected), "missing {expected} in:\n{md}");
    }
}

#[test]
fn test_table_columns_are_right_aligned() {
    let doc = assemble(&["sales.xlsx"]);
    let md = MarkdownFormat.serialize(&doc).unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, &md, &comrak_options());
    let table = root
        .descendants()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Table(_)))
        .expect("table node");

    let alignments = match &table.data.borrow().value {
        NodeValue::Table(table) => table.alignments.clone(),
        _ => unreachable!(),
    };
    assert_eq!(
        alignments,
        vec![
            TableAlignment::None,
            TableAlignment::Right,
            TableAlignment::Right
        ]
    );
    assert!(md.contains("# Table: sales"));
    assert!(md.contains("Data summary: 3 rows, 3 columns"));
    assert!(md.contains("| North | 1,200 | 15,000.50 |"));
}
