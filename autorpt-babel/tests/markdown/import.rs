//! Markdown sources → document nodes

use crate::common::{assemble, fixture};
use autorpt_babel::ir::nodes::{plain_text, DocNode, InlineContent};
use autorpt_babel::{parse_blocks, BlockKind};
use std::fs;

fn texts(node: &DocNode) -> Vec<String> {
    match node {
        DocNode::Heading(h) => vec![plain_text(&h.content)],
        DocNode::Paragraph(p) => vec![plain_text(&p.content)],
        DocNode::List(l) => l.items.iter().map(|i| plain_text(&i.content)).collect(),
        DocNode::Table(_) => vec![],
    }
}

#[test]
fn test_fixture_blocks() {
    let text = fs::read_to_string(fixture("intro.md")).unwrap();
    let blocks = parse_blocks(&text);

    let kinds: Vec<_> = blocks.iter().map(|b| (b.kind, b.level)).collect();
    assert_eq!(kinds, vec![(BlockKind::Header, 1), (BlockKind::Header, 2)]);
    assert_eq!(blocks[0].title, "Overview");
    assert!(!blocks[0].body.contains("Prepared"));
    assert_eq!(blocks[1].title, "Method");
    assert!(blocks[1].body.ends_with("> Figures are unaudited."));
}

#[test]
fn test_fixture_document() {
    let doc = assemble(&["intro.md"]);
    let nodes: Vec<Vec<String>> = doc.children.iter().map(texts).collect();

    assert_eq!(
        nodes,
        vec![
            vec!["Overview"],
            vec!["Revenue grew in every region."],
            vec!["Costs stayed flat."],
            vec!["North led on units", "South recovered", "East is new"],
            vec!["Method"],
            vec!["Export the ledger", "Reconcile with `finance.xlsx`"],
            vec!["Figures are unaudited."],
        ]
    );

    assert!(matches!(&doc.children[0], DocNode::Heading(h) if h.level == 1));
    assert!(matches!(&doc.children[4], DocNode::Heading(h) if h.level == 2));
    assert!(matches!(&doc.children[5], DocNode::List(l) if l.ordered));
    match &doc.children[6] {
        DocNode::Paragraph(p) => assert!(matches!(p.content[0], InlineContent::Italic(_))),
        other => panic!("expected italic paragraph, got {other:?}"),
    }
}

#[test]
fn test_headerless_fixture() {
    let doc = assemble(&["notes.markdown"]);
    let nodes: Vec<Vec<String>> = doc.children.iter().map(texts).collect();
    assert_eq!(
        nodes,
        vec![
            vec!["Plain notes without any header."],
            vec!["Second paragraph."]
        ]
    );
}

#[test]
fn test_empty_fixture_adds_nothing() {
    let doc = assemble(&["empty.md"]);
    assert!(doc.children.is_empty());
}
