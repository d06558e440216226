//! Batches driven by the manifest fixture

use crate::common::fixture;
use autorpt_babel::ir::nodes::{plain_text, DocNode};
use autorpt_babel::{
    add_markdown_to_existing, add_mixed_content_to_existing, add_table_to_existing,
    convert_mixed_content, AssembleOptions, Assembler, Document, FileStatus, Manifest,
    SourceSpec, TableOptions,
};
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn manifest() -> Manifest {
    let text = fs::read_to_string(fixture("manifest.json")).unwrap();
    Manifest::from_json(&text)
        .unwrap()
        .resolve_relative_to(&fixture(""))
}

#[test]
fn test_manifest_batch_isolates_failures() {
    let manifest = manifest();
    let mut assembler = Assembler::new(Document::default());
    let result = assembler.add_batch(&manifest.sources, 1);

    let statuses: Vec<_> = result.files.iter().map(|f| f.status).collect();
    assert_eq!(
        statuses,
        vec![
            FileStatus::Success,
            FileStatus::Success,
            FileStatus::Failed,
            FileStatus::Error,
            FileStatus::Failed,
            FileStatus::Success,
        ]
    );
    assert_eq!(result.success_count, 3);
    assert_eq!(result.failed_count, 3);
    assert_eq!(result.error_count(), 1);
    assert!(result.files[3]
        .error
        .as_deref()
        .is_some_and(|e| e.contains("Nope")));

    let doc = assembler.into_sink();
    let headings: Vec<_> = doc
        .children
        .iter()
        .filter_map(|node| match node {
            DocNode::Heading(h) => Some((h.level, plain_text(&h.content))),
            _ => None,
        })
        .collect();
    assert_eq!(
        headings,
        vec![
            (1, "Overview".to_string()),
            (2, "Method".to_string()),
            (2, "Sales by Region".to_string()),
        ]
    );
}

#[test]
fn test_generate_writes_every_format() {
    let manifest = manifest();
    let dir = tempdir().unwrap();

    for name in ["report.html", "report.md", "report.json", "report.tree"] {
        let destination = dir.path().join(name);
        let ok = convert_mixed_content(
            &manifest.sources,
            &destination,
            manifest.title.as_deref(),
        );
        assert!(ok, "{name} was not written");
        let written = fs::read_to_string(&destination).unwrap();
        assert!(written.contains("Quarterly Report"), "{name} lacks the title");
        assert!(written.contains("Sales by Region"), "{name} lacks the table heading");
    }
}

#[test]
fn test_generate_reports_unwritable_destination() {
    let dir = tempdir().unwrap();
    let sources = vec![SourceSpec::from(fixture("intro.md"))];

    let unknown = dir.path().join("report.docx");
    assert!(!convert_mixed_content(&sources, &unknown, None));
    assert!(!unknown.exists());

    let missing_dir = dir.path().join("nope").join("report.html");
    assert!(!convert_mixed_content(&sources, &missing_dir, None));
}

#[test]
fn test_generate_with_format_options() {
    let dir = tempdir().unwrap();
    let destination = dir.path().join("report.html");
    let mut format_options = HashMap::new();
    format_options.insert("theme".to_string(), "serif".to_string());

    let mut assembler = Assembler::new(Document::default()).with_options(AssembleOptions {
        table_summary: false,
        format_options,
        ..AssembleOptions::default()
    });
    let outcome = assembler.generate_report(
        &[SourceSpec::from(fixture("sales.xlsx"))],
        &destination,
        Some("Sales"),
        1,
    );

    assert_eq!(outcome.saved.as_deref(), Some(destination.as_path()));
    let html = fs::read_to_string(&destination).unwrap();
    assert!(html.contains("Georgia"));
    assert!(!html.contains("Data summary"));
}

#[test]
fn test_existing_document_helpers() {
    let mut doc = Document::default();

    assert!(add_markdown_to_existing(&mut doc, &fixture("notes.markdown"), 1).unwrap());
    assert!(!add_markdown_to_existing(&mut doc, &fixture("absent.md"), 1).unwrap());

    let options = TableOptions {
        sheet_name: Some("Targets".to_string()),
        start_header_level: 3,
        ..TableOptions::default()
    };
    assert!(add_table_to_existing(&mut doc, &fixture("sales.xlsx"), &options).unwrap());

    let result = add_mixed_content_to_existing(
        &mut doc,
        &[SourceSpec::from(fixture("intro.md"))],
        2,
    );
    assert_eq!(result.success_count, 1);

    match &doc.children[2] {
        DocNode::Heading(h) => {
            assert_eq!(h.level, 3);
            assert_eq!(plain_text(&h.content), "Table: Targets");
        }
        other => panic!("expected table heading, got {other:?}"),
    }
    let overview = doc.children.iter().find_map(|node| match node {
        DocNode::Heading(h) if plain_text(&h.content) == "Overview" => Some(h.level),
        _ => None,
    });
    assert_eq!(overview, Some(2));
}
