//! Content formatting: block body → sink primitives
//!
//! A block body is split into paragraph candidates on blank lines. Each
//! candidate is classified once, by its first line, and rendered as a whole:
//!
//! | First line          | Fragment       | Rendered as                        |
//! |---------------------|----------------|------------------------------------|
//! | `- ` or `* `        | BulletList     | one bullet item per marker line    |
//! | `^\d+\.\s`          | NumberedList   | one numbered item per marker line  |
//! | `> `                | Blockquote     | one italic paragraph per `> ` line |
//! | anything else       | Paragraph      | one paragraph per non-empty line   |
//!
//! Lines inside a list or quote fragment that do not carry the fragment's
//! marker are dropped rather than re-classified. Nothing in here fails:
//! malformed lines simply produce no output.

use super::inline::strip_inline_markup;
use crate::sink::{DocumentSink, Emphasis, ParagraphStyle};
use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t\r]*\n)+").unwrap());
static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Formatting class of one paragraph candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    BulletList,
    NumberedList,
    Blockquote,
    Paragraph,
}

impl FragmentKind {
    /// Classify a trimmed paragraph candidate by its leading characters.
    pub fn classify(candidate: &str) -> Self {
        if is_bullet(candidate) {
            FragmentKind::BulletList
        } else if NUMBERED.is_match(candidate) {
            FragmentKind::NumberedList
        } else if candidate.starts_with("> ") {
            FragmentKind::Blockquote
        } else {
            FragmentKind::Paragraph
        }
    }
}

fn is_bullet(line: &str) -> bool {
    line.starts_with("- ") || line.starts_with("* ")
}

/// Split a body into trimmed, non-empty paragraph candidates.
pub fn split_paragraphs(body: &str) -> Vec<&str> {
    BLANK_LINES
        .split(body)
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .collect()
}

/// Render a block body into the sink, fragment by fragment.
pub fn render_content<S: DocumentSink + ?Sized>(body: &str, sink: &mut S) {
    for candidate in split_paragraphs(body) {
        match FragmentKind::classify(candidate) {
            FragmentKind::BulletList => render_bullets(candidate, sink),
            FragmentKind::NumberedList => render_numbered(candidate, sink),
            FragmentKind::Blockquote => render_quote(candidate, sink),
            FragmentKind::Paragraph => render_paragraph(candidate, sink),
        }
    }
}

fn render_bullets<S: DocumentSink + ?Sized>(candidate: &str, sink: &mut S) {
    for line in candidate.lines().map(str::trim).filter(|l| is_bullet(l)) {
        let text = line[2..].trim();
        if !text.is_empty() {
            sink.add_paragraph(text, ParagraphStyle::Bullet, Emphasis::None);
        }
    }
}

fn render_numbered<S: DocumentSink + ?Sized>(candidate: &str, sink: &mut S) {
    for line in candidate.lines().map(str::trim) {
        if let Some(marker) = NUMBERED.find(line) {
            let text = line[marker.end()..].trim();
            if !text.is_empty() {
                sink.add_paragraph(text, ParagraphStyle::Number, Emphasis::None);
            }
        }
    }
}

fn render_quote<S: DocumentSink + ?Sized>(candidate: &str, sink: &mut S) {
    for line in candidate.lines().map(str::trim) {
        if let Some(text) = line.strip_prefix("> ") {
            let text = text.trim();
            if !text.is_empty() {
                sink.add_paragraph(text, ParagraphStyle::Normal, Emphasis::Italic);
            }
        }
    }
}

fn render_paragraph<S: DocumentSink + ?Sized>(candidate: &str, sink: &mut S) {
    let stripped = strip_inline_markup(candidate);
    for line in stripped.lines().map(str::trim).filter(|l| !l.is_empty()) {
        sink.add_paragraph(line, ParagraphStyle::Normal, Emphasis::None);
    }
}
