//! Markdown block parser (Markdown → Blocks)
//!
//! Splits markdown text into a flat sequence of sections, one per ATX header.
//! This is deliberately not a CommonMark parser: it only recognises `#`
//! headers and keeps everything between two headers as raw body text, which
//! the content formatter later classifies paragraph by paragraph.
//!
//! # Algorithm
//!
//! Lines are scanned once, in order. A line is a header when, after trimming,
//! it matches `^(#{1,6})\s+(.+)`. A header closes the open section (its body
//! is the accumulated lines joined by newlines, then trimmed) and opens a new
//! one. Any other line, blank lines included, goes to the current
//! accumulator so paragraph boundaries survive.
//!
//! Text before the first header is dropped once a header arrives. Input with
//! no headers at all becomes a single content block.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)").unwrap());

/// Kind of a parsed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Header,
    Content,
}

/// One parsed unit of markdown input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Number of `#` markers (1..=6) for headers, 0 for content blocks.
    pub level: u8,
    /// Header title; empty for content blocks.
    pub title: String,
    /// Raw text up to the next header, trimmed.
    pub body: String,
}

impl Block {
    pub fn header(level: u8, title: impl Into<String>, body: impl Into<String>) -> Self {
        Block {
            kind: BlockKind::Header,
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn content(body: impl Into<String>) -> Self {
        Block {
            kind: BlockKind::Content,
            level: 0,
            title: String::new(),
            body: body.into(),
        }
    }

    pub fn is_header(&self) -> bool {
        self.kind == BlockKind::Header
    }
}

/// Match a header line, returning its level and trimmed title.
pub fn match_header(line: &str) -> Option<(u8, &str)> {
    let caps = HEADER.captures(line.trim())?;
    let level = caps.get(1)?.as_str().len() as u8;
    let title = caps.get(2)?.as_str().trim();
    Some((level, title))
}

struct Section<'a> {
    level: u8,
    title: &'a str,
    lines: Vec<&'a str>,
}

fn join_body(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

/// Parse markdown text into an ordered sequence of blocks.
///
/// Blank or empty input yields an empty sequence; parsing never fails.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Section<'_>> = None;

    for line in text.lines() {
        if let Some((level, title)) = match_header(line) {
            if let Some(section) = current.take() {
                blocks.push(Block::header(
                    section.level,
                    section.title,
                    join_body(&section.lines),
                ));
            }
            current = Some(Section {
                level,
                title,
                lines: Vec::new(),
            });
        } else if let Some(section) = current.as_mut() {
            section.lines.push(line);
        }
    }

    if let Some(section) = current {
        blocks.push(Block::header(
            section.level,
            section.title,
            join_body(&section.lines),
        ));
    }

    if blocks.is_empty() && !text.trim().is_empty() {
        blocks.push(Block::content(text.trim()));
    }

    blocks
}
