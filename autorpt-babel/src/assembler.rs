//! Document assembly
//!
//! The [`Assembler`] drives the parser, the content formatter and the table
//! renderer against a [`DocumentSink`], one source at a time. It owns the
//! sink for the duration of a run and reads sources through a
//! [`SourceReader`].
//!
//! Failure handling is per source. A missing or empty source is reported as
//! `Ok(false)` by the single-source entry points and recorded as `failed` in
//! a batch. A source that exists but cannot be read is an `Err` from the
//! single-source entry points and an `error` entry in a batch. Nothing that
//! goes wrong with one source stops the batch.

use crate::common::content::render_content;
use crate::error::SourceError;
use crate::formats::markdown::parser::parse_blocks;
use crate::manifest::SourceSpec;
use crate::sink::{DocumentSink, Emphasis, ParagraphStyle, MAX_HEADING_DEPTH};
use crate::source::{FsSourceReader, SourceKind, SourceReader};
use crate::tabular::{render_table, TabularValue};
use log::{error, info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Heading depth for a markdown header of `level` when the source starts at
/// `start`. Always within `1..=9`.
pub fn heading_depth(start: u8, level: u8) -> u8 {
    let depth = (u16::from(start) + u16::from(level)).saturating_sub(1);
    depth.clamp(1, u16::from(MAX_HEADING_DEPTH)) as u8
}

/// Run-wide settings, usually taken from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Emit a heading above each table unless the source says otherwise.
    pub include_table_header: bool,
    /// Emit the "Data summary" line above each table.
    pub table_summary: bool,
    /// Options handed to the output format when persisting.
    pub format_options: HashMap<String, String>,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        AssembleOptions {
            include_table_header: true,
            table_summary: true,
            format_options: HashMap::new(),
        }
    }
}

/// Options for a single tabular source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub sheet_name: Option<String>,
    pub table_title: Option<String>,
    pub include_header: bool,
    pub start_header_level: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            sheet_name: None,
            table_title: None,
            include_header: true,
            start_header_level: 1,
        }
    }
}

impl TableOptions {
    /// The explicit title, else `Table: {sheet}`, else `Table: {file stem}`.
    pub fn title_for(&self, path: &Path) -> String {
        if let Some(title) = &self.table_title {
            return title.clone();
        }
        match &self.sheet_name {
            Some(sheet) => format!("Table: {sheet}"),
            None => {
                let stem = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy())
                    .unwrap_or_default();
                format!("Table: {stem}")
            }
        }
    }
}

/// Outcome of one source in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Success,
    Failed,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    #[serde(rename = "file")]
    pub path: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-source tally of a batch. Entries are appended in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub success_count: usize,
    /// Sources recorded as `failed` or `error`.
    pub failed_count: usize,
    pub files: Vec<FileResult>,
}

impl BatchResult {
    fn record(&mut self, path: &Path, outcome: Result<bool, SourceError>) {
        let (status, error) = match outcome {
            Ok(true) => (FileStatus::Success, None),
            Ok(false) => (FileStatus::Failed, None),
            Err(err) => (FileStatus::Error, Some(err.to_string())),
        };
        if status == FileStatus::Success {
            self.success_count += 1;
        } else {
            self.failed_count += 1;
        }
        self.files.push(FileResult {
            path: path.to_path_buf(),
            status,
            error,
        });
    }

    pub fn error_count(&self) -> usize {
        self.files
            .iter()
            .filter(|file| file.status == FileStatus::Error)
            .count()
    }
}

/// Result of a full generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateOutcome {
    pub batch: BatchResult,
    /// Where the document was written; `None` when persisting failed.
    pub saved: Option<PathBuf>,
}

/// Assembles sources into a document sink.
pub struct Assembler<S, R = FsSourceReader> {
    sink: S,
    reader: R,
    options: AssembleOptions,
}

impl<S: DocumentSink> Assembler<S, FsSourceReader> {
    /// An assembler reading sources from the filesystem.
    pub fn new(sink: S) -> Self {
        Self::with_reader(sink, FsSourceReader)
    }
}

impl<S: DocumentSink, R: SourceReader> Assembler<S, R> {
    pub fn with_reader(sink: S, reader: R) -> Self {
        Assembler {
            sink,
            reader,
            options: AssembleOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AssembleOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Parse markdown text and render every block into the sink.
    ///
    /// Returns `false` when the text holds no blocks.
    pub fn add_markdown_text(&mut self, text: &str, start_level: u8) -> bool {
        let blocks = parse_blocks(text);
        if blocks.is_empty() {
            return false;
        }

        for block in &blocks {
            if block.is_header() {
                self.sink
                    .add_heading(&block.title, heading_depth(start_level, block.level));
            }
            if !block.body.trim().is_empty() {
                render_content(&block.body, &mut self.sink);
            }
        }
        true
    }

    /// Add a markdown file.
    pub fn add_markdown(&mut self, path: &Path, start_level: u8) -> Result<bool, SourceError> {
        let Some(text) = self.reader.read_text(path)? else {
            warn!("Markdown file not found: {}", path.display());
            return Ok(false);
        };
        let added = self.add_markdown_text(&text, start_level);
        if !added {
            warn!("Markdown file is empty: {}", path.display());
        }
        Ok(added)
    }

    /// Render an already ingested table, preceded by its heading and summary.
    ///
    /// Returns `false` when the value has no columns.
    pub fn add_table_value(
        &mut self,
        value: &TabularValue,
        title: &str,
        include_header: bool,
        start_level: u8,
    ) -> bool {
        if value.is_empty() {
            return false;
        }
        if include_header {
            self.sink.add_heading(title, heading_depth(start_level, 1));
        }
        if self.options.table_summary {
            self.sink
                .add_paragraph(&value.summary(), ParagraphStyle::Normal, Emphasis::None);
        }
        render_table(value, &mut self.sink);
        info!("Added table: {title}");
        true
    }

    /// Add one sheet of a spreadsheet file.
    pub fn add_table(&mut self, path: &Path, options: &TableOptions) -> Result<bool, SourceError> {
        let Some(value) = self
            .reader
            .read_table(path, options.sheet_name.as_deref())?
        else {
            warn!("Spreadsheet not found: {}", path.display());
            return Ok(false);
        };
        let added = self.add_table_value(
            &value,
            &options.title_for(path),
            options.include_header,
            options.start_header_level,
        );
        if !added {
            warn!("Spreadsheet has no columns: {}", path.display());
        }
        Ok(added)
    }

    /// Add one source, dispatching on its kind.
    ///
    /// Unsupported kinds return `Ok(false)` without reading the source.
    pub fn add_source(&mut self, spec: &SourceSpec, start_level: u8) -> Result<bool, SourceError> {
        let path = spec.path();
        let options = spec.options();
        let start_level = options.start_header_level.unwrap_or(start_level);

        match SourceKind::from_path(path) {
            Some(SourceKind::Markdown) => self.add_markdown(path, start_level),
            Some(SourceKind::Tabular) => {
                let table = TableOptions {
                    sheet_name: options.sheet_name,
                    table_title: options.table_title,
                    include_header: options
                        .include_header
                        .unwrap_or(self.options.include_table_header),
                    start_header_level: start_level,
                };
                self.add_table(path, &table)
            }
            None => {
                let extension = path
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default();
                warn!("Unsupported file type '{extension}': {}", path.display());
                Ok(false)
            }
        }
    }

    /// Add every source in order, isolating failures per source.
    pub fn add_batch(&mut self, sources: &[SourceSpec], start_level: u8) -> BatchResult {
        let mut result = BatchResult::default();
        for spec in sources {
            let outcome = self.add_source(spec, start_level);
            if let Err(err) = &outcome {
                error!("Error processing {}: {err}", spec.path().display());
            }
            result.record(spec.path(), outcome);
        }
        result
    }

    /// Persist the sink to `destination` with the configured format options.
    pub fn persist(&self, destination: &Path) -> Option<PathBuf> {
        match self
            .sink
            .persist(destination, &self.options.format_options)
        {
            Ok(path) => {
                info!("Report saved: {}", path.display());
                Some(path)
            }
            Err(err) => {
                error!("Error saving document: {err}");
                None
            }
        }
    }
}

impl<S: DocumentSink + Default, R: SourceReader> Assembler<S, R> {
    /// Build a fresh document from `sources` and persist it.
    pub fn generate_report(
        &mut self,
        sources: &[SourceSpec],
        destination: &Path,
        title: Option<&str>,
        start_level: u8,
    ) -> GenerateOutcome {
        self.sink = S::default();
        if let Some(title) = title.filter(|title| !title.is_empty()) {
            self.sink.add_heading(title, 0);
        }

        let batch = self.add_batch(sources, start_level);
        let saved = self.persist(destination);
        if saved.is_some() {
            info!(
                "Processed {} files successfully, {} failed",
                batch.success_count, batch.failed_count
            );
        }
        GenerateOutcome { batch, saved }
    }

    /// Build and persist a report. Returns `false` when persisting fails.
    pub fn generate(
        &mut self,
        sources: &[SourceSpec],
        destination: &Path,
        title: Option<&str>,
    ) -> bool {
        self.generate_report(sources, destination, title, 1)
            .saved
            .is_some()
    }
}
