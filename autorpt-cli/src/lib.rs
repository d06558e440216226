//! Helpers behind the `autorpt` binary.
//!
//! main.rs stays a thin dispatcher: argument parsing lives in [`cli`], and
//! everything that decides *what* to do with the arguments (merging a manifest
//! with positional inputs, layering configuration, rendering inspect output)
//! lives here so it can be unit tested without spawning the binary.

pub mod cli;

use autorpt_babel::{
    parse_blocks, BatchResult, Block, BlockKind, FileStatus, Manifest, SourceSpec,
};
use autorpt_config::{ConfigError, Loader, ReportConfig, LOCAL_CONFIG_FILE};
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest '{path}': {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no output file given; use -o or set \"output\" in the manifest")]
    MissingOutput,
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Log level forced by `--verbose`/`--quiet`, if any.
pub fn level_override(verbose: bool, quiet: bool) -> Option<LevelFilter> {
    if verbose {
        Some(LevelFilter::Debug)
    } else if quiet {
        Some(LevelFilter::Error)
    } else {
        None
    }
}

/// Everything `generate` needs, after merging flags with a manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub sources: Vec<SourceSpec>,
    pub output: PathBuf,
    pub title: Option<String>,
    pub start_level: Option<u8>,
}

/// Read a manifest file and resolve its relative paths against its directory.
pub fn load_manifest(path: &Path) -> Result<Manifest, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = Manifest::from_json(&text).map_err(|source| CliError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(manifest.resolve_relative_to(base))
}

/// Merge positional inputs and flags over an optional manifest.
///
/// Manifest sources come first, then the positional inputs. Flags win over
/// manifest values.
pub fn collect_request(
    inputs: Vec<PathBuf>,
    manifest: Option<Manifest>,
    output: Option<PathBuf>,
    title: Option<String>,
    start_level: Option<u8>,
) -> Result<ReportRequest, CliError> {
    let manifest = manifest.unwrap_or_default();
    let mut sources = manifest.sources;
    sources.extend(inputs.into_iter().map(SourceSpec::from));

    let output = output
        .or_else(|| manifest.output.clone())
        .ok_or(CliError::MissingOutput)?;

    Ok(ReportRequest {
        sources,
        output,
        title: title.or(manifest.title),
        start_level: start_level.or(manifest.start_header_level),
    })
}

/// Layer defaults, `./autorpt.toml`, an explicit config file and the
/// request's overrides.
pub fn load_config(
    explicit_path: Option<&Path>,
    request: &ReportRequest,
) -> Result<ReportConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = explicit_path {
        loader = loader.with_file(path);
    }
    if let Some(title) = &request.title {
        loader = loader.set_override("report.title", title.as_str())?;
    }
    if let Some(level) = request.start_level {
        loader = loader.set_override("report.start_header_level", i64::from(level))?;
    }
    Ok(loader.build()?)
}

/// Text printed after a `generate` run.
pub fn batch_summary(batch: &BatchResult) -> String {
    let mut out = format!(
        "Processed {} files successfully, {} failed\n",
        batch.success_count, batch.failed_count
    );
    for file in &batch.files {
        if file.status == FileStatus::Success {
            continue;
        }
        let status = match file.status {
            FileStatus::Error => "error",
            _ => "failed",
        };
        match &file.error {
            Some(reason) => out.push_str(&format!(
                "  {status}: {} ({reason})\n",
                file.path.display()
            )),
            None => out.push_str(&format!("  {status}: {}\n", file.path.display())),
        }
    }
    out
}

/// Render parsed blocks for `inspect`.
pub fn render_blocks(text: &str, json: bool) -> Result<String, serde_json::Error> {
    let blocks = parse_blocks(text);
    if json {
        let mut out = serde_json::to_string_pretty(&blocks)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(blocks.iter().map(describe_block).collect())
}

fn describe_block(block: &Block) -> String {
    let mut out = match block.kind {
        BlockKind::Header => format!("header h{}: {}\n", block.level, block.title),
        BlockKind::Content => "content\n".to_string(),
    };
    for line in block.body.lines() {
        out.push_str("    | ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
