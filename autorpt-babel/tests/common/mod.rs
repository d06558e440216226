//! Shared helpers for the integration tests.

use autorpt_babel::{Assembler, Document, SourceSpec};
use std::path::PathBuf;

/// Absolute path of a file under tests/fixtures.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Assemble fixture sources into a fresh document.
pub fn assemble(names: &[&str]) -> Document {
    let sources: Vec<SourceSpec> = names.iter().map(|name| fixture(name).into()).collect();
    let mut assembler = Assembler::new(Document::default());
    assembler.add_batch(&sources, 1);
    assembler.into_sink()
}
