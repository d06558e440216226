//! Error types for format and source operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while serializing or persisting a document
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Writing the serialized document failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised by source collaborators while reading an input.
///
/// A source that simply does not exist is not an error: readers report it as
/// `Ok(None)` so the assembler can record it as `failed`.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    #[error("Sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    #[error("Unreadable source {path}: {message}")]
    Unreadable { path: PathBuf, message: String },
}
