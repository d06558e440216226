//! Input sources
//!
//! Sources are classified by file extension and read through a
//! [`SourceReader`]. Readers distinguish a source that is not there
//! (`Ok(None)`) from one that is there but cannot be read (`Err`).

use crate::error::SourceError;
use crate::tabular::{reader, TabularValue};
use calamine::{open_workbook_auto, Reader};
use std::fs;
use std::io;
use std::path::Path;

/// What kind of content a source path holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Markdown,
    Tabular,
}

impl SourceKind {
    /// Classify by extension, ignoring case. Unknown extensions yield `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "md" | "markdown" => Some(SourceKind::Markdown),
            "xlsx" | "xls" => Some(SourceKind::Tabular),
            _ => None,
        }
    }
}

/// Reads source content on behalf of the assembler.
pub trait SourceReader {
    /// Read a text source.
    fn read_text(&self, path: &Path) -> Result<Option<String>, SourceError>;

    /// Read one sheet of a tabular source, or its first sheet when `sheet`
    /// is `None`.
    fn read_table(
        &self,
        path: &Path,
        sheet: Option<&str>,
    ) -> Result<Option<TabularValue>, SourceError>;
}

/// Reads sources from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read_text(&self, path: &Path) -> Result<Option<String>, SourceError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SourceError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn read_table(
        &self,
        path: &Path,
        sheet: Option<&str>,
    ) -> Result<Option<TabularValue>, SourceError> {
        if !path.exists() {
            return Ok(None);
        }

        let mut workbook = open_workbook_auto(path).map_err(|source| SourceError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

        let names = workbook.sheet_names();
        let name = match sheet {
            Some(sheet) if names.iter().any(|name| name == sheet) => sheet.to_string(),
            Some(sheet) => {
                return Err(SourceError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: sheet.to_string(),
                })
            }
            None => match names.first() {
                Some(first) => first.clone(),
                None => return Ok(None),
            },
        };

        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| SourceError::Workbook {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Some(reader::from_range(&range)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_kind_from_extension() {
        let kind = |p: &str| SourceKind::from_path(Path::new(p));
        assert_eq!(kind("notes.md"), Some(SourceKind::Markdown));
        assert_eq!(kind("notes.MARKDOWN"), Some(SourceKind::Markdown));
        assert_eq!(kind("data.xlsx"), Some(SourceKind::Tabular));
        assert_eq!(kind("data.XLS"), Some(SourceKind::Tabular));
        assert_eq!(kind("data.csv"), None);
        assert_eq!(kind("README"), None);
    }

    #[test]
    fn test_missing_text_source_is_none() {
        let dir = tempdir().unwrap();
        let result = FsSourceReader.read_text(&dir.path().join("absent.md"));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_reads_text_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Notes\n").unwrap();
        assert_eq!(
            FsSourceReader.read_text(&path).unwrap().as_deref(),
            Some("# Notes\n")
        );
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempdir().unwrap();
        let result = FsSourceReader.read_text(dir.path());
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_missing_workbook_is_none() {
        let path = PathBuf::from("definitely/not/here.xlsx");
        assert!(matches!(FsSourceReader.read_table(&path, None), Ok(None)));
    }

    #[test]
    fn test_corrupt_workbook_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        fs::write(&path, "not a zip archive").unwrap();
        let result = FsSourceReader.read_table(&path, None);
        assert!(matches!(result, Err(SourceError::Workbook { .. })));
    }
}
