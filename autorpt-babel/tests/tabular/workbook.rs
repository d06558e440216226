//! Reading the spreadsheet fixture through calamine

use crate::common::fixture;
use autorpt_babel::{CellValue, FsSourceReader, SourceError, SourceReader};

#[test]
fn test_first_sheet_by_default() {
    let value = FsSourceReader
        .read_table(&fixture("sales.xlsx"), None)
        .unwrap()
        .expect("workbook exists");

    let names: Vec<_> = value.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Region", "Units", "Revenue"]);
    let numeric: Vec<_> = value.columns.iter().map(|c| c.numeric).collect();
    assert_eq!(numeric, vec![false, true, true]);
    assert_eq!(value.row_count, 3);

    assert_eq!(value.rows[0][0], CellValue::text("North"));
    assert_eq!(value.rows[0][1].display(), "1,200");
    assert_eq!(value.rows[0][2].display(), "15,000.50");
    assert_eq!(value.rows[1][1], CellValue::Missing);
    assert_eq!(value.rows[2][2].display(), "1,000");
}

#[test]
fn test_named_sheet() {
    let value = FsSourceReader
        .read_table(&fixture("sales.xlsx"), Some("Targets"))
        .unwrap()
        .expect("sheet exists");
    assert_eq!(value.summary(), "Data summary: 1 rows, 2 columns");
    assert_eq!(value.rows[0][1].display(), "250,000");
}

#[test]
fn test_unknown_sheet_is_an_error() {
    let result = FsSourceReader.read_table(&fixture("sales.xlsx"), Some("Nope"));
    match result {
        Err(SourceError::SheetNotFound { sheet, .. }) => assert_eq!(sheet, "Nope"),
        other => panic!("expected SheetNotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_workbook_is_not_found() {
    let result = FsSourceReader.read_table(&fixture("absent.xlsx"), None);
    assert!(matches!(result, Ok(None)));
}
