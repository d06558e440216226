//! Spreadsheet ingestion (worksheet range → TabularValue)
//!
//! The first non-blank row of a worksheet is the header; every following
//! non-blank row is data. Blank header cells are named `Unnamed: {index}`.

use super::{CellValue, TabularValue};
use calamine::{Data, ExcelDateTime, Range};

/// Classify one raw worksheet cell.
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(value) => CellValue::int(*value),
        Data::Float(value) => CellValue::float(*value),
        Data::String(text) if text.trim().is_empty() => CellValue::Missing,
        Data::String(text) => CellValue::text(text.clone()),
        Data::Bool(true) => CellValue::text("TRUE"),
        Data::Bool(false) => CellValue::text("FALSE"),
        Data::Empty => CellValue::Missing,
        Data::DateTime(value) => CellValue::text(excel_datetime_text(value)),
        other => CellValue::text(other.to_string()),
    }
}

/// Render an Excel serial date or duration as text.
fn excel_datetime_text(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        if let Some(duration) = value.as_duration() {
            let seconds = duration.num_seconds();
            let sign = if seconds < 0 { "-" } else { "" };
            let seconds = seconds.abs();
            return format!(
                "{sign}{}:{:02}:{:02}",
                seconds / 3600,
                seconds % 3600 / 60,
                seconds % 60
            );
        }
    } else if let Some(datetime) = value.as_datetime() {
        return datetime.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    value.to_string()
}

fn is_blank(row: &[Data]) -> bool {
    row.iter().all(|cell| cell_value(cell).is_missing())
}

fn column_name(index: usize, data: &Data) -> String {
    match cell_value(data) {
        CellValue::Missing => format!("Unnamed: {index}"),
        other => other.display(),
    }
}

/// Build a tabular value from worksheet rows.
pub fn from_rows<'a, I>(rows: I) -> TabularValue
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter().filter(|row| !is_blank(row));
    let names: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(index, data)| column_name(index, data))
            .collect(),
        None => Vec::new(),
    };
    let data = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    TabularValue::new(names, data)
}

/// Build a tabular value from a calamine worksheet range.
pub fn from_range(range: &Range<Data>) -> TabularValue {
    from_rows(range.rows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::Column;
    use calamine::ExcelDateTimeType;

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    #[test]
    fn test_cell_classification() {
        assert_eq!(cell_value(&Data::Int(3)), CellValue::int(3));
        assert_eq!(cell_value(&Data::Float(2.5)), CellValue::float(2.5));
        assert_eq!(cell_value(&Data::Float(f64::NAN)), CellValue::Missing);
        assert_eq!(cell_value(&Data::Empty), CellValue::Missing);
        assert_eq!(cell_value(&s("  ")), CellValue::Missing);
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::text("TRUE"));
        assert_eq!(cell_value(&s("North")), CellValue::text("North"));
    }

    #[test]
    fn test_date_cells_render_as_timestamps() {
        let date = Data::DateTime(ExcelDateTime::new(
            45292.0,
            ExcelDateTimeType::DateTime,
            false,
        ));
        assert_eq!(cell_value(&date), CellValue::text("2024-01-01 00:00:00"));
        assert_eq!(cell_value(&date).display(), "2024-01-01 00:00:00");

        let noon = Data::DateTime(ExcelDateTime::new(
            45292.5,
            ExcelDateTimeType::DateTime,
            false,
        ));
        assert_eq!(cell_value(&noon), CellValue::text("2024-01-01 12:00:00"));

        let duration = Data::DateTime(ExcelDateTime::new(
            0.0625,
            ExcelDateTimeType::TimeDelta,
            false,
        ));
        assert_eq!(cell_value(&duration), CellValue::text("1:30:00"));

        let iso = Data::DateTimeIso("2024-01-01T08:00:00".to_string());
        assert_eq!(cell_value(&iso), CellValue::text("2024-01-01T08:00:00"));
    }

    #[test]
    fn test_date_column_is_not_numeric() {
        let date = |serial| {
            Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, false))
        };
        let rows = [vec![s("Day")], vec![date(45292.0)], vec![date(45293.0)]];
        let value = from_rows(rows.iter().map(Vec::as_slice));
        assert!(!value.columns[0].numeric);
        assert_eq!(value.rows[1][0].display(), "2024-01-02 00:00:00");
    }

    #[test]
    fn test_header_and_data_rows() {
        let rows = [
            vec![s("Region"), Data::Empty, s("Revenue")],
            vec![s("North"), Data::Int(4), Data::Float(10.5)],
            vec![Data::Empty, Data::Empty, Data::Empty],
            vec![s("South"), Data::Int(2)],
        ];
        let value = from_rows(rows.iter().map(Vec::as_slice));

        assert_eq!(
            value.columns,
            vec![
                Column {
                    name: "Region".to_string(),
                    numeric: false
                },
                Column {
                    name: "Unnamed: 1".to_string(),
                    numeric: true
                },
                Column {
                    name: "Revenue".to_string(),
                    numeric: true
                },
            ]
        );
        assert_eq!(value.row_count, 2);
        assert_eq!(value.rows[1][2], CellValue::Missing);
    }

    #[test]
    fn test_empty_sheet() {
        let rows: Vec<Vec<Data>> = vec![];
        let value = from_rows(rows.iter().map(Vec::as_slice));
        assert!(value.is_empty());
        assert_eq!(value.row_count, 0);
    }

    #[test]
    fn test_from_range() {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), s("Name"));
        range.set_value((0, 1), s("Score"));
        range.set_value((1, 0), s("Ada"));
        range.set_value((1, 1), Data::Float(1000.0));

        let value = from_range(&range);
        assert_eq!(value.column_count(), 2);
        assert_eq!(value.rows[0][1].display(), "1,000");
    }
}
