//! Tabular values and the table renderer
//!
//! A [`TabularValue`] is what a spreadsheet source yields once ingested:
//! named columns and rows of typed cells. Every cell is classified once, at
//! ingestion, into a [`CellValue`]; the renderer never inspects raw values.
//!
//! Rendering produces a single [`Table`] with a bold header row followed by
//! one row per data row. Column and row order are preserved exactly.

pub mod reader;

use crate::ir::nodes::{Table, TableCellAlignment};
use crate::sink::DocumentSink;

/// A single number as read from a spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// A classified cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(Number),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn int(value: i64) -> Self {
        CellValue::Number(Number::Int(value))
    }

    /// NaN is a missing value, not a number.
    pub fn float(value: f64) -> Self {
        if value.is_nan() {
            CellValue::Missing
        } else {
            CellValue::Number(Number::Float(value))
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Display text for a table cell.
    pub fn display(&self) -> String {
        match self {
            CellValue::Number(number) => format_number(*number),
            CellValue::Text(text) => text.clone(),
            CellValue::Missing => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Every present cell in the column is a number, and at least one is present.
    pub numeric: bool,
}

/// Named columns and ordered rows; every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularValue {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<CellValue>>,
    pub row_count: usize,
}

impl TabularValue {
    /// Build a value from column names and raw rows.
    ///
    /// Short rows are padded with [`CellValue::Missing`] and long rows are
    /// truncated, so the row shape always matches the columns.
    pub fn new<I, S>(names: I, rows: Vec<Vec<CellValue>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let width = names.len();
        let rows: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Missing);
                row
            })
            .collect();

        let columns = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let mut present = rows
                    .iter()
                    .map(|row| &row[index])
                    .filter(|cell| !cell.is_missing())
                    .peekable();
                let numeric = present.peek().is_some()
                    && present.all(|cell| matches!(cell, CellValue::Number(_)));
                Column { name, numeric }
            })
            .collect();

        TabularValue {
            columns,
            row_count: rows.len(),
            rows,
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// A value with no columns has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The summary line written above a rendered table.
    pub fn summary(&self) -> String {
        format!(
            "Data summary: {} rows, {} columns",
            self.row_count,
            self.column_count()
        )
    }
}

/// Format a number for display.
///
/// Integers and whole-valued floats get thousands separators and no
/// fraction; other floats get separators and exactly two fraction digits.
pub fn format_number(number: Number) -> String {
    match number {
        Number::Int(value) => group_thousands(&value.to_string()),
        Number::Float(value) if value.is_nan() => String::new(),
        // `-0.0 + 0.0` is `0.0`, so negative zero prints without a sign.
        Number::Float(value) if value.is_finite() && value.fract() == 0.0 => {
            group_thousands(&format!("{:.0}", value + 0.0))
        }
        Number::Float(value) if value.is_finite() => group_thousands(&format!("{value:.2}")),
        Number::Float(value) => value.to_string(),
    }
}

/// Insert `,` every three digits of the integer part of a plain decimal.
fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

/// Build the table grid for a value: a bold header row, then data rows.
pub fn build_table(value: &TabularValue) -> Table {
    let mut table = Table::new(value.rows.len() + 1, value.column_count());

    for (col, column) in value.columns.iter().enumerate() {
        if let Some(cell) = table.cell_mut(0, col) {
            cell.text = column.name.clone();
            cell.bold = true;
        }
    }

    for (row_index, row) in value.rows.iter().enumerate() {
        for (col, (column, cell_value)) in value.columns.iter().zip(row).enumerate() {
            if let Some(cell) = table.cell_mut(row_index + 1, col) {
                cell.text = cell_value.display();
                if column.numeric {
                    cell.align = TableCellAlignment::Right;
                }
            }
        }
    }

    table
}

/// Render a tabular value into the sink as one table.
pub fn render_table<S: DocumentSink + ?Sized>(value: &TabularValue, sink: &mut S) {
    sink.add_table(build_table(value));
}
