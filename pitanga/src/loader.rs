//! Turn `.csv`, `.xlsx` and `.xls` files into [`Table`]s.
//!
//! CSV goes through the `csv` crate with type detection per field; workbooks
//! go through calamine and keep the cell kinds the file recorded. Either way
//! the first row names the columns.

use crate::error::{LoadError, Result};
use crate::table::{normalize_headers, Cell, Table};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::io;
use std::path::Path;

/// Rows read from a CSV before it is treated as a sample.
pub const DEFAULT_CSV_ROW_LIMIT: usize = 50_000;

/// Extensions the loader understands, lowercase with the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".xlsx", ".xls", ".csv"];

/// Field values that mean "no data" in a CSV.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Largest float that converts to `i64` without losing integer precision.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Where the table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Multi-sheet spreadsheet. `extension` is lowercase with the dot.
    Workbook { extension: String },
    /// Flat delimited text.
    Delimited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub csv_row_limit: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            csv_row_limit: DEFAULT_CSV_ROW_LIMIT,
        }
    }
}

/// A table plus what is known about its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSource {
    pub kind: SourceKind,
    /// All sheet names in workbook order; empty for delimited sources.
    pub sheet_names: Vec<String>,
    /// The sheet the table was read from.
    pub sheet: Option<String>,
    pub table: Table,
    /// The CSV had more rows than the row limit.
    pub truncated: bool,
}

/// Lowercased extension with its dot, or "" when the path has none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Load any supported file, dispatching on its extension.
pub fn load_path(path: &Path, options: &LoadOptions) -> Result<LoadedSource> {
    let extension = extension_of(path);
    match extension.as_str() {
        ".xlsx" | ".xls" => read_workbook(path, extension),
        ".csv" => {
            let file = std::fs::File::open(path)?;
            let (table, truncated) = read_csv(file, options.csv_row_limit)?;
            log::debug!(
                "read {} csv rows from {:?} (truncated: {})",
                table.row_count(),
                path,
                truncated
            );
            Ok(LoadedSource {
                kind: SourceKind::Delimited,
                sheet_names: Vec::new(),
                sheet: None,
                table,
                truncated,
            })
        }
        _ => Err(LoadError::Unsupported(extension)),
    }
}

/// Read a CSV with a header row, keeping at most `row_limit` data rows.
/// Returns the table and whether rows were left unread.
pub fn read_csv<R: io::Read>(reader: R, row_limit: usize) -> Result<(Table, bool)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::NoColumns);
    }
    let names = normalize_headers(headers.iter().map(str::to_string));
    let width = names.len();

    let mut rows = Vec::new();
    let mut truncated = false;
    for record in rdr.records() {
        let record = record?;
        if rows.len() == row_limit {
            truncated = true;
            break;
        }
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(LoadError::Ragged {
                line,
                expected: width,
                found: record.len(),
            });
        }
        rows.push(record.iter().map(parse_field).collect());
    }

    Ok((Table::from_rows(names, rows), truncated))
}

/// Detect the value kind of one CSV field. Only an empty field or an exact
/// [`MISSING_MARKERS`] entry is missing; blanks and other NaN spellings stay text.
pub fn parse_field(field: &str) -> Cell {
    if MISSING_MARKERS.contains(&field) {
        return Cell::Missing;
    }
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Cell::Text(field.to_string());
    }
    match trimmed {
        "True" | "TRUE" | "true" => return Cell::Bool(true),
        "False" | "FALSE" | "false" => return Cell::Bool(false),
        _ => {}
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Cell::Int(v);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_nan() => Cell::Text(field.to_string()),
        Ok(v) => Cell::Float(v),
        Err(_) => Cell::Text(field.to_string()),
    }
}

fn read_workbook(path: &Path, extension: String) -> Result<LoadedSource> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();
    let first = first_sheet(&sheet_names)?;
    log::debug!("workbook {:?} has sheets {:?}", path, sheet_names);

    let range = workbook.worksheet_range(&first)?;
    let table = table_from_range(&range);

    Ok(LoadedSource {
        kind: SourceKind::Workbook { extension },
        sheet_names,
        sheet: Some(first),
        table,
        truncated: false,
    })
}

/// The sheet that gets analysed: the first one in workbook order.
pub fn first_sheet(sheet_names: &[String]) -> Result<String> {
    sheet_names.first().cloned().ok_or(LoadError::NoSheets)
}

/// Build a table from a sheet's used range; the first row is the header.
pub fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Table::default();
    };
    let names = normalize_headers(header.iter().map(header_name));
    let body = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();
    Table::from_rows(names, body)
}

fn header_name(data: &Data) -> String {
    match data {
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

/// Map a workbook value to a cell. Whole-number floats become integers,
/// since workbooks store every number as a float.
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) if v.fract() == 0.0 && v.abs() < MAX_EXACT_INT => Cell::Int(*v as i64),
        Data::Float(v) => Cell::Float(*v),
        Data::Bool(v) => Cell::Bool(*v),
        Data::String(s) if s.is_empty() => Cell::Missing,
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
