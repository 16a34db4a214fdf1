//! In-memory table model
//!
//! A [`Table`] is an ordered list of named columns of equal length. Cells keep
//! the value kind they were read as; each column also carries the type
//! inferred from all of its cells, named with the usual dataframe dtype names
//! so reports read the same whatever file they came from.

use std::fmt;

/// One cell value as read from the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// Spreadsheet date serial (days since the workbook epoch).
    DateTime(f64),
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Numeric view of the cell, for `Int` and `Float` only.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// Inferred column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int64,
    Float64,
    Bool,
    DateTime,
    Object,
}

impl ColumnType {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Int64 | ColumnType::Float64)
    }

    /// Infer the type of a column from its cells.
    ///
    /// Integers with any gap widen to `float64`; booleans with a gap fall back
    /// to `object`; a column with no values at all is `float64` unless it has
    /// no rows, in which case nothing is known and it is `object`.
    pub fn infer(cells: &[Cell]) -> ColumnType {
        let mut ints = 0usize;
        let mut floats = 0usize;
        let mut bools = 0usize;
        let mut dates = 0usize;
        let mut missing = 0usize;
        for cell in cells {
            match cell {
                Cell::Missing => missing += 1,
                Cell::Int(_) => ints += 1,
                Cell::Float(_) => floats += 1,
                Cell::Bool(_) => bools += 1,
                Cell::DateTime(_) => dates += 1,
                Cell::Text(_) => {}
            }
        }

        let present = cells.len() - missing;
        if cells.is_empty() {
            ColumnType::Object
        } else if present == 0 {
            ColumnType::Float64
        } else if ints == present {
            if missing == 0 {
                ColumnType::Int64
            } else {
                ColumnType::Float64
            }
        } else if ints + floats == present {
            ColumnType::Float64
        } else if bools == present && missing == 0 {
            ColumnType::Bool
        } else if dates == present {
            ColumnType::DateTime
        } else {
            ColumnType::Object
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Bool => "bool",
            ColumnType::DateTime => "datetime64[ns]",
            ColumnType::Object => "object",
        };
        f.write_str(name)
    }
}

/// A named column with its inferred type.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Cell>,
    column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        let column_type = ColumnType::infer(&cells);
        Self {
            name: name.into(),
            cells,
            column_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    /// Non-missing values of a numeric column, in row order. Empty for
    /// non-numeric columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        if !self.column_type.is_numeric() {
            return Vec::new();
        }
        self.cells.iter().filter_map(Cell::as_f64).collect()
    }
}

/// Column-ordered table. All columns have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table from row-major cells. Short rows are padded with
    /// `Missing`; cells beyond the header width are ignored.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = names.len();
        let row_count = rows.len();
        let mut columns: Vec<Vec<Cell>> = (0..width).map(|_| Vec::with_capacity(row_count)).collect();
        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.push(cells.next().unwrap_or(Cell::Missing));
            }
        }
        let columns = names
            .into_iter()
            .zip(columns)
            .map(|(name, cells)| Column::new(name, cells))
            .collect();
        Self {
            columns,
            rows: row_count,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    #[cfg(test)]
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Make header names usable: blanks become `Unnamed: <index>` and repeats get
/// a `.1`, `.2`, ... suffix.
pub fn normalize_headers(raw: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (index, name) in raw.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {}", index)
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut suffix = 1;
        while names.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        names.push(candidate);
    }
    names
}
