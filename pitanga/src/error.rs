//! Errors raised while turning a file into a [`Table`](crate::table::Table).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// Extension is not one of the supported formats. Holds the extension
    /// with its leading dot, or an empty string when there is none.
    #[error("unsupported format: {}", display_ext(.0))]
    Unsupported(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("no columns to parse from file")]
    NoColumns,
    #[error("expected {expected} fields in line {line}, saw {found}")]
    Ragged {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// How an extension is named in messages.
pub fn display_ext(ext: &str) -> &str {
    if ext.is_empty() {
        "(no extension)"
    } else {
        ext
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
