//! Error types for loading, summarising and charting tables.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing to parse: no header row.
    #[error("No columns to parse from file")]
    EmptyInput,

    /// The tokenizer rejected the input (bad quoting, invalid UTF-8, ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row is wider than the header.
    #[error("Error tokenizing data. Expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("column not found: {0}")]
    UnknownColumn(String),

    #[error("column is not numeric: {0}")]
    NotNumeric(String),
}

impl AnalyzerError {
    pub fn file_open(path: &Path, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.to_path_buf(),
            source,
        }
    }
}
