//! Dataset loading and common error types
//!
//! `load_records` is the single entry point a chart pipeline awaits: it reads
//! the resource, parses the CSV and coerces every row into a typed record.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::csv_reader::CsvTable;
use crate::record::FromRow;

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Non-numeric value {value:?} in column '{column}' at line {line}")]
    NonNumeric {
        line: u64,
        column: String,
        value: String,
    },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Read a CSV resource into a table of raw string rows
pub async fn load_table(path: impl AsRef<Path>) -> IoResult<CsvTable> {
    let path = path.as_ref();
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }
        Err(e) => return Err(IoError::OpenFailed(format!("{}: {}", path.display(), e))),
    };

    let table = CsvTable::from_reader(bytes.as_slice())?;
    debug!(
        path = %path.display(),
        rows = table.num_rows(),
        columns = table.headers().len(),
        "loaded csv table"
    );
    Ok(table)
}

/// Read a CSV resource and coerce every row into `T`
///
/// Resolves once; any missing column or non-numeric value fails the whole load.
pub async fn load_records<T: FromRow>(path: impl AsRef<Path>) -> IoResult<Vec<T>> {
    let table = load_table(path).await?;
    table.records()
}
