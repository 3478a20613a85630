//! CSV table reader with type inference

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::reader::{IoError, IoResult};
use crate::record::{FromRow, RowView};
use crate::schema::{ColumnDescriptor, ColumnType, DataSchema};

/// A raw CSV row with the line it was read from
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub line: u64,
    pub values: Vec<String>,
}

/// A parsed CSV file: header plus string rows in file order
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<CsvRow>,
}

impl CsvTable {
    /// Open a CSV file from disk
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse CSV text from any reader; the first row is the header
    pub fn from_reader<R: Read>(reader: R) -> IoResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .iter()
            .map(|s| s.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            // Header occupies line 1
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(i as u64 + 2);
            rows.push(CsvRow {
                line,
                values: record.iter().map(|s| s.to_string()).collect(),
            });
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[CsvRow] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of a header, by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Coerce every row into a typed record
    ///
    /// Required columns are checked against the header before any row is read.
    pub fn records<T: FromRow>(&self) -> IoResult<Vec<T>> {
        let indices = T::COLUMNS
            .iter()
            .map(|name| {
                self.column_index(name)
                    .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
            })
            .collect::<IoResult<Vec<usize>>>()?;

        self.rows
            .iter()
            .map(|row| T::from_row(&RowView::new(row, T::COLUMNS, &indices)))
            .collect()
    }

    /// Infer a schema from the values in each column
    pub fn infer_schema(&self) -> DataSchema {
        let columns = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let values = self
                    .rows
                    .iter()
                    .filter_map(|row| row.values.get(i).map(|s| s.as_str()));
                ColumnDescriptor::new(name.clone(), infer_type(values))
            })
            .collect();

        DataSchema::new(columns, self.rows.len())
    }
}

/// Infer column type from sample values
pub fn infer_type<'a>(values: impl IntoIterator<Item = &'a str>) -> ColumnType {
    let non_empty: Vec<&str> = values
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if non_empty.is_empty() {
        return ColumnType::String;
    }

    if non_empty.iter().all(|s| s.parse::<i64>().is_ok()) {
        return ColumnType::Int64;
    }

    if non_empty
        .iter()
        .all(|s| s.parse::<f64>().map(f64::is_finite).unwrap_or(false))
    {
        return ColumnType::Float64;
    }

    if non_empty.iter().all(|s| {
        matches!(
            s.to_lowercase().as_str(),
            "true" | "false" | "yes" | "no"
        )
    }) {
        return ColumnType::Bool;
    }

    ColumnType::String
}
