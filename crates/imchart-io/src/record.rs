//! Typed records and row coercion
//!
//! Each chart dataset has its own record type. A record declares the columns it
//! needs; `CsvTable::records` resolves them against the header once, then hands
//! each row to `FromRow::from_row` through a `RowView`.

use serde::{Deserialize, Serialize};

use crate::csv_reader::CsvRow;
use crate::reader::{IoError, IoResult};

/// A record that can be built from one CSV row
pub trait FromRow: Sized {
    /// Header names this record reads, in the order `RowView` resolves them
    const COLUMNS: &'static [&'static str];

    fn from_row(row: &RowView<'_>) -> IoResult<Self>;
}

/// Read access to the required columns of one row
pub struct RowView<'a> {
    row: &'a CsvRow,
    names: &'static [&'static str],
    indices: &'a [usize],
}

impl<'a> RowView<'a> {
    pub(crate) fn new(
        row: &'a CsvRow,
        names: &'static [&'static str],
        indices: &'a [usize],
    ) -> Self {
        Self {
            row,
            names,
            indices,
        }
    }

    /// Raw string value of a declared column
    pub fn text(&self, column: &str) -> IoResult<&'a str> {
        let slot = self
            .names
            .iter()
            .position(|name| *name == column)
            .ok_or_else(|| IoError::ColumnNotFound(column.to_string()))?;
        Ok(self
            .row
            .values
            .get(self.indices[slot])
            .map(|s| s.as_str())
            .unwrap_or(""))
    }

    /// Value of a declared column coerced to a finite number
    pub fn number(&self, column: &str) -> IoResult<f64> {
        let raw = self.text(column)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(IoError::NonNumeric {
                line: self.row.line,
                column: column.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

/// Likes of one post, keyed by the poster's age group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeLikes {
    pub age_group: String,
    pub likes: f64,
}

impl FromRow for AgeLikes {
    const COLUMNS: &'static [&'static str] = &["AgeGroup", "Likes"];

    fn from_row(row: &RowView<'_>) -> IoResult<Self> {
        Ok(Self {
            age_group: row.text("AgeGroup")?.to_string(),
            likes: row.number("Likes")?,
        })
    }
}

/// Average likes per platform and post type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformLikes {
    pub platform: String,
    pub post_type: String,
    pub avg_likes: f64,
}

impl FromRow for PlatformLikes {
    const COLUMNS: &'static [&'static str] = &["Platform", "PostType", "AvgLikes"];

    fn from_row(row: &RowView<'_>) -> IoResult<Self> {
        Ok(Self {
            platform: row.text("Platform")?.to_string(),
            post_type: row.text("PostType")?.to_string(),
            avg_likes: row.number("AvgLikes")?,
        })
    }
}

/// Average likes on one date; dates stay opaque labels in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLikes {
    pub date: String,
    pub avg_likes: f64,
}

impl FromRow for DailyLikes {
    const COLUMNS: &'static [&'static str] = &["Date", "AvgLikes"];

    fn from_row(row: &RowView<'_>) -> IoResult<Self> {
        Ok(Self {
            date: row.text("Date")?.to_string(),
            avg_likes: row.number("AvgLikes")?,
        })
    }
}
