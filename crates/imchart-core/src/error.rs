//! Error types for imchart-core
//!
//! Provides error handling for:
//! - Dataset loading (wrapped `IoError`)
//! - Scene construction
//! - Export failures
//! - Configuration

use std::path::PathBuf;

use imchart_io::IoError;
use thiserror::Error;

/// Main error type for chart operations
#[derive(Error, Debug)]
pub enum ChartError {
    /// Dataset loading errors
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] IoError),

    /// Dataset parsed but has no rows to draw
    #[error("Dataset for {chart} has no rows")]
    EmptyDataset { chart: String },

    /// Scene construction errors
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Export errors
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to export
#[derive(Error, Debug)]
pub enum ExportError {
    /// Invalid dimensions
    #[error("Invalid dimensions: {width}x{height} (must be positive and within limits)")]
    InvalidDimensions { width: f64, height: f64 },

    /// Writing the output failed
    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Validation utilities
pub mod validation {
    use super::*;

    /// Validate a drawing surface size
    pub fn validate_dimensions(width: f64, height: f64) -> ExportResult<()> {
        const MAX_DIMENSION: f64 = 16384.0;

        if !(width > 0.0 && height > 0.0 && width <= MAX_DIMENSION && height <= MAX_DIMENSION) {
            return Err(ExportError::InvalidDimensions { width, height });
        }
        Ok(())
    }
}
