//! Error types for summary aggregation and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while aggregating or writing the summary.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A grouping column is absent from the summary input.
    #[error("required column '{column}' not found in summary input")]
    MissingColumn { column: String },

    /// The output destination already exists; nothing is written.
    #[error("output destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Partition count must be at least 1.
    #[error("invalid partition count: {count} (must be at least 1)")]
    InvalidPartitionCount { count: usize },

    /// Filesystem failure while writing.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failure.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
