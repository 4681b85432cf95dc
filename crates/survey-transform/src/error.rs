//! Error types for the cleaning pipeline.

use thiserror::Error;

/// Errors raised by pipeline stages.
///
/// Data-level anomalies (unresolvable ages, unseen categorical values) are
/// handled by policy inside the stages and never surface here.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A declared column is absent from the input schema.
    #[error("required column '{column}' not found in input schema")]
    MissingColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, TransformError>;
