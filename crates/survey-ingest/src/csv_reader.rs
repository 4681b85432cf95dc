//! Polars-backed CSV reading for survey tables.
//!
//! The reader owns schema inference; downstream stages treat the returned
//! [`DataFrame`] schema as given.

use std::path::Path;

use polars::prelude::{CsvEncoding, CsvParseOptions, CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Rows sampled for column type inference.
const INFER_SCHEMA_ROWS: usize = 100;

/// Text encoding accepted by the reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// Strict UTF-8; invalid bytes fail the read.
    #[default]
    Utf8,
    /// UTF-8 with invalid bytes replaced.
    LossyUtf8,
}

/// Options for reading a survey CSV file.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Treat the first row as the header.
    pub has_header: bool,
    /// Infer column types from a sample; when false every column reads as
    /// string.
    pub infer_column_types: bool,
    /// Text encoding of the file.
    pub encoding: TextEncoding,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            infer_column_types: true,
            encoding: TextEncoding::default(),
        }
    }
}

impl ReadOptions {
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_inferred_types(mut self, infer: bool) -> Self {
        self.infer_column_types = infer;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Read a survey CSV file into a [`DataFrame`].
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] when the path does not exist,
/// [`IngestError::CsvParse`] when Polars cannot parse the file, and
/// [`IngestError::EmptyCsv`] when the file holds no data rows.
pub fn read_csv(path: &Path, options: &ReadOptions) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let encoding = match options.encoding {
        TextEncoding::Utf8 => CsvEncoding::Utf8,
        TextEncoding::LossyUtf8 => CsvEncoding::LossyUtf8,
    };
    let infer_length = if options.infer_column_types {
        Some(INFER_SCHEMA_ROWS)
    } else {
        Some(0)
    };

    let df = CsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(infer_length)
        .with_parse_options(CsvParseOptions::default().with_encoding(encoding))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|err| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?
        .finish()
        .map_err(|err| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "CSV loaded"
    );
    Ok(df)
}
