//! Partitioned CSV export of the summary table.

use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use polars::prelude::{AnyValue, DataFrame};
use tracing::info;

use survey_ingest::any_to_string;

use crate::error::{ReportError, Result};

/// Options for writing the summary.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Number of physical part files to write; must be at least 1, and 1
    /// produces a single merged part file.
    pub partitions: usize,
    /// Write a header row into every part file.
    pub include_header: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            partitions: 1,
            include_header: true,
        }
    }
}

impl WriteOptions {
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }
}

/// Write the summary as CSV part files under the destination directory.
///
/// The destination must not already exist; an existing path fails without
/// touching it. Rows split evenly across at most one part per row, so a
/// partition count above the row count writes fewer files. Returns the
/// written part paths in order.
pub fn write_summary(df: &DataFrame, dest: &Path, options: &WriteOptions) -> Result<Vec<PathBuf>> {
    if options.partitions < 1 {
        return Err(ReportError::InvalidPartitionCount {
            count: options.partitions,
        });
    }
    if dest.exists() {
        return Err(ReportError::DestinationExists {
            path: dest.to_path_buf(),
        });
    }
    fs::create_dir_all(dest).map_err(|source| ReportError::Io {
        path: dest.to_path_buf(),
        source,
    })?;

    let height = df.height();
    let partitions = options.partitions.min(height.max(1));
    let chunk = height.div_ceil(partitions);
    let headers = df.get_column_names_owned();
    let mut columns = Vec::with_capacity(headers.len());
    for header in &headers {
        columns.push(df.column(header.as_str())?);
    }

    let mut paths = Vec::with_capacity(partitions);
    let mut offset = 0usize;
    for part in 0..partitions {
        let len = chunk.min(height - offset);
        let path = dest.join(format!("part-{part:05}.csv"));
        let mut writer = WriterBuilder::new().from_path(&path)?;
        if options.include_header {
            writer.write_record(headers.iter().map(|header| header.as_str()))?;
        }
        for idx in offset..offset + len {
            let mut record = Vec::with_capacity(columns.len());
            for column in &columns {
                record.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
            }
            writer.write_record(&record)?;
        }
        writer.flush().map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        paths.push(path);
        offset += len;
    }

    info!(
        dest = %dest.display(),
        partitions = paths.len(),
        rows = height,
        "summary written"
    );
    Ok(paths)
}
