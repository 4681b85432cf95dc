//! Summary aggregation over the cleaned survey table and partitioned CSV
//! export of the result.

pub mod aggregate;
pub mod error;
pub mod writer;

pub use aggregate::{SUMMARY_COUNT_COLUMN, summarize_treatment};
pub use error::{ReportError, Result};
pub use writer::{WriteOptions, write_summary};
