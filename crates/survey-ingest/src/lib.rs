//! Survey data ingestion: CSV loading and column profiling.

pub mod csv_reader;
pub mod error;
pub mod polars_utils;
pub mod profile;

pub use csv_reader::{ReadOptions, TextEncoding, read_csv};
pub use error::{IngestError, Result};
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_string, format_numeric, parse_f64, parse_i64,
};
pub use profile::{ColumnProfile, profile_columns};
