//! Missing-value normalization.

use polars::prelude::{
    AnyValue, DataFrame, DataType, IntoSeries, NamedFrom, Series, StringChunkedBuilder,
};
use tracing::debug;

use survey_ingest::any_to_f64;

use crate::error::Result;

/// Replace missing-value sentinels with null across every column.
///
/// String cells whose trimmed value matches a sentinel become null; float
/// cells holding NaN become null. No column is exempt. Returns the number
/// of cells replaced; re-applying to already-normalized data replaces
/// nothing.
pub fn normalize_missing(df: &mut DataFrame, sentinels: &[String]) -> Result<usize> {
    let mut replaced = 0usize;
    for name in df.get_column_names_owned() {
        let dtype = df.column(name.as_str())?.dtype().clone();
        match dtype {
            DataType::String => {
                let mut matched = false;
                let mut builder = StringChunkedBuilder::new(name.clone(), df.height());
                {
                    let ca = df.column(name.as_str())?.str()?;
                    for value in ca {
                        match value {
                            Some(value) if is_sentinel(value, sentinels) => {
                                matched = true;
                                replaced += 1;
                                builder.append_null();
                            }
                            Some(value) => builder.append_value(value),
                            None => builder.append_null(),
                        }
                    }
                }
                if matched {
                    df.with_column(builder.finish().into_series())?;
                }
            }
            DataType::Float32 | DataType::Float64 => {
                let mut matched = false;
                let mut values = Vec::with_capacity(df.height());
                {
                    let column = df.column(name.as_str())?;
                    for idx in 0..df.height() {
                        let value = any_to_f64(column.get(idx).unwrap_or(AnyValue::Null));
                        match value {
                            Some(value) if value.is_nan() => {
                                matched = true;
                                replaced += 1;
                                values.push(None);
                            }
                            value => values.push(value),
                        }
                    }
                }
                if matched {
                    df.with_column(Series::new(name.clone(), values))?;
                }
            }
            _ => {}
        }
    }
    if replaced > 0 {
        debug!(replaced, "missing-value sentinels normalized");
    }
    Ok(replaced)
}

fn is_sentinel(value: &str, sentinels: &[String]) -> bool {
    let trimmed = value.trim();
    sentinels.iter().any(|sentinel| trimmed == sentinel)
}
