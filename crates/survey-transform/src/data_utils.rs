//! Row-wise DataFrame helpers shared by the pipeline stages.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};

use survey_ingest::{any_to_f64, any_to_string};

use crate::error::{Result, TransformError};

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Fail fast when a declared column is missing from the schema.
pub fn require_column(df: &DataFrame, name: &str) -> Result<()> {
    if has_column(df, name) {
        Ok(())
    } else {
        Err(TransformError::MissingColumn {
            column: name.to_string(),
        })
    }
}

/// Column cells as optional trimmed strings; null cells stay `None`.
pub fn opt_string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(match value {
            AnyValue::Null => None,
            value => Some(any_to_string(value).trim().to_string()),
        });
    }
    Ok(values)
}

/// Column cells as optional numbers; null and non-numeric cells stay `None`.
pub fn numeric_column_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_f64(value));
    }
    Ok(values)
}

pub fn set_opt_string_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn set_i32_column(df: &mut DataFrame, name: &str, values: Vec<i32>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn filter_rows(df: &mut DataFrame, keep: &[bool]) -> Result<()> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    *df = df.filter(&mask)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use polars::prelude::Column;

    use super::*;

    #[test]
    fn opt_string_column_keeps_nulls_and_trims() {
        let df = DataFrame::new(vec![Column::new(
            "answer".into(),
            vec![Some(" Yes "), None, Some("No")],
        )])
        .unwrap();

        let values = opt_string_column(&df, "answer").unwrap();
        assert_eq!(
            values,
            vec![Some("Yes".to_string()), None, Some("No".to_string())]
        );
    }

    #[test]
    fn require_column_reports_the_missing_name() {
        let df = DataFrame::new(vec![Column::new("Age".into(), vec![25i64])]).unwrap();
        let err = require_column(&df, "Gender").unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingColumn { column } if column == "Gender"
        ));
    }

    #[test]
    fn filter_rows_drops_masked_rows() {
        let mut df = DataFrame::new(vec![Column::new("Age".into(), vec![25i64, 150, 30])]).unwrap();
        filter_rows(&mut df, &[true, false, true]).unwrap();
        assert_eq!(df.height(), 2);
    }
}
