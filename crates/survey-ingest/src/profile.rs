//! Per-column profiling of a loaded survey table.
//!
//! Mirrors the pre-transform data inspection: missing-value counts and the
//! sorted distinct values of every column.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};

use crate::error::Result;
use crate::polars_utils::any_to_string;

/// Profile of one column.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    /// Cells that are null.
    pub null_count: usize,
    /// Sorted distinct non-null values, rendered as strings.
    pub distinct: Vec<String>,
}

/// Profile every column of the table.
pub fn profile_columns(df: &DataFrame) -> Result<Vec<ColumnProfile>> {
    let mut profiles = Vec::with_capacity(df.width());
    for name in df.get_column_names_owned() {
        let column = df.column(name.as_str())?;
        let mut null_count = 0usize;
        let mut distinct = BTreeSet::new();
        for idx in 0..df.height() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            if matches!(value, AnyValue::Null) {
                null_count += 1;
            } else {
                distinct.insert(any_to_string(value));
            }
        }
        profiles.push(ColumnProfile {
            name: name.to_string(),
            null_count,
            distinct: distinct.into_iter().collect(),
        });
    }
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, DataFrame};

    use super::*;

    #[test]
    fn profiles_count_nulls_and_sort_distinct() {
        let df = DataFrame::new(vec![Column::new(
            "answer".into(),
            vec![Some("Yes"), None, Some("No"), Some("Yes")],
        )])
        .unwrap();

        let profiles = profile_columns(&df).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "answer");
        assert_eq!(profiles[0].null_count, 1);
        assert_eq!(profiles[0].distinct, vec!["No", "Yes"]);
    }
}
