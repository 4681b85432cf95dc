//! Deterministic label-index encoding for categorical columns.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use tracing::debug;

use survey_model::{LabelMapping, MappingCatalog, SurveyLayout};

use crate::data_utils::{opt_string_column, require_column, set_i32_column};
use crate::error::Result;

/// Fit a label mapping from the observed values of one column.
///
/// Labels are ordered by descending frequency; equal frequencies break by
/// lexicographic label order, so the mapping is a pure function of the
/// observed value multiset. Absent cells are not observed and encode to the
/// reserved unseen index at apply time.
pub fn fit_label_mapping(values: &[Option<String>]) -> LabelMapping {
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for value in values.iter().flatten() {
        *frequencies.entry(value.as_str()).or_insert(0) += 1;
    }
    let mut ordered: Vec<(&str, usize)> = frequencies.into_iter().collect();
    ordered.sort_by(|(label_a, count_a), (label_b, count_b)| {
        count_b.cmp(count_a).then_with(|| label_a.cmp(label_b))
    });
    LabelMapping::new(
        ordered
            .into_iter()
            .map(|(label, _)| label.to_string())
            .collect(),
    )
}

/// Encode one categorical column.
///
/// Scans the column's current values, fits the mapping, and adds the
/// `<column>_index` code column; absent or unmapped values receive the
/// reserved unseen index. The fitted mapping is returned for the catalog.
pub fn encode_column(df: &mut DataFrame, column: &str) -> Result<LabelMapping> {
    require_column(df, column)?;
    let values = opt_string_column(df, column)?;
    let mapping = fit_label_mapping(&values);
    let unseen = mapping.unseen_index() as i32;
    let codes: Vec<i32> = values
        .iter()
        .map(|value| match value {
            Some(value) => mapping
                .index_of(value)
                .map_or(unseen, |index| index as i32),
            None => unseen,
        })
        .collect();
    set_i32_column(df, &SurveyLayout::encoded_column_name(column), codes)?;
    Ok(mapping)
}

/// Encode every declared categorical column, in declaration order.
///
/// Columns are mutually independent: each mapping is fitted from the table
/// state before that column's own step and no step reads another column's
/// codes, so the declaration order does not affect the result.
pub fn encode_categoricals(df: &mut DataFrame, columns: &[String]) -> Result<MappingCatalog> {
    let mut catalog = MappingCatalog::new();
    for column in columns {
        let mapping = encode_column(df, column)?;
        debug!(
            column = column.as_str(),
            labels = mapping.len(),
            "categorical column encoded"
        );
        catalog.insert(column.clone(), mapping);
    }
    Ok(catalog)
}
