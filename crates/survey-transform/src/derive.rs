//! Derived field computation and the unresolved-age row filter.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use survey_model::{AgeGroup, Gender};

use crate::data_utils::{
    filter_rows, numeric_column_f64, opt_string_column, require_column, set_opt_string_column,
};
use crate::error::Result;

/// Add the age-band column derived from the numeric age column.
///
/// Ages outside every band, non-numeric or absent, produce a null band;
/// [`drop_unresolved_age`] removes those rows afterwards.
pub fn derive_age_group(df: &mut DataFrame, age_column: &str) -> Result<()> {
    require_column(df, age_column)?;
    let ages = numeric_column_f64(df, age_column)?;
    let groups: Vec<Option<String>> = ages
        .into_iter()
        .map(|age| {
            age.and_then(AgeGroup::from_age)
                .map(|group| group.as_str().to_string())
        })
        .collect();
    set_opt_string_column(df, AgeGroup::COLUMN, groups)
}

/// Drop rows whose age band did not resolve. Returns the drop count.
pub fn drop_unresolved_age(df: &mut DataFrame) -> Result<usize> {
    let groups = opt_string_column(df, AgeGroup::COLUMN)?;
    let keep: Vec<bool> = groups.iter().map(Option::is_some).collect();
    let dropped = keep.iter().filter(|keep| !**keep).count();
    if dropped > 0 {
        warn!(dropped, "rows dropped with unresolved age band");
        filter_rows(df, &keep)?;
    }
    Ok(dropped)
}

/// Add the standardized gender column derived from the free-text gender
/// column. Values no rule matches stay null; those rows are kept.
pub fn derive_gender(df: &mut DataFrame, gender_column: &str) -> Result<()> {
    require_column(df, gender_column)?;
    let raw = opt_string_column(df, gender_column)?;
    let genders: Vec<Option<String>> = raw
        .into_iter()
        .map(|value| {
            value
                .as_deref()
                .and_then(Gender::classify)
                .map(|gender| gender.as_str().to_string())
        })
        .collect();
    set_opt_string_column(df, Gender::COLUMN, genders)
}

/// Replace known aliases in the country column by exact match.
///
/// Scoped to the one column; other columns never see the alias table.
/// Returns the number of cells rewritten.
pub fn resolve_country_aliases(
    df: &mut DataFrame,
    country_column: &str,
    aliases: &BTreeMap<String, String>,
) -> Result<usize> {
    require_column(df, country_column)?;
    if aliases.is_empty() {
        return Ok(0);
    }
    let values = opt_string_column(df, country_column)?;
    let mut replaced = 0usize;
    let resolved: Vec<Option<String>> = values
        .into_iter()
        .map(|value| {
            value.map(|value| match aliases.get(&value) {
                Some(canonical) => {
                    replaced += 1;
                    canonical.clone()
                }
                None => value,
            })
        })
        .collect();
    if replaced > 0 {
        debug!(replaced, column = country_column, "country aliases resolved");
        set_opt_string_column(df, country_column, resolved)?;
    }
    Ok(replaced)
}
