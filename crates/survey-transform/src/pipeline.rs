//! Pipeline orchestration over one survey table.
//!
//! Stage order is fixed: schema validation, missing-value normalization,
//! sparse column removal, age-band derivation with the unresolved-age row
//! filter, gender standardization, country alias resolution, categorical
//! encoding, output projection. Reordering changes row survival: filtering
//! before encoding means label frequencies never count rows that were
//! dropped for an unresolved age.

use polars::prelude::DataFrame;
use tracing::{debug, info};

use survey_model::{MappingCatalog, SurveyLayout};

use crate::data_utils::{has_column, require_column};
use crate::derive::{derive_age_group, derive_gender, drop_unresolved_age, resolve_country_aliases};
use crate::encode::encode_categoricals;
use crate::error::Result;
use crate::normalize::normalize_missing;

/// Statistics from one pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformReport {
    pub rows_in: usize,
    pub cells_normalized: usize,
    pub rows_dropped_unresolved_age: usize,
    pub country_aliases_resolved: usize,
    pub rows_out: usize,
}

/// Run the cleaning pipeline, consuming the raw table.
///
/// Returns the cleaned table projected to the derived fields plus the
/// encoded categorical columns, the mapping catalog built during encoding,
/// and the run statistics.
///
/// # Errors
///
/// Fails fast with [`crate::TransformError::MissingColumn`] when a declared
/// column is absent from the input schema; no stage runs in that case.
pub fn run_pipeline(
    mut df: DataFrame,
    layout: &SurveyLayout,
) -> Result<(DataFrame, MappingCatalog, TransformReport)> {
    validate_schema(&df, layout)?;

    let mut report = TransformReport {
        rows_in: df.height(),
        ..Default::default()
    };

    report.cells_normalized = normalize_missing(&mut df, &layout.missing_sentinels)?;

    for column in &layout.sparse_columns {
        if has_column(&df, column) {
            df = df.drop(column)?;
            debug!(column = column.as_str(), "sparse column dropped");
        }
    }

    derive_age_group(&mut df, &layout.age_column)?;
    report.rows_dropped_unresolved_age = drop_unresolved_age(&mut df)?;
    derive_gender(&mut df, &layout.gender_column)?;
    report.country_aliases_resolved =
        resolve_country_aliases(&mut df, &layout.country_column, &layout.country_aliases)?;

    let catalog = encode_categoricals(&mut df, &layout.categorical_columns)?;

    let cleaned = df.select(layout.output_columns())?;
    report.rows_out = cleaned.height();
    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        dropped = report.rows_dropped_unresolved_age,
        columns = cleaned.width(),
        "transform complete"
    );
    Ok((cleaned, catalog, report))
}

/// Fail fast when a declared column is missing from the input schema.
fn validate_schema(df: &DataFrame, layout: &SurveyLayout) -> Result<()> {
    for column in layout.required_columns() {
        require_column(df, column)?;
    }
    Ok(())
}
