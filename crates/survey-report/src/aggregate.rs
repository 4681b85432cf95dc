//! Treatment distribution summary over the cleaned table.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::debug;

use survey_ingest::{any_to_i64, any_to_string};
use survey_model::{AgeGroup, Gender, SurveyLayout};

use crate::error::{ReportError, Result};

/// Name of the count column in the written summary.
pub const SUMMARY_COUNT_COLUMN: &str = "count";

/// Group the cleaned table by (gender, age band, treatment code) and count
/// rows per group.
///
/// Output rows are ordered ascending by the grouping key; groups with an
/// absent gender sort before present values. The input is only read, and
/// the counts sum to its row count.
pub fn summarize_treatment(df: &DataFrame, layout: &SurveyLayout) -> Result<DataFrame> {
    let treatment_column = layout.treatment_encoded_column();
    for column in [Gender::COLUMN, AgeGroup::COLUMN, treatment_column.as_str()] {
        if df.column(column).is_err() {
            return Err(ReportError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let genders = df.column(Gender::COLUMN)?;
    let bands = df.column(AgeGroup::COLUMN)?;
    let codes = df.column(&treatment_column)?;

    // The BTreeMap key doubles as the output sort order; `None` ordering
    // puts absent-gender groups first.
    let mut counts: BTreeMap<(Option<String>, String, Option<i64>), i64> = BTreeMap::new();
    for idx in 0..df.height() {
        let gender = match genders.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::Null => None,
            value => Some(any_to_string(value)),
        };
        let band = any_to_string(bands.get(idx).unwrap_or(AnyValue::Null));
        let code = any_to_i64(codes.get(idx).unwrap_or(AnyValue::Null));
        *counts.entry((gender, band, code)).or_insert(0) += 1;
    }

    let mut gender_out = Vec::with_capacity(counts.len());
    let mut band_out = Vec::with_capacity(counts.len());
    let mut code_out = Vec::with_capacity(counts.len());
    let mut count_out = Vec::with_capacity(counts.len());
    for ((gender, band, code), count) in counts {
        gender_out.push(gender);
        band_out.push(band);
        code_out.push(code);
        count_out.push(count);
    }

    let total: i64 = count_out.iter().sum();
    debug_assert_eq!(total as usize, df.height());
    debug!(
        groups = count_out.len(),
        total, "treatment summary aggregated"
    );

    DataFrame::new(vec![
        Column::new(Gender::COLUMN.into(), gender_out),
        Column::new(AgeGroup::COLUMN.into(), band_out),
        Column::new(treatment_column.as_str().into(), code_out),
        Column::new(SUMMARY_COUNT_COLUMN.into(), count_out),
    ])
    .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaned_frame(rows: &[(Option<&str>, &str, i64)]) -> DataFrame {
        let genders: Vec<Option<&str>> = rows.iter().map(|(gender, _, _)| *gender).collect();
        let bands: Vec<&str> = rows.iter().map(|(_, band, _)| *band).collect();
        let codes: Vec<i64> = rows.iter().map(|(_, _, code)| *code).collect();
        DataFrame::new(vec![
            Column::new("StandardizedGender".into(), genders),
            Column::new("AgeGroup".into(), bands),
            Column::new("treatment_index".into(), codes),
        ])
        .unwrap()
    }

    #[test]
    fn identical_keys_collapse_into_one_counted_row() {
        let df = cleaned_frame(&[
            (Some("Female"), "Adult", 0),
            (Some("Female"), "Adult", 0),
            (Some("Male"), "Adult", 1),
        ]);

        let summary = summarize_treatment(&df, &SurveyLayout::default()).unwrap();
        assert_eq!(summary.height(), 2);

        let counts: Vec<i64> = summary
            .column("count")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .map(Option::unwrap)
            .collect();
        assert_eq!(counts, vec![2, 1]);
    }

    #[test]
    fn counts_are_conserved() {
        let df = cleaned_frame(&[
            (Some("Female"), "Adult", 0),
            (None, "Child", 2),
            (Some("Male"), "Senior", 1),
            (Some("Male"), "Senior", 1),
            (Some("Female"), "Adolescence", 0),
        ]);

        let summary = summarize_treatment(&df, &SurveyLayout::default()).unwrap();
        let total: i64 = summary
            .column("count")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .map(Option::unwrap)
            .sum();
        assert_eq!(total as usize, df.height());
    }

    #[test]
    fn output_sorts_by_key_with_absent_gender_first() {
        let df = cleaned_frame(&[
            (Some("Male"), "Adult", 0),
            (None, "Senior", 1),
            (Some("Female"), "Adult", 1),
            (Some("Female"), "Adult", 0),
        ]);

        let summary = summarize_treatment(&df, &SurveyLayout::default()).unwrap();
        let genders: Vec<Option<String>> = summary
            .column("StandardizedGender")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect();
        assert_eq!(
            genders,
            vec![
                None,
                Some("Female".to_string()),
                Some("Female".to_string()),
                Some("Male".to_string())
            ]
        );

        let codes: Vec<i64> = summary
            .column("treatment_index")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .map(Option::unwrap)
            .collect();
        assert_eq!(codes, vec![1, 0, 1, 0]);
    }

    #[test]
    fn missing_grouping_column_is_reported() {
        let df = DataFrame::new(vec![Column::new("AgeGroup".into(), vec!["Adult"])]).unwrap();
        let err = summarize_treatment(&df, &SurveyLayout::default()).unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn { .. }));
    }

    #[test]
    fn input_table_is_left_untouched() {
        let df = cleaned_frame(&[(Some("Female"), "Adult", 0)]);
        let before = df.clone();
        summarize_treatment(&df, &SurveyLayout::default()).unwrap();
        assert!(df.equals_missing(&before));
    }
}
