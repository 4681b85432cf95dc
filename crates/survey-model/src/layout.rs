//! Declared survey dataset layout.
//!
//! The pipeline does not infer which columns are categorical; the layout
//! declares them, along with the raw column names the derivations read,
//! the missing-value sentinels, and the country alias table.

use std::collections::BTreeMap;

/// Declared layout of the survey dataset.
#[derive(Debug, Clone)]
pub struct SurveyLayout {
    /// Numeric age column the age-band derivation reads.
    pub age_column: String,
    /// Free-text gender column the gender standardization reads.
    pub gender_column: String,
    /// Country column the alias resolution is scoped to.
    pub country_column: String,
    /// Categorical column whose encoded codes the summary groups by.
    pub treatment_column: String,
    /// Categorical columns to encode, in declaration order.
    pub categorical_columns: Vec<String>,
    /// Raw string values normalized to null.
    pub missing_sentinels: Vec<String>,
    /// Exact-match replacements applied to the country column only.
    pub country_aliases: BTreeMap<String, String>,
    /// Columns removed before derivation; missing ones are not an error.
    pub sparse_columns: Vec<String>,
}

impl Default for SurveyLayout {
    fn default() -> Self {
        let categorical_columns = [
            "self_employed",
            "family_history",
            "treatment",
            "no_employees",
            "remote_work",
            "tech_company",
            "benefits",
            "care_options",
            "wellness_program",
            "seek_help",
            "anonymity",
            "leave",
            "mental_health_consequence",
            "phys_health_consequence",
            "coworkers",
            "supervisor",
            "mental_health_interview",
            "phys_health_interview",
            "mental_vs_physical",
            "obs_consequence",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let mut country_aliases = BTreeMap::new();
        country_aliases.insert("Bahamas, The".to_string(), "Bahamas".to_string());

        Self {
            age_column: "Age".to_string(),
            gender_column: "Gender".to_string(),
            country_column: "Country".to_string(),
            treatment_column: "treatment".to_string(),
            categorical_columns,
            missing_sentinels: vec![String::new(), "N/A".to_string(), "NA".to_string()],
            country_aliases,
            sparse_columns: vec!["work_interfere".to_string()],
        }
    }
}

impl SurveyLayout {
    /// Columns that must exist in the input schema before any stage runs.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut required = vec![
            self.age_column.as_str(),
            self.gender_column.as_str(),
            self.country_column.as_str(),
        ];
        required.extend(self.categorical_columns.iter().map(String::as_str));
        required
    }

    /// Name of the integer code column written for a categorical column.
    pub fn encoded_column_name(column: &str) -> String {
        format!("{column}_index")
    }

    /// Encoded treatment column the summary groups by.
    pub fn treatment_encoded_column(&self) -> String {
        Self::encoded_column_name(&self.treatment_column)
    }

    /// Output projection: derived fields, then encoded categorical columns
    /// in declaration order.
    pub fn output_columns(&self) -> Vec<String> {
        let mut columns = vec![
            crate::AgeGroup::COLUMN.to_string(),
            crate::Gender::COLUMN.to_string(),
        ];
        columns.extend(
            self.categorical_columns
                .iter()
                .map(|column| Self::encoded_column_name(column)),
        );
        columns
    }
}
