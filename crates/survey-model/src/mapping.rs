//! Recoverable label-index mappings for encoded categorical columns.

use std::collections::BTreeMap;

use serde::Serialize;

/// Label-index mapping for one categorical column.
///
/// Index 0 holds the most frequent observed label; equal frequencies break
/// by lexicographic label order. The reserved index, equal to the number of
/// observed labels, marks absent or unseen values at apply time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelMapping {
    labels: Vec<String>,
}

impl LabelMapping {
    /// Build a mapping from labels already in index order.
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Index assigned to a label, if it was observed.
    pub fn index_of(&self, label: &str) -> Option<u32> {
        self.labels
            .iter()
            .position(|known| known == label)
            .map(|idx| idx as u32)
    }

    /// Original label for an index. The reserved index has no label.
    pub fn label(&self, index: u32) -> Option<&str> {
        self.labels.get(index as usize).map(String::as_str)
    }

    /// Index one past the last assigned label, used for absent or
    /// unrecognized values.
    pub fn unseen_index(&self) -> u32 {
        self.labels.len() as u32
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index => label view for export.
    pub fn to_index_map(&self) -> BTreeMap<u32, String> {
        self.labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (idx as u32, label.clone()))
            .collect()
    }
}

/// Mapping catalog keyed by categorical column name.
///
/// Built once per pipeline run during the encoding stage and immutable
/// afterwards; anyone holding the catalog can decode integer codes back to
/// the original labels.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MappingCatalog {
    mappings: BTreeMap<String, LabelMapping>,
}

impl MappingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, mapping: LabelMapping) {
        self.mappings.insert(column.into(), mapping);
    }

    pub fn get(&self, column: &str) -> Option<&LabelMapping> {
        self.mappings.get(column)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LabelMapping)> {
        self.mappings.iter()
    }

    /// Column => (index => label) view for the JSON export.
    pub fn to_index_maps(&self) -> BTreeMap<String, BTreeMap<u32, String>> {
        self.mappings
            .iter()
            .map(|(column, mapping)| (column.clone(), mapping.to_index_map()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_round_trips_labels() {
        let mapping = LabelMapping::new(vec!["Yes".to_string(), "No".to_string()]);
        assert_eq!(mapping.index_of("Yes"), Some(0));
        assert_eq!(mapping.index_of("No"), Some(1));
        assert_eq!(mapping.label(0), Some("Yes"));
        assert_eq!(mapping.label(1), Some("No"));
    }

    #[test]
    fn unseen_index_is_one_past_last_label() {
        let mapping = LabelMapping::new(vec!["Yes".to_string(), "No".to_string()]);
        assert_eq!(mapping.unseen_index(), 2);
        assert_eq!(mapping.label(2), None);
        assert_eq!(mapping.index_of("Maybe"), None);
    }

    #[test]
    fn catalog_exports_index_maps() {
        let mut catalog = MappingCatalog::new();
        catalog.insert("treatment", LabelMapping::new(vec!["Yes".to_string()]));
        let export = catalog.to_index_maps();
        assert_eq!(export["treatment"][&0], "Yes");
    }
}
