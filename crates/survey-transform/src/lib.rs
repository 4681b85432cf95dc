//! Survey cleaning pipeline.
//!
//! Stages run in a fixed order over one in-memory table: missing-value
//! normalization, sparse column removal, derived-field computation with the
//! unresolved-age row filter, country alias resolution, categorical
//! label-index encoding, and the output projection. [`run_pipeline`] wires
//! them together and returns the cleaned table plus the mapping catalog.

pub mod data_utils;
pub mod derive;
pub mod encode;
pub mod error;
pub mod normalize;
pub mod pipeline;

pub use derive::{derive_age_group, derive_gender, drop_unresolved_age, resolve_country_aliases};
pub use encode::{encode_categoricals, encode_column, fit_label_mapping};
pub use error::{Result, TransformError};
pub use normalize::normalize_missing;
pub use pipeline::{TransformReport, run_pipeline};
