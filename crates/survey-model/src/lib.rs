//! Core types shared across the survey summary crates.
//!
//! This crate holds the vocabulary of the pipeline: the derived field enums
//! ([`AgeGroup`], [`Gender`]), the recoverable label-index mappings
//! ([`LabelMapping`], [`MappingCatalog`]), and the declared dataset layout
//! ([`SurveyLayout`]).

pub mod fields;
pub mod layout;
pub mod mapping;

pub use fields::{AgeGroup, Gender};
pub use layout::SurveyLayout;
pub use mapping::{LabelMapping, MappingCatalog};
