//! Statistics invariants:
//!
//! 1. Statistics are ALWAYS derived from the loaded catalog
//! 2. Deriving statistics never reorders the catalog's own orderings
//! 3. Extra orderings (year, title length) are sorted copies

pub mod entity;
pub use entity::{
    decade_histogram, decade_label, has_region_in_title, DecadeCount, Extremes, FilmStatistics,
    TitleLengthPolicy,
};
