// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod film;
pub mod links;
pub mod palette;
pub mod regions;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Film Domain
pub use film::{
    flag_alt_text, poster_alt_text, region_tip_text, sortable_title_key, title_with_year,
    validate_film, Film, LinkSlugs, RegionCode,
};

// External links
pub use links::{flag_url, ExternalService};

// Colours
pub use palette::{
    Colour, ACTIVE_MAP_COLOURS, CHART_BACKGROUND_LINE_COLOUR, CHART_FOREGROUND_LINE_COLOUR,
    INACTIVE_MAP_COLOUR, MAP_BACKGROUND_COLOUR,
};

// Map regions
pub use regions::{us_region_codes, US_PROJECTION, US_REGIONS};

// Statistics Domain (Derived Data)
pub use statistics::{DecadeCount, Extremes, FilmStatistics, TitleLengthPolicy};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid link: {0}")]
    InvalidLink(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
