pub mod entity;
pub mod formatting;
pub mod invariants;

pub use entity::{Film, LinkSlugs, RegionCode};
pub use formatting::{
    flag_alt_text, poster_alt_text, region_tip_text, sortable_title_key, title_with_year,
};
pub use invariants::validate_film;
