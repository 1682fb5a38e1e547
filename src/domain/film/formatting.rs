// src/domain/film/formatting.rs
//
// Display helpers for film records.
// Pure functions: no side effects, no error conditions.

use std::sync::LazyLock;

use regex::Regex;

use super::entity::Film;

static LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(A|The) ").expect("leading article pattern is valid"));

/// Sort key for a title: a single leading "A " or "The " is dropped.
///
/// Matching is case-sensitive and anchored to the start, so "Airplane!"
/// and "Theodore Rex" are left alone. The title itself is never modified.
pub fn sortable_title_key(title: &str) -> &str {
    match LEADING_ARTICLE.find(title) {
        Some(article) => &title[article.end()..],
        None => title,
    }
}

/// `"{title} ({year})"`
pub fn title_with_year(film: &Film) -> String {
    format!("{} ({})", film.title, film.year)
}

/// `"{region}: {title} ({year})"`, used for map region tips.
pub fn region_tip_text(film: &Film) -> String {
    format!("{}: {}", film.region_name, title_with_year(film))
}

pub fn flag_alt_text(film: &Film) -> String {
    format!("State flag of {}", film.region_name)
}

pub fn poster_alt_text(film: &Film) -> String {
    format!("Movie poster for {}", title_with_year(film))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film::{LinkSlugs, RegionCode};
    use crate::domain::palette::ACTIVE_MAP_COLOURS;

    fn fargo() -> Film {
        Film {
            region_code: RegionCode::from("US-ND"),
            region_name: "North Dakota".to_string(),
            title: "Fargo".to_string(),
            original_title: None,
            year: 1996,
            poster_image: None,
            links: LinkSlugs::default(),
            reviewer: None,
            colour: ACTIVE_MAP_COLOURS[3],
        }
    }

    #[test]
    fn test_sortable_key_strips_leading_the() {
        assert_eq!(sortable_title_key("The Matrix"), "Matrix");
    }

    #[test]
    fn test_sortable_key_strips_leading_a() {
        assert_eq!(sortable_title_key("A Few Good Men"), "Few Good Men");
    }

    #[test]
    fn test_sortable_key_ignores_words_starting_with_article() {
        assert_eq!(sortable_title_key("Airplane!"), "Airplane!");
        assert_eq!(sortable_title_key("Theodore Rex"), "Theodore Rex");
        assert_eq!(sortable_title_key("An American Tail"), "An American Tail");
    }

    #[test]
    fn test_sortable_key_is_case_sensitive_and_single() {
        assert_eq!(sortable_title_key("the thing"), "the thing");
        assert_eq!(sortable_title_key("The The Movie"), "The Movie");
        assert_eq!(sortable_title_key("Escape from The Bronx"), "Escape from The Bronx");
    }

    #[test]
    fn test_title_with_year() {
        assert_eq!(title_with_year(&fargo()), "Fargo (1996)");
    }

    #[test]
    fn test_region_tip_and_alt_texts() {
        let film = fargo();
        assert_eq!(region_tip_text(&film), "North Dakota: Fargo (1996)");
        assert_eq!(flag_alt_text(&film), "State flag of North Dakota");
        assert_eq!(poster_alt_text(&film), "Movie poster for Fargo (1996)");
    }
}
