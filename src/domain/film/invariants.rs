use super::entity::Film;
use crate::domain::{DomainError, DomainResult};

/// Validates all Film invariants
/// A film that fails these cannot be placed on the map or in the lists
pub fn validate_film(film: &Film) -> DomainResult<()> {
    validate_region_code(film)?;
    validate_title(&film.title)?;
    validate_year(film.year)?;
    Ok(())
}

fn validate_region_code(film: &Film) -> DomainResult<()> {
    if film.region_code.as_str().trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Film '{}' has no region code",
            film.title
        )));
    }
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Film title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_year(year: u32) -> DomainResult<()> {
    if year == 0 {
        return Err(DomainError::InvariantViolation(
            "Film year must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Film domain:
///
/// 1. Every film belongs to exactly one region
/// 2. A region has at most one film (enforced by the repository, last wins)
/// 3. Title cannot be empty
/// 4. Colour is drawn from the active palette and never changes

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::film::LinkSlugs;
    use crate::domain::palette::ACTIVE_MAP_COLOURS;
    use crate::domain::RegionCode;

    fn film(code: &str, title: &str, year: u32) -> Film {
        Film {
            region_code: RegionCode::from(code),
            region_name: "Texas".to_string(),
            title: title.to_string(),
            original_title: None,
            year,
            poster_image: None,
            links: LinkSlugs::default(),
            reviewer: None,
            colour: ACTIVE_MAP_COLOURS[0],
        }
    }

    #[test]
    fn test_valid_film() {
        assert!(validate_film(&film("US-TX", "Paris, Texas", 1984)).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        assert!(validate_film(&film("US-TX", "  ", 1984)).is_err());
    }

    #[test]
    fn test_missing_region_fails() {
        assert!(validate_film(&film("", "Paris, Texas", 1984)).is_err());
    }

    #[test]
    fn test_zero_year_fails() {
        assert!(validate_film(&film("US-TX", "Paris, Texas", 0)).is_err());
    }
}
