use serde::{Deserialize, Serialize};

use crate::domain::links::ExternalService;
use crate::domain::palette::Colour;

/// Identifier of a map region (a U.S. state or state-equivalent), e.g. `US-TX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slugs for the external services a film can link to.
/// Each one is substituted into a fixed per-service URL template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSlugs {
    pub imdb: Option<String>,
    pub letterboxd: Option<String>,
    pub rotten_tomatoes: Option<String>,
    pub wikipedia: Option<String>,
    pub justwatch: Option<String>,
    pub trailer: Option<String>,
    pub review: Option<String>,
}

impl LinkSlugs {
    /// Slug for a service, or `None` when it is missing or blank.
    pub fn slug(&self, service: ExternalService) -> Option<&str> {
        let slug = match service {
            ExternalService::Imdb => &self.imdb,
            ExternalService::Letterboxd => &self.letterboxd,
            ExternalService::RottenTomatoes => &self.rotten_tomatoes,
            ExternalService::Wikipedia => &self.wikipedia,
            ExternalService::JustWatch => &self.justwatch,
            ExternalService::Trailer => &self.trailer,
            ExternalService::Review => &self.review,
        };
        present(slug)
    }
}

/// One film associated with one region.
///
/// The colour is assigned once when the dataset is loaded and is never
/// recomputed for the lifetime of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Film {
    pub region_code: RegionCode,
    pub region_name: String,
    pub title: String,
    pub original_title: Option<String>,
    pub year: u32,
    pub poster_image: Option<String>,
    pub links: LinkSlugs,
    pub reviewer: Option<String>,
    pub colour: Colour,
}

impl Film {
    pub fn original_title(&self) -> Option<&str> {
        present(&self.original_title)
    }

    pub fn poster_image(&self) -> Option<&str> {
        present(&self.poster_image)
    }

    pub fn reviewer(&self) -> Option<&str> {
        present(&self.reviewer)
    }
}

/// Optional text fields count as absent when empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_slug_is_absent() {
        let links = LinkSlugs {
            imdb: Some(String::new()),
            wikipedia: Some("Fargo_(1996_film)".to_string()),
            ..LinkSlugs::default()
        };

        assert_eq!(links.slug(ExternalService::Imdb), None);
        assert_eq!(links.slug(ExternalService::Letterboxd), None);
        assert_eq!(
            links.slug(ExternalService::Wikipedia),
            Some("Fargo_(1996_film)")
        );
    }

    #[test]
    fn test_region_code_displays_raw_code() {
        let code = RegionCode::from("US-MN");
        assert_eq!(code.to_string(), "US-MN");
        assert_eq!(code.as_str(), "US-MN");
    }
}
