// src/domain/links.rs
//
// External link builders.
//
// One typed builder per service. Each substitutes exactly one slug into a
// fixed template and returns an absolute, parsed URL.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::film::RegionCode;
use crate::domain::{DomainError, DomainResult};

/// The federal district is not served by the generic flag endpoint.
const DISTRICT_OF_COLUMBIA: &str = "US-DC";
const DISTRICT_OF_COLUMBIA_FLAG_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/0/03/Flag_of_Washington%2C_D.C.svg";

/// External services a film can link to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalService {
    Imdb,
    Letterboxd,
    RottenTomatoes,
    Wikipedia,
    JustWatch,
    Trailer,
    Review,
}

impl ExternalService {
    /// Display order of the links on the detail surface.
    pub const ALL: [ExternalService; 7] = [
        ExternalService::Imdb,
        ExternalService::Letterboxd,
        ExternalService::RottenTomatoes,
        ExternalService::Wikipedia,
        ExternalService::JustWatch,
        ExternalService::Trailer,
        ExternalService::Review,
    ];

    /// Build the link for this service.
    pub fn url(self, slug: &str) -> DomainResult<Url> {
        match self {
            ExternalService::Imdb => imdb_url(slug),
            ExternalService::Letterboxd => letterboxd_url(slug),
            ExternalService::RottenTomatoes => rotten_tomatoes_url(slug),
            ExternalService::Wikipedia => wikipedia_url(slug),
            ExternalService::JustWatch => justwatch_url(slug),
            ExternalService::Trailer => trailer_url(slug),
            ExternalService::Review => review_url(slug),
        }
    }

    /// UI element id of the link on the detail surface.
    pub fn element_id(self) -> &'static str {
        match self {
            ExternalService::Imdb => "imdbLink",
            ExternalService::Letterboxd => "letterboxdLink",
            ExternalService::RottenTomatoes => "rottenTomatoesLink",
            ExternalService::Wikipedia => "wikipediaLink",
            ExternalService::JustWatch => "justwatchLink",
            ExternalService::Trailer => "trailerLink",
            ExternalService::Review => "reviewLink",
        }
    }
}

impl std::fmt::Display for ExternalService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExternalService::Imdb => write!(f, "IMDb"),
            ExternalService::Letterboxd => write!(f, "Letterboxd"),
            ExternalService::RottenTomatoes => write!(f, "Rotten Tomatoes"),
            ExternalService::Wikipedia => write!(f, "Wikipedia"),
            ExternalService::JustWatch => write!(f, "JustWatch"),
            ExternalService::Trailer => write!(f, "Trailer"),
            ExternalService::Review => write!(f, "Review"),
        }
    }
}

pub fn imdb_url(slug: &str) -> DomainResult<Url> {
    parse(format!("https://www.imdb.com/title/{}/", slug))
}

pub fn letterboxd_url(slug: &str) -> DomainResult<Url> {
    parse(format!("https://letterboxd.com/film/{}/", slug))
}

pub fn rotten_tomatoes_url(slug: &str) -> DomainResult<Url> {
    parse(format!("https://www.rottentomatoes.com/m/{}", slug))
}

pub fn wikipedia_url(slug: &str) -> DomainResult<Url> {
    parse(format!("https://en.wikipedia.org/wiki/{}", slug))
}

pub fn justwatch_url(slug: &str) -> DomainResult<Url> {
    parse(format!("https://www.justwatch.com/uk/movie/{}", slug))
}

pub fn trailer_url(video_id: &str) -> DomainResult<Url> {
    youtube_url(video_id)
}

pub fn review_url(video_id: &str) -> DomainResult<Url> {
    youtube_url(video_id)
}

fn youtube_url(video_id: &str) -> DomainResult<Url> {
    parse(format!("https://youtu.be/{}", video_id))
}

/// Flag image for a region.
pub fn flag_url(region_code: &RegionCode) -> DomainResult<Url> {
    if region_code.as_str() == DISTRICT_OF_COLUMBIA {
        return parse(DISTRICT_OF_COLUMBIA_FLAG_URL.to_string());
    }
    parse(format!(
        "https://flagcdn.com/{}.svg",
        region_code.as_str().to_lowercase()
    ))
}

fn parse(raw: String) -> DomainResult<Url> {
    Url::parse(&raw).map_err(|e| DomainError::InvalidLink(format!("{}: {}", raw, e)))
}
