// src/integrations/dataset/client.rs
//
// Film dataset sources.
//
// ARCHITECTURE:
// - Fetches the static JSON document (HTTP or local file)
// - Maps wire records → domain films (colour supplied by the loader)
// - Never touches the repository; the loader owns population
//
// The document is an ordered array of film records. Only field access is
// checked: unknown fields are ignored and optional ones may be missing.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::{Deserialize, Deserializer};

use crate::domain::{Colour, Film, LinkSlugs, RegionCode};
use crate::error::{AppError, AppResult};

/// One film record as it appears in the dataset document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmRecord {
    #[serde(rename = "stateCode")]
    pub region_code: String,
    #[serde(rename = "state")]
    pub region_name: String,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(deserialize_with = "deserialize_year")]
    pub year: u32,
    #[serde(default, rename = "image")]
    pub poster_image: Option<String>,
    #[serde(default)]
    pub imdb: Option<String>,
    #[serde(default)]
    pub letterboxd: Option<String>,
    #[serde(default)]
    pub rotten_tomatoes: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
    #[serde(default)]
    pub justwatch: Option<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub reviewer: Option<String>,
}

impl FilmRecord {
    /// Map to a domain film with its presentation colour
    pub fn into_film(self, colour: Colour) -> Film {
        Film {
            region_code: RegionCode::new(self.region_code),
            region_name: self.region_name,
            title: self.title,
            original_title: self.original_title,
            year: self.year,
            poster_image: self.poster_image,
            links: LinkSlugs {
                imdb: self.imdb,
                letterboxd: self.letterboxd,
                rotten_tomatoes: self.rotten_tomatoes,
                wikipedia: self.wikipedia,
                justwatch: self.justwatch,
                trailer: self.trailer,
                review: self.review,
            },
            reviewer: self.reviewer,
            colour,
        }
    }
}

/// Years arrive as numbers, occasionally as numeric strings
fn deserialize_year<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(u32),
        Text(String),
    }

    match Year::deserialize(deserializer)? {
        Year::Number(year) => Ok(year),
        Year::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid year '{}'", text))),
    }
}

/// Parse a dataset document
pub fn parse_dataset(json: &str) -> AppResult<Vec<FilmRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Where the film dataset comes from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and parse the whole document
    async fn fetch(&self) -> AppResult<Vec<FilmRecord>>;

    /// Human-readable location, for logs and events
    fn describe(&self) -> String;
}

/// Dataset served over HTTP
pub struct HttpDatasetSource {
    url: Url,
    http_client: Client,
}

impl HttpDatasetSource {
    pub fn new(url: &str, timeout: Duration) -> AppResult<Self> {
        let url = Url::parse(url).map_err(|e| AppError::InvalidUrl(format!("{}: {}", url, e)))?;
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self { url, http_client })
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> AppResult<Vec<FilmRecord>> {
        let response = self
            .http_client
            .get(self.url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::DataUnavailable(format!(
                "{} returned status: {}",
                self.url,
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_dataset(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Dataset read from a local file
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self) -> AppResult<Vec<FilmRecord>> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_dataset(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExternalService, ACTIVE_MAP_COLOURS};
    use std::io::Write;

    const DOCUMENT: &str = r#"[
        {
            "stateCode": "US-ND",
            "state": "North Dakota",
            "title": "Fargo",
            "year": 1996,
            "image": "posters/fargo.jpg",
            "imdb": "tt0116282",
            "wikipedia": "Fargo_(1996_film)",
            "reviewer": "Mark Kermode"
        },
        {
            "stateCode": "US-TX",
            "state": "Texas",
            "title": "Paris, Texas",
            "originalTitle": "Paris, Texas",
            "year": "1984",
            "rottenTomatoes": "paris_texas",
            "unexpected": true
        }
    ]"#;

    #[test]
    fn test_parse_dataset_keeps_order_and_fields() {
        let records = parse_dataset(DOCUMENT).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region_code, "US-ND");
        assert_eq!(records[0].poster_image.as_deref(), Some("posters/fargo.jpg"));
        assert_eq!(records[1].year, 1984);
        assert_eq!(records[1].rotten_tomatoes.as_deref(), Some("paris_texas"));
        assert!(records[1].imdb.is_none());
    }

    #[test]
    fn test_parse_dataset_rejects_bad_year() {
        let doc = r#"[{"stateCode": "US-TX", "state": "Texas", "title": "Giant", "year": "fifties"}]"#;
        assert!(parse_dataset(doc).is_err());
    }

    #[test]
    fn test_parse_dataset_rejects_non_array() {
        assert!(parse_dataset(r#"{"films": []}"#).is_err());
    }

    #[test]
    fn test_into_film_maps_slugs() {
        let record = parse_dataset(DOCUMENT).unwrap().remove(0);
        let film = record.into_film(ACTIVE_MAP_COLOURS[2]);

        assert_eq!(film.region_code, RegionCode::from("US-ND"));
        assert_eq!(film.colour, ACTIVE_MAP_COLOURS[2]);
        assert_eq!(film.links.slug(ExternalService::Imdb), Some("tt0116282"));
        assert_eq!(film.links.slug(ExternalService::Letterboxd), None);
        assert_eq!(film.reviewer(), Some("Mark Kermode"));
    }

    #[tokio::test]
    async fn test_file_source_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let source = FileDatasetSource::new(file.path());
        let records = source.fetch().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileDatasetSource::new(dir.path().join("missing.json"));

        assert!(matches!(source.fetch().await, Err(AppError::Io(_))));
    }

    #[test]
    fn test_http_source_rejects_invalid_url() {
        assert!(matches!(
            HttpDatasetSource::new("not a url", Duration::from_secs(5)),
            Err(AppError::InvalidUrl(_))
        ));
    }
}
