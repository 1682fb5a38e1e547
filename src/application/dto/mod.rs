// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{DecadeCount, Film, FilmStatistics};
use crate::views::{DetailImage, ElementId, ImageStatus, SurfaceId};

// ============================================================================
// INTENT DTOs
// ============================================================================

/// A click on a rendered film button
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickElementDto {
    pub surface: SurfaceId,
    pub element_id: ElementId,
}

/// Load outcome of a film button's flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementImageStatusDto {
    pub surface: SurfaceId,
    pub element_id: ElementId,
    pub src: String,
    pub status: ImageStatus,
}

/// Load outcome of an image on the detail surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailImageStatusDto {
    pub image: DetailImage,
    pub src: String,
    pub status: ImageStatus,
}

// ============================================================================
// FILM DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmSummaryDto {
    pub region_code: String,
    pub region_name: String,
    pub title: String,
    pub year: u32,
    pub colour: String,
}

impl From<&Arc<Film>> for FilmSummaryDto {
    fn from(film: &Arc<Film>) -> Self {
        Self {
            region_code: film.region_code.to_string(),
            region_name: film.region_name.clone(),
            title: film.title.clone(),
            year: film.year,
            colour: film.colour.to_string(),
        }
    }
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub total_films: usize,
    pub by_decade: Vec<DecadeCount>,
    pub region_in_title: Vec<FilmSummaryDto>,
    pub oldest: Option<FilmSummaryDto>,
    pub newest: Option<FilmSummaryDto>,
    pub shortest_title: Option<FilmSummaryDto>,
    pub longest_title: Option<FilmSummaryDto>,
}

impl From<FilmStatistics> for StatisticsDto {
    fn from(stats: FilmStatistics) -> Self {
        Self {
            total_films: stats.total_films,
            region_in_title: stats.region_in_title.iter().map(FilmSummaryDto::from).collect(),
            oldest: stats.oldest_newest.as_ref().map(|e| FilmSummaryDto::from(&e.first)),
            newest: stats.oldest_newest.as_ref().map(|e| FilmSummaryDto::from(&e.last)),
            shortest_title: stats
                .shortest_longest
                .as_ref()
                .map(|e| FilmSummaryDto::from(&e.first)),
            longest_title: stats
                .shortest_longest
                .as_ref()
                .map(|e| FilmSummaryDto::from(&e.last)),
            by_decade: stats.by_decade,
        }
    }
}
