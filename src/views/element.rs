// src/views/element.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{flag_alt_text, flag_url, title_with_year, Colour, DomainResult, Film, RegionCode};

/// Identity of one rendered element. Every render creates fresh ids,
/// so intents aimed at replaced elements no longer resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Load outcome reported by the webview for an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    Pending,
    Loaded,
    Failed,
}

/// An image whose visibility follows its load outcome.
///
/// A failed load hides the image; a successful one shows it again.
/// Changing the source re-arms the slot, so the next outcome decides
/// visibility afresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    pub src: String,
    pub alt: String,
    pub status: ImageStatus,
    pub visible: bool,
}

impl ImageSlot {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            status: ImageStatus::Pending,
            visible: true,
        }
    }

    /// Point the slot at a new image and re-arm the load/error toggle.
    pub fn set_source(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        self.src = src.into();
        self.alt = alt.into();
        self.status = ImageStatus::Pending;
        self.visible = true;
    }

    /// Apply a load outcome. Outcomes for a source the slot no longer
    /// shows are ignored. Returns whether the report was applied.
    pub fn report(&mut self, src: &str, status: ImageStatus) -> bool {
        if self.src != src {
            return false;
        }
        self.status = status;
        self.visible = status != ImageStatus::Failed;
        true
    }
}

/// Which text a film button shows and which goes in its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonMode {
    /// "title (year)" with the state name as tooltip
    ByTitle,
    /// State name with "title (year)" as tooltip
    ByState,
}

impl ButtonMode {
    pub fn caption(self, film: &Film) -> String {
        match self {
            ButtonMode::ByTitle => title_with_year(film),
            ButtonMode::ByState => film.region_name.clone(),
        }
    }

    pub fn tip(self, film: &Film) -> String {
        match self {
            ButtonMode::ByTitle => film.region_name.clone(),
            ButtonMode::ByState => title_with_year(film),
        }
    }
}

/// One clickable film button in a list surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmButtonView {
    pub id: ElementId,
    pub region_code: RegionCode,
    pub caption: String,
    pub tip: String,
    pub background: Colour,
    pub flag: ImageSlot,
}

impl FilmButtonView {
    pub fn build(film: &Film, mode: ButtonMode) -> DomainResult<Self> {
        Ok(Self {
            id: ElementId::new(),
            region_code: film.region_code.clone(),
            caption: mode.caption(film),
            tip: mode.tip(film),
            background: film.colour,
            flag: ImageSlot::new(flag_url(&film.region_code)?, flag_alt_text(film)),
        })
    }
}
