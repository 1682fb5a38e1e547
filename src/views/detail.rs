// src/views/detail.rs

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::{Colour, ExternalService, RegionCode};
use crate::views::ImageSlot;

/// Images on the detail surface that report load outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailImage {
    Flag,
    Poster,
}

/// One external link on the detail surface.
/// Hidden links keep their slot so the layout does not shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub service: ExternalService,
    pub element_id: &'static str,
    pub label: String,
    pub href: Option<String>,
    pub visible: bool,
}

impl LinkView {
    pub fn new(service: ExternalService, href: Option<Url>) -> Self {
        Self {
            service,
            element_id: service.element_id(),
            label: service.to_string(),
            visible: href.is_some(),
            href: href.map(String::from),
        }
    }
}

/// Content of the single shared detail surface (the film modal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub open: bool,
    pub region_code: RegionCode,
    pub state_name: String,
    pub title: String,
    pub year: u32,
    pub flag: ImageSlot,
    /// `None` shows the placeholder visual instead of a poster
    pub poster: Option<ImageSlot>,
    pub original_title: Option<String>,
    pub reviewer: Option<String>,
    pub links: Vec<LinkView>,
    pub accent: Colour,
}

impl DetailView {
    pub fn shows_placeholder(&self) -> bool {
        self.poster.is_none()
    }

    pub fn link(&self, service: ExternalService) -> Option<&LinkView> {
        self.links.iter().find(|link| link.service == service)
    }

    pub fn visible_links(&self) -> impl Iterator<Item = &LinkView> {
        self.links.iter().filter(|link| link.visible)
    }
}
