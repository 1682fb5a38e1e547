// src/services/detail_service.rs
//
// Detail presenter: fills the single shared film details surface.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{
    flag_alt_text, flag_url, poster_alt_text, DomainResult, ExternalService, Film, RegionCode,
};
use crate::error::AppResult;
use crate::events::{DetailsShown, EventBus};
use crate::repositories::FilmRepository;
use crate::views::{DetailImage, DetailView, ImageSlot, ImageStatus, LinkView};

pub struct DetailPresenterService {
    film_repo: Arc<dyn FilmRepository>,
    event_bus: Arc<EventBus>,
    surface: RwLock<Option<DetailView>>,
}

impl DetailPresenterService {
    pub fn new(film_repo: Arc<dyn FilmRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            film_repo,
            event_bus,
            surface: RwLock::new(None),
        }
    }

    /// Show the film for `region_code` and open the surface.
    ///
    /// Regions without a film leave the surface exactly as it was and
    /// return `false`. The new content is built completely before the
    /// old content is replaced, so a failure never leaves a half-updated
    /// surface behind.
    pub fn show_details(&self, region_code: &RegionCode) -> AppResult<bool> {
        let Some(film) = self.film_repo.get_by_region(region_code) else {
            log::debug!("No film for region {}, details unchanged", region_code);
            return Ok(false);
        };

        {
            let mut surface = self.surface.write().unwrap_or_else(PoisonError::into_inner);
            let flag = surface
                .as_ref()
                .map(|previous| previous.flag.clone())
                .unwrap_or_else(|| ImageSlot::new(String::new(), String::new()));
            let view = build_detail(&film, flag)?;
            *surface = Some(view);
        }

        self.event_bus.emit(DetailsShown::new(film.region_code.clone()));
        Ok(true)
    }

    pub fn current(&self) -> Option<DetailView> {
        self.surface
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Close the surface. Its content stays until the next film is shown.
    pub fn close(&self) {
        if let Some(view) = self
            .surface
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            view.open = false;
        }
    }

    /// Apply an image load outcome reported by the webview.
    pub fn report_image_status(&self, image: DetailImage, src: &str, status: ImageStatus) -> bool {
        let mut surface = self.surface.write().unwrap_or_else(PoisonError::into_inner);
        let Some(view) = surface.as_mut() else {
            return false;
        };

        match image {
            DetailImage::Flag => view.flag.report(src, status),
            DetailImage::Poster => view
                .poster
                .as_mut()
                .map(|poster| poster.report(src, status))
                .unwrap_or(false),
        }
    }
}

/// `flag` is the slot from the previous render; it is pointed at the new
/// film's flag, which re-arms its load toggle.
fn build_detail(film: &Film, mut flag: ImageSlot) -> DomainResult<DetailView> {
    flag.set_source(flag_url(&film.region_code)?, flag_alt_text(film));

    let poster = film
        .poster_image()
        .map(|src| ImageSlot::new(src, poster_alt_text(film)));

    let links = ExternalService::ALL
        .iter()
        .map(|&service| {
            film.links
                .slug(service)
                .map(|slug| service.url(slug))
                .transpose()
                .map(|href| LinkView::new(service, href))
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(DetailView {
        open: true,
        region_code: film.region_code.clone(),
        state_name: film.region_name.clone(),
        title: film.title.clone(),
        year: film.year,
        flag,
        poster,
        original_title: film.original_title().map(str::to_string),
        reviewer: film.reviewer().map(str::to_string),
        links,
        accent: film.colour,
    })
}
