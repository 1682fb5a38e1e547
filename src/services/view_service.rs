// src/services/view_service.rs
//
// View renderer: builds film button lists for the list surfaces and
// routes their interactions.
//
// Every render of a surface replaces its elements and its click bindings
// wholesale. Bindings only exist for elements from the latest render, so
// re-rendering never duplicates them.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{Film, RegionCode};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, RegionSelected};
use crate::repositories::FilmRepository;
use crate::views::{ButtonMode, ElementId, FilmButtonView, ImageStatus, SurfaceId};

/// Elements currently mounted in one surface, plus their click bindings
#[derive(Debug, Default)]
struct RenderedSurface {
    elements: Vec<FilmButtonView>,
    bindings: HashMap<ElementId, RegionCode>,
}

impl RenderedSurface {
    fn push(&mut self, element: FilmButtonView) {
        self.bindings.insert(element.id, element.region_code.clone());
        self.elements.push(element);
    }
}

pub struct ViewRendererService {
    film_repo: Arc<dyn FilmRepository>,
    event_bus: Arc<EventBus>,
    surfaces: RwLock<HashMap<SurfaceId, RenderedSurface>>,
}

impl ViewRendererService {
    pub fn new(film_repo: Arc<dyn FilmRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            film_repo,
            event_bus,
            surfaces: RwLock::new(HashMap::new()),
        }
    }

    /// Clear `surface` and fill it with one button per film, in order.
    pub fn render_list(
        &self,
        surface: SurfaceId,
        films: &[Arc<Film>],
        mode: ButtonMode,
    ) -> AppResult<Vec<FilmButtonView>> {
        let elements = build_buttons(films, mode)?;

        let mut rendered = RenderedSurface::default();
        for element in elements.iter().cloned() {
            rendered.push(element);
        }

        self.surfaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(surface, rendered);

        log::debug!("Rendered {} elements into {}", elements.len(), surface);
        Ok(elements)
    }

    /// Add buttons after whatever `surface` already holds.
    pub fn append_list(
        &self,
        surface: SurfaceId,
        films: &[Arc<Film>],
        mode: ButtonMode,
    ) -> AppResult<Vec<FilmButtonView>> {
        let elements = build_buttons(films, mode)?;

        let mut surfaces = self.surfaces.write().unwrap_or_else(PoisonError::into_inner);
        let rendered = surfaces.entry(surface).or_default();
        for element in elements.iter().cloned() {
            rendered.push(element);
        }

        Ok(elements)
    }

    /// States list: ordered by state name, captioned with the state
    pub fn render_state_list(&self) -> AppResult<usize> {
        let films = self.film_repo.list_by_region_name();
        Ok(self
            .render_list(SurfaceId::StateList, &films, ButtonMode::ByState)?
            .len())
    }

    /// Movies list: ordered by sortable title, captioned with the title
    pub fn render_movie_list(&self) -> AppResult<usize> {
        let films = self.film_repo.list_by_title();
        Ok(self
            .render_list(SurfaceId::MovieList, &films, ButtonMode::ByTitle)?
            .len())
    }

    /// Value of the film count surface
    pub fn film_count(&self) -> usize {
        self.film_repo.list_by_region_name().len()
    }

    pub fn surface(&self, surface: SurfaceId) -> Vec<FilmButtonView> {
        self.surfaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&surface)
            .map(|rendered| rendered.elements.clone())
            .unwrap_or_default()
    }

    /// Number of live click bindings on a surface
    pub fn binding_count(&self, surface: SurfaceId) -> usize {
        self.surfaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&surface)
            .map(|rendered| rendered.bindings.len())
            .unwrap_or(0)
    }

    /// Route a click on a rendered element to the detail view.
    /// Clicks on elements that are no longer mounted are ignored.
    pub fn click(&self, surface: SurfaceId, element_id: ElementId) -> bool {
        let region_code = {
            let surfaces = self.surfaces.read().unwrap_or_else(PoisonError::into_inner);
            surfaces
                .get(&surface)
                .and_then(|rendered| rendered.bindings.get(&element_id))
                .cloned()
        };

        match region_code {
            Some(region_code) => {
                self.event_bus.emit(RegionSelected::new(region_code));
                true
            }
            None => {
                log::debug!("Ignoring click on stale element {} in {}", element_id, surface);
                false
            }
        }
    }

    /// Apply a flag image load outcome to one element
    pub fn report_image_status(
        &self,
        surface: SurfaceId,
        element_id: ElementId,
        src: &str,
        status: ImageStatus,
    ) -> bool {
        let mut surfaces = self.surfaces.write().unwrap_or_else(PoisonError::into_inner);
        surfaces
            .get_mut(&surface)
            .and_then(|rendered| rendered.elements.iter_mut().find(|e| e.id == element_id))
            .map(|element| element.flag.report(src, status))
            .unwrap_or(false)
    }
}

fn build_buttons(films: &[Arc<Film>], mode: ButtonMode) -> AppResult<Vec<FilmButtonView>> {
    films
        .iter()
        .map(|film| FilmButtonView::build(film, mode).map_err(AppError::from))
        .collect()
}
