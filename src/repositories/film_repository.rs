// src/repositories/film_repository.rs
//
// In-memory film catalog.
//
// Populated exactly once by the data loader, then read-only for the
// process lifetime. Orderings are computed at load and handed out as
// copies; nothing re-sorts them in place.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::domain::{sortable_title_key, Film, RegionCode};
use crate::error::{AppError, AppResult};

pub trait FilmRepository: Send + Sync {
    /// Store the loaded films. Fails if the catalog is already populated.
    fn populate(&self, films: Vec<Film>) -> AppResult<usize>;
    fn is_loaded(&self) -> bool;
    fn get_by_region(&self, region_code: &RegionCode) -> Option<Arc<Film>>;
    /// Films ordered by region name
    fn list_by_region_name(&self) -> Vec<Arc<Film>>;
    /// Films ordered by sortable title key
    fn list_by_title(&self) -> Vec<Arc<Film>>;
    fn count(&self) -> usize;
}

/// One film per region plus the two derived orderings.
#[derive(Debug, Default)]
pub struct FilmCatalog {
    by_region_code: HashMap<RegionCode, Arc<Film>>,
    by_region_order: Vec<Arc<Film>>,
    by_title_order: Vec<Arc<Film>>,
}

impl FilmCatalog {
    /// Build the catalog from films in load order.
    ///
    /// A repeated region code replaces the earlier film in place, so the
    /// last one loaded wins. Both sorts are stable; the title ordering is
    /// sorted from the region ordering, so equal title keys keep region
    /// name order.
    pub fn build(films: Vec<Film>) -> Self {
        let mut unique: Vec<Arc<Film>> = Vec::with_capacity(films.len());
        let mut positions: HashMap<RegionCode, usize> = HashMap::new();

        for film in films {
            let film = Arc::new(film);
            match positions.get(&film.region_code) {
                Some(&idx) => {
                    log::warn!(
                        "Duplicate region {} in dataset, '{}' replaces '{}'",
                        film.region_code,
                        film.title,
                        unique[idx].title
                    );
                    unique[idx] = film;
                }
                None => {
                    positions.insert(film.region_code.clone(), unique.len());
                    unique.push(film);
                }
            }
        }

        let by_region_code = unique
            .iter()
            .map(|film| (film.region_code.clone(), Arc::clone(film)))
            .collect();

        let mut by_region_order = unique;
        by_region_order.sort_by(|a, b| a.region_name.cmp(&b.region_name));

        let mut by_title_order = by_region_order.clone();
        by_title_order.sort_by(|a, b| sortable_title_key(&a.title).cmp(sortable_title_key(&b.title)));

        Self {
            by_region_code,
            by_region_order,
            by_title_order,
        }
    }

    pub fn get(&self, region_code: &RegionCode) -> Option<&Arc<Film>> {
        self.by_region_code.get(region_code)
    }

    pub fn by_region_order(&self) -> &[Arc<Film>] {
        &self.by_region_order
    }

    pub fn by_title_order(&self) -> &[Arc<Film>] {
        &self.by_title_order
    }

    pub fn len(&self) -> usize {
        self.by_region_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_region_order.is_empty()
    }
}

pub struct InMemoryFilmRepository {
    catalog: OnceLock<FilmCatalog>,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self {
            catalog: OnceLock::new(),
        }
    }
}

impl Default for InMemoryFilmRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmRepository for InMemoryFilmRepository {
    fn populate(&self, films: Vec<Film>) -> AppResult<usize> {
        let catalog = FilmCatalog::build(films);
        let count = catalog.len();

        self.catalog
            .set(catalog)
            .map_err(|_| AppError::Other("Film catalog is already loaded".to_string()))?;

        Ok(count)
    }

    fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    fn get_by_region(&self, region_code: &RegionCode) -> Option<Arc<Film>> {
        self.catalog.get()?.get(region_code).cloned()
    }

    fn list_by_region_name(&self) -> Vec<Arc<Film>> {
        self.catalog
            .get()
            .map(|c| c.by_region_order().to_vec())
            .unwrap_or_default()
    }

    fn list_by_title(&self) -> Vec<Arc<Film>> {
        self.catalog
            .get()
            .map(|c| c.by_title_order().to_vec())
            .unwrap_or_default()
    }

    fn count(&self) -> usize {
        self.catalog.get().map(FilmCatalog::len).unwrap_or(0)
    }
}
