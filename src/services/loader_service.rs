// src/services/loader_service.rs
//
// Data loader: fetches the film dataset once, assigns each film its
// presentation colour and populates the repository.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::palette::random_active_colour;
use crate::domain::{validate_film, Film};
use crate::error::{AppError, AppResult};
use crate::events::{DatasetLoadFailed, DatasetLoaded, EventBus};
use crate::integrations::{DatasetSource, FilmRecord};
use crate::repositories::FilmRepository;

/// Where the one-time dataset load stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadState {
    NotLoaded,
    Loading,
    Ready {
        film_count: usize,
        loaded_at: DateTime<Utc>,
    },
    /// The fetch or parse failed; the catalog is still empty
    Unavailable { reason: String },
}

pub struct DataLoaderService {
    source: Arc<dyn DatasetSource>,
    film_repo: Arc<dyn FilmRepository>,
    event_bus: Arc<EventBus>,
    state: RwLock<LoadState>,
}

impl DataLoaderService {
    pub fn new(
        source: Arc<dyn DatasetSource>,
        film_repo: Arc<dyn FilmRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            source,
            film_repo,
            event_bus,
            state: RwLock::new(LoadState::NotLoaded),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch the dataset and populate the repository.
    ///
    /// Allowed while nothing is loaded yet or after a failed attempt.
    /// On success `DatasetLoaded` is emitted, which runs the render
    /// pipeline. On failure the state becomes `Unavailable` and nothing
    /// is rendered. There is no automatic retry.
    pub async fn load(&self) -> AppResult<usize> {
        self.begin()?;

        let source = self.source.describe();
        log::info!("Loading film dataset from {}", source);

        let films = match self.source.fetch().await {
            Ok(records) => assign_colours(records),
            Err(e) => return Err(self.fail(source, e)),
        };

        let film_count = match self.film_repo.populate(films) {
            Ok(count) => count,
            Err(e) => return Err(self.fail(source, e)),
        };

        self.set_state(LoadState::Ready {
            film_count,
            loaded_at: Utc::now(),
        });
        log::info!("Loaded {} films from {}", film_count, source);

        self.event_bus.emit(DatasetLoaded::new(film_count, source));
        Ok(film_count)
    }

    fn begin(&self) -> AppResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match *state {
            LoadState::Loading => {
                return Err(AppError::Other("Film dataset is already loading".to_string()))
            }
            LoadState::Ready { .. } => {
                return Err(AppError::Other("Film dataset is already loaded".to_string()))
            }
            LoadState::NotLoaded | LoadState::Unavailable { .. } => {}
        }
        *state = LoadState::Loading;
        Ok(())
    }

    fn fail(&self, source: String, error: AppError) -> AppError {
        let reason = error.to_string();
        log::error!("Film dataset from {} is unavailable: {}", source, reason);

        self.set_state(LoadState::Unavailable {
            reason: reason.clone(),
        });
        self.event_bus
            .emit(DatasetLoadFailed::new(source, reason.clone()));

        AppError::DataUnavailable(reason)
    }

    fn set_state(&self, state: LoadState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// Give every record an independent random colour from the active palette.
/// Records that break film invariants are skipped.
fn assign_colours(records: Vec<FilmRecord>) -> Vec<Film> {
    let mut rng = rand::thread_rng();

    records
        .into_iter()
        .map(|record| record.into_film(random_active_colour(&mut rng)))
        .filter(|film| match validate_film(film) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping film record '{}': {}", film.title, e);
                false
            }
        })
        .collect()
}
