// src/application/state.rs

use std::sync::Arc;

use crate::repositories::FilmRepository;
use crate::services::{
    DataLoaderService, DetailPresenterService, MapAdapterService, NavigationService,
    StatisticsService, ViewRendererService,
};

/// Application state managed by Tauri.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub film_repository: Arc<dyn FilmRepository>,
    pub loader_service: Arc<DataLoaderService>,
    pub view_service: Arc<ViewRendererService>,
    pub map_service: Arc<MapAdapterService>,
    pub navigation_service: Arc<NavigationService>,
    pub detail_service: Arc<DetailPresenterService>,
    pub statistics_service: Arc<StatisticsService>,
}
