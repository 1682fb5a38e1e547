// src/events/handlers/pipeline_handler.rs
//
// Pipeline Event Handlers
//
// Bridges the event bus to the presentation services:
// - DatasetLoaded runs the loaded continuation (map, lists, statistics)
// - RegionSelected opens the detail surface
//
// CRITICAL RULES:
// - Delegates all logic to services
// - Errors are logged, never propagated into the bus

use std::sync::Arc;

use crate::events::{DatasetLoaded, EventBus, RegionSelected};
use crate::services::{
    DetailPresenterService, NavigationService, StatisticsService, ViewRendererService,
};

// ============================================================================
// HANDLER REGISTRATION
// ============================================================================

/// Registers the render pipeline with the event bus.
pub fn register_pipeline_handlers(
    bus: &EventBus,
    views: Arc<ViewRendererService>,
    navigation: Arc<NavigationService>,
    statistics: Arc<StatisticsService>,
    detail: Arc<DetailPresenterService>,
) {
    bus.subscribe::<DatasetLoaded, _>(move |event| {
        handle_dataset_loaded(&views, &navigation, &statistics, event);
    });

    bus.subscribe::<RegionSelected, _>(move |event| {
        handle_region_selected(&detail, event);
    });

    log::debug!("Pipeline handlers registered");
}

// ============================================================================
// DATASET LOADED HANDLER
// ============================================================================

/// Order: film count, map (only when on screen), state list, movie list,
/// statistics. A failing step is logged and the remaining steps still run.
fn handle_dataset_loaded(
    views: &ViewRendererService,
    navigation: &NavigationService,
    statistics: &StatisticsService,
    event: &DatasetLoaded,
) {
    log::info!(
        "Rendering {} films from {}",
        views.film_count(),
        event.source
    );

    if let Err(e) = navigation.on_dataset_loaded() {
        log::error!("Failed to initialise map: {}", e);
    }

    if let Err(e) = views.render_state_list() {
        log::error!("Failed to render state list: {}", e);
    }

    if let Err(e) = views.render_movie_list() {
        log::error!("Failed to render movie list: {}", e);
    }

    if let Err(e) = statistics.render_surfaces() {
        log::error!("Failed to render statistics: {}", e);
    }
}

// ============================================================================
// REGION SELECTED HANDLER
// ============================================================================

fn handle_region_selected(detail: &DetailPresenterService, event: &RegionSelected) {
    match detail.show_details(&event.region_code) {
        Ok(true) => log::debug!("Showing details for {}", event.region_code),
        Ok(false) => {}
        Err(e) => log::error!(
            "Failed to show details for {}: {}",
            event.region_code,
            e
        ),
    }
}
