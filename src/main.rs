// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

// Direct imports for Tauri command handler macro
use filmmap::application::commands::*;
// All other necessary components for initialization
use filmmap::application::state::AppState;
use filmmap::config::AppConfig;
use filmmap::events::{register_pipeline_handlers, EventBus};
use filmmap::integrations::WebviewMapWidget;
use filmmap::repositories::*;
use filmmap::services::*;

fn main() -> anyhow::Result<()> {
    // 0. LOGGING (RUST_LOG, default info; `log` records are bridged)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. CONFIGURATION & INFRASTRUCTURE
    let config = AppConfig::load().context("failed to load configuration")?;
    let event_bus = Arc::new(EventBus::new());
    let dataset_source = config
        .dataset_source()
        .context("failed to build dataset source")?;
    let map_widget = Arc::new(WebviewMapWidget::us());

    // 2. REPOSITORIES
    let film_repo: Arc<dyn FilmRepository> = Arc::new(InMemoryFilmRepository::new());

    // 3. SERVICES
    let loader_service = Arc::new(DataLoaderService::new(
        dataset_source,
        film_repo.clone(),
        event_bus.clone(),
    ));
    let view_service = Arc::new(ViewRendererService::new(film_repo.clone(), event_bus.clone()));
    let map_service = Arc::new(MapAdapterService::new(
        film_repo.clone(),
        map_widget,
        event_bus.clone(),
    ));
    let navigation_service = Arc::new(NavigationService::new(
        map_service.clone(),
        event_bus.clone(),
    ));
    let detail_service = Arc::new(DetailPresenterService::new(
        film_repo.clone(),
        event_bus.clone(),
    ));
    let statistics_service = Arc::new(StatisticsService::new(
        film_repo.clone(),
        view_service.clone(),
        config.title_length_policy,
    ));

    // 4. EVENT HANDLER REGISTRATION (WIRING)
    register_pipeline_handlers(
        &event_bus,
        view_service.clone(),
        navigation_service.clone(),
        statistics_service.clone(),
        detail_service.clone(),
    );

    // 5. APPLICATION STATE
    let app_state = AppState {
        film_repository: film_repo,
        loader_service: loader_service.clone(),
        view_service,
        map_service,
        navigation_service,
        detail_service,
        statistics_service,
    };

    // 6. TAURI BOOTSTRAP
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(app_state)
        .setup(move |_app| {
            // The one suspension point: fetch the dataset off the UI thread
            tauri::async_runtime::spawn(async move {
                if let Err(e) = loader_service.load().await {
                    log::error!("Initial dataset load failed: {}", e);
                }
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_load_state,
            reload_dataset,
            get_film_count,
            get_list,
            click_element,
            report_image_status,
            navigate,
            get_navigation,
            get_map_view,
            map_region_click,
            map_region_tip,
            show_details,
            get_details,
            close_details,
            report_detail_image_status,
            get_decade_chart,
            get_statistics,
            open_external_link,
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")?;

    Ok(())
}
