// src/application/commands/link_commands.rs
//
// External links open in the system browser. The URL is always rebuilt
// from the loaded film, never taken from the webview.

use tauri::{AppHandle, State};
use tauri_plugin_shell::ShellExt;

use crate::application::{state::AppState, ToErrorResponse};
use crate::domain::{ExternalService, RegionCode};
use crate::error::{AppError, AppResult};

#[tauri::command]
pub async fn open_external_link(
    region_code: RegionCode,
    service: ExternalService,
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let url = external_link(&state, &region_code, service).to_error_response()?;

    log::info!("Opening {} link for {}: {}", service, region_code, url);

    #[allow(deprecated)]
    let opened = app.shell().open(url, None);

    opened
        .map_err(|e| AppError::Other(format!("Failed to open link: {}", e)))
        .to_error_response()
}

/// Link for `service` on the film of `region_code`. `NotFound` when the
/// region has no film or the film has no slug for the service.
fn external_link(
    state: &AppState,
    region_code: &RegionCode,
    service: ExternalService,
) -> AppResult<String> {
    let film = state
        .film_repository
        .get_by_region(region_code)
        .ok_or(AppError::NotFound)?;

    let slug = film.links.slug(service).ok_or(AppError::NotFound)?;

    Ok(service.url(slug)?.into())
}
