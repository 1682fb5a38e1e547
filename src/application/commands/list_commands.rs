// src/application/commands/list_commands.rs

use tauri::State;

use crate::application::{dto::*, state::AppState};
use crate::views::{FilmButtonView, SurfaceId};

/// Number shown in the film count surface
#[tauri::command]
pub async fn get_film_count(state: State<'_, AppState>) -> Result<usize, String> {
    Ok(state.view_service.film_count())
}

/// Elements currently rendered into a list surface
#[tauri::command]
pub async fn get_list(
    surface: SurfaceId,
    state: State<'_, AppState>,
) -> Result<Vec<FilmButtonView>, String> {
    Ok(state.view_service.surface(surface))
}

/// Returns false when the element is no longer rendered
#[tauri::command]
pub async fn click_element(
    dto: ClickElementDto,
    state: State<'_, AppState>,
) -> Result<bool, String> {
    Ok(state.view_service.click(dto.surface, dto.element_id))
}

#[tauri::command]
pub async fn report_image_status(
    dto: ElementImageStatusDto,
    state: State<'_, AppState>,
) -> Result<bool, String> {
    Ok(state
        .view_service
        .report_image_status(dto.surface, dto.element_id, &dto.src, dto.status))
}
