// src/application/commands/detail_commands.rs

use tauri::State;

use crate::application::{dto::*, state::AppState, ToErrorResponse};
use crate::domain::RegionCode;
use crate::views::DetailView;

/// Returns false when the region has no film
#[tauri::command]
pub async fn show_details(
    region_code: RegionCode,
    state: State<'_, AppState>,
) -> Result<bool, String> {
    state
        .detail_service
        .show_details(&region_code)
        .to_error_response()
}

#[tauri::command]
pub async fn get_details(state: State<'_, AppState>) -> Result<Option<DetailView>, String> {
    Ok(state.detail_service.current())
}

#[tauri::command]
pub async fn close_details(state: State<'_, AppState>) -> Result<(), String> {
    state.detail_service.close();
    Ok(())
}

#[tauri::command]
pub async fn report_detail_image_status(
    dto: DetailImageStatusDto,
    state: State<'_, AppState>,
) -> Result<bool, String> {
    Ok(state
        .detail_service
        .report_image_status(dto.image, &dto.src, dto.status))
}
