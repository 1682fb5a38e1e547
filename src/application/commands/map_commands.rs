// src/application/commands/map_commands.rs
//
// The webview mirrors `MapView`: it rebuilds the map widget whenever the
// generation changes and removes it when no config is mounted.

use tauri::State;

use crate::application::state::AppState;
use crate::domain::RegionCode;
use crate::views::MapView;

#[tauri::command]
pub async fn get_map_view(state: State<'_, AppState>) -> Result<MapView, String> {
    Ok(state.map_service.view())
}

#[tauri::command]
pub async fn map_region_click(
    region_code: RegionCode,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state.map_service.region_click(region_code);
    Ok(())
}

/// Tooltip override for a region; `None` keeps the widget's own label
#[tauri::command]
pub async fn map_region_tip(
    region_code: RegionCode,
    state: State<'_, AppState>,
) -> Result<Option<String>, String> {
    Ok(state.map_service.region_tip(&region_code))
}
