// src/application/commands/navigation_commands.rs

use tauri::State;

use crate::application::{state::AppState, ToErrorResponse};
use crate::views::{NavigationView, Section};

#[tauri::command]
pub async fn navigate(
    section: Section,
    state: State<'_, AppState>,
) -> Result<NavigationView, String> {
    state.navigation_service.navigate(section).to_error_response()
}

#[tauri::command]
pub async fn get_navigation(state: State<'_, AppState>) -> Result<NavigationView, String> {
    Ok(state.navigation_service.view())
}
