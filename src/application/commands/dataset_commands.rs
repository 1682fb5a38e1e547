// src/application/commands/dataset_commands.rs

use tauri::State;

use crate::application::{state::AppState, ToErrorResponse};
use crate::services::LoadState;

/// Where the dataset load stands
#[tauri::command]
pub async fn get_load_state(state: State<'_, AppState>) -> Result<LoadState, String> {
    Ok(state.loader_service.state())
}

/// Retry the dataset load after a failure
#[tauri::command]
pub async fn reload_dataset(state: State<'_, AppState>) -> Result<usize, String> {
    state.loader_service.load().await.to_error_response()
}
