// src/application/commands/statistics_commands.rs

use tauri::State;

use crate::application::{dto::*, state::AppState};
use crate::views::BarChartView;

/// Films per decade, as a bar chart description
#[tauri::command]
pub async fn get_decade_chart(state: State<'_, AppState>) -> Result<BarChartView, String> {
    Ok(state.statistics_service.decade_chart())
}

#[tauri::command]
pub async fn get_statistics(state: State<'_, AppState>) -> Result<StatisticsDto, String> {
    Ok(StatisticsDto::from(state.statistics_service.calculate()))
}
