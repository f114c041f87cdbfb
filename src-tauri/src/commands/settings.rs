//! Settings-related commands
//!
//! Commands for managing export settings (company name, logo, default
//! directory).

use crate::app::AppState;
use crate::error::Result;
use crate::services::ExportSettings;
use tauri::State;

#[tauri::command]
pub async fn get_export_settings(state: State<'_, AppState>) -> Result<ExportSettings> {
    state.settings_service.get_export().await
}

/// Update export settings; used by the next export
#[tauri::command]
pub async fn update_export_settings(
    state: State<'_, AppState>,
    settings: ExportSettings,
) -> Result<()> {
    state.settings_service.update_export(settings).await
}
