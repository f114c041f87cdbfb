//! Export commands
//!
//! The frontend asks for a suggested path, shows the save dialog and then
//! calls `export_inventory` with the chosen destination.

use crate::app::AppState;
use crate::error::Result;
use crate::services::ExportFormat;
use std::path::PathBuf;
use tauri::State;

/// Default destination for the save dialog
#[tauri::command]
pub async fn get_suggested_export_path(
    state: State<'_, AppState>,
    format: ExportFormat,
) -> Result<PathBuf> {
    let inventory_id = state.session.lock().await.require_inventory()?;
    state
        .export_service
        .suggested_path(inventory_id, format)
        .await
}

/// Export the selected inventory as PDF or spreadsheet
#[tauri::command]
pub async fn export_inventory(
    state: State<'_, AppState>,
    format: ExportFormat,
    destination: PathBuf,
) -> Result<PathBuf> {
    let inventory_id = state.session.lock().await.require_inventory()?;
    state
        .export_service
        .export(inventory_id, format, &destination)
        .await
}
