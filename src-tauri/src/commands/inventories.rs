//! Inventory commands
//!
//! Selecting, creating and deleting the inventory the session works on.

use crate::app::AppState;
use crate::database::{GeneralInfo, Inventory, InventorySummary};
use crate::error::Result;
use std::path::PathBuf;
use tauri::State;

/// List all inventories for the selector
#[tauri::command]
pub async fn list_inventories(state: State<'_, AppState>) -> Result<Vec<InventorySummary>> {
    state.inventory_service.list_inventories().await
}

/// Load an inventory into the session
#[tauri::command]
pub async fn open_inventory(state: State<'_, AppState>, id: i64) -> Result<Inventory> {
    let mut session = state.session.lock().await;
    session.open_inventory(&state.inventory_service, id).await
}

/// Clear the session for a new, unsaved inventory
#[tauri::command]
pub async fn new_inventory(state: State<'_, AppState>) -> Result<()> {
    state.session.lock().await.new_inventory();
    Ok(())
}

/// The inventory selected in the session, if any
#[tauri::command]
pub async fn get_current_inventory(state: State<'_, AppState>) -> Result<Option<Inventory>> {
    let current = state.session.lock().await.current_inventory();
    match current {
        Some(id) => Ok(Some(state.inventory_service.get_inventory(id).await?)),
        None => Ok(None),
    }
}

/// Save the general information form (creates the inventory on first save)
#[tauri::command]
pub async fn save_general_info(state: State<'_, AppState>, info: GeneralInfo) -> Result<Inventory> {
    let mut session = state.session.lock().await;
    session
        .save_general_info(&state.inventory_service, info)
        .await
}

/// Delete the selected inventory with all its items and pictures
#[tauri::command]
pub async fn delete_current_inventory(state: State<'_, AppState>) -> Result<()> {
    let mut session = state.session.lock().await;
    session
        .delete_current_inventory(&state.inventory_service)
        .await
}

/// Copy a picture in as the floor plan of the selected inventory
#[tauri::command]
pub async fn set_floor_plan(state: State<'_, AppState>, source_path: PathBuf) -> Result<Inventory> {
    let id = state.session.lock().await.require_inventory()?;
    state
        .inventory_service
        .set_floor_plan(id, &source_path)
        .await
}

/// Remove the floor plan of the selected inventory
#[tauri::command]
pub async fn clear_floor_plan(state: State<'_, AppState>) -> Result<Inventory> {
    let id = state.session.lock().await.require_inventory()?;
    state.inventory_service.clear_floor_plan(id).await
}
