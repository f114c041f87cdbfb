//! Equipment commands
//!
//! One set of commands serves all ten categories; the category travels as
//! a snake_case string (`pc`, `cctv_camera`, ...).

use crate::app::AppState;
use crate::database::{Category, Column, EquipmentItem};
use crate::error::Result;
use crate::session::EditState;
use std::collections::HashMap;
use tauri::State;

/// Form layout of one category
#[derive(serde::Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub columns: &'static [Column],
}

/// Categories in display order with their columns
#[tauri::command]
pub fn list_categories() -> Vec<CategoryInfo> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let descriptor = category.descriptor();
            CategoryInfo {
                category,
                label: descriptor.label,
                columns: descriptor.columns,
            }
        })
        .collect()
}

/// List the items of a category in the selected inventory
#[tauri::command]
pub async fn list_items(state: State<'_, AppState>, category: Category) -> Result<Vec<EquipmentItem>> {
    let inventory_id = state.session.lock().await.require_inventory()?;
    state
        .equipment_service
        .list_items(category, inventory_id)
        .await
}

/// Load an item into its category form for editing
#[tauri::command]
pub async fn edit_item(
    state: State<'_, AppState>,
    category: Category,
    id: i64,
) -> Result<EquipmentItem> {
    let mut session = state.session.lock().await;
    session
        .edit_item(&state.equipment_service, category, id)
        .await
}

/// Save a category form, creating or updating depending on its state.
///
/// `fields` maps column names to values; missing columns are saved empty.
#[tauri::command]
pub async fn save_item(
    state: State<'_, AppState>,
    category: Category,
    fields: HashMap<String, String>,
) -> Result<EquipmentItem> {
    let values = category.values_from_map(&fields)?;
    let mut session = state.session.lock().await;
    session
        .save_item(&state.equipment_service, category, values)
        .await
}

/// Abandon an edit and return the form to creating
#[tauri::command]
pub async fn cancel_edit(state: State<'_, AppState>, category: Category) -> Result<()> {
    state.session.lock().await.cancel_edit(category);
    Ok(())
}

#[tauri::command]
pub async fn get_edit_state(state: State<'_, AppState>, category: Category) -> Result<EditState> {
    Ok(state.session.lock().await.edit_state(category))
}

/// Delete an item with its pictures and relationships
#[tauri::command]
pub async fn delete_item(state: State<'_, AppState>, category: Category, id: i64) -> Result<()> {
    let mut session = state.session.lock().await;
    session
        .delete_item(&state.equipment_service, category, id)
        .await
}
