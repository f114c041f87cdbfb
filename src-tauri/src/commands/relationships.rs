//! Relationship commands

use crate::app::AppState;
use crate::database::{Category, CreateRelationshipRequest, ItemRelationship};
use crate::error::Result;
use tauri::State;

#[tauri::command]
pub async fn create_relationship(
    state: State<'_, AppState>,
    request: CreateRelationshipRequest,
) -> Result<ItemRelationship> {
    state
        .relationships_service
        .create_relationship(request)
        .await
}

/// Relationships where the item is parent or child
#[tauri::command]
pub async fn list_item_relationships(
    state: State<'_, AppState>,
    category: Category,
    item_id: i64,
) -> Result<Vec<ItemRelationship>> {
    state
        .relationships_service
        .list_for_item(category, item_id)
        .await
}

/// All relationships of the selected inventory
#[tauri::command]
pub async fn list_inventory_relationships(
    state: State<'_, AppState>,
) -> Result<Vec<ItemRelationship>> {
    let inventory_id = state.session.lock().await.require_inventory()?;
    state
        .relationships_service
        .list_for_inventory(inventory_id)
        .await
}

#[tauri::command]
pub async fn update_relationship_notes(
    state: State<'_, AppState>,
    id: i64,
    notes: String,
) -> Result<ItemRelationship> {
    state.relationships_service.update_notes(id, notes).await
}

#[tauri::command]
pub async fn delete_relationship(state: State<'_, AppState>, id: i64) -> Result<()> {
    state.relationships_service.delete_relationship(id).await
}
