//! Attachment-related commands
//!
//! Pictures attached to equipment items.

use crate::app::AppState;
use crate::database::{Category, ImageAttachment};
use crate::error::Result;
use std::path::PathBuf;
use tauri::State;

/// Copy a picture from disk and attach it to an item
#[tauri::command]
pub async fn attach_image(
    state: State<'_, AppState>,
    category: Category,
    item_id: i64,
    source_path: PathBuf,
) -> Result<ImageAttachment> {
    state
        .attachments_service
        .attach_image(category, item_id, &source_path)
        .await
}

/// List all pictures of an item
#[tauri::command]
pub async fn list_images(
    state: State<'_, AppState>,
    category: Category,
    item_id: i64,
) -> Result<Vec<ImageAttachment>> {
    state
        .attachments_service
        .list_images(category, item_id)
        .await
}

/// Get picture bytes for display
#[tauri::command]
pub async fn get_image_data(state: State<'_, AppState>, image_id: i64) -> Result<Vec<u8>> {
    state.attachments_service.get_image_data(image_id).await
}

/// Delete a picture
#[tauri::command]
pub async fn delete_image(state: State<'_, AppState>, image_id: i64) -> Result<()> {
    state.attachments_service.delete_image(image_id).await
}
