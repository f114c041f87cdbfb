//! Search and dashboard commands

use crate::app::AppState;
use crate::database::Category;
use crate::error::Result;
use crate::services::{DashboardStats, ItemDetail, SearchEntry};
use tauri::State;

/// Search the items of the selected inventory
#[tauri::command]
pub async fn search_items(state: State<'_, AppState>, query: String) -> Result<Vec<SearchEntry>> {
    let inventory_id = state.session.lock().await.require_inventory()?;
    state.search_service.search(inventory_id, &query).await
}

/// Item, pictures and relationships of a search result
#[tauri::command]
pub async fn open_search_result(
    state: State<'_, AppState>,
    category: Category,
    item_id: i64,
) -> Result<ItemDetail> {
    state.search_service.open_result(category, item_id).await
}

#[tauri::command]
pub async fn get_dashboard_stats(state: State<'_, AppState>) -> Result<DashboardStats> {
    let inventory_id = state.session.lock().await.require_inventory()?;
    state.dashboard_service.stats(inventory_id).await
}
