//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `inventories`: Inventory selection, general information and floor plan
//! - `equipment`: Category item forms (create, edit, delete)
//! - `attachments`: Item pictures
//! - `relationships`: Connections between items
//! - `search`: Search and dashboard figures
//! - `export`: PDF and spreadsheet export
//! - `settings`: Export settings

pub mod attachments;
pub mod equipment;
pub mod export;
pub mod inventories;
pub mod relationships;
pub mod search;
pub mod settings;

use crate::app::AppState;
use crate::error::Result;
use tauri::State;

// Re-export all commands for convenient registration in main.rs
pub use attachments::*;
pub use equipment::*;
pub use export::*;
pub use inventories::*;
pub use relationships::*;
pub use search::*;
pub use settings::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub async fn get_app_info(state: State<'_, AppState>) -> Result<AppInfo> {
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app_data_dir: state.app_data_dir.to_string_lossy().to_string(),
    })
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub version: String,
    pub app_data_dir: String,
}
