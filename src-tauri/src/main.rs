// Site Inventory - desktop IT equipment inventory and audit reports
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use site_inventory::{app, commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_inventory=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Site Inventory application");

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            // Inventories
            commands::list_inventories,
            commands::open_inventory,
            commands::new_inventory,
            commands::get_current_inventory,
            commands::save_general_info,
            commands::delete_current_inventory,
            commands::set_floor_plan,
            commands::clear_floor_plan,
            // Equipment
            commands::list_categories,
            commands::list_items,
            commands::edit_item,
            commands::save_item,
            commands::cancel_edit,
            commands::get_edit_state,
            commands::delete_item,
            // Attachments
            commands::attach_image,
            commands::list_images,
            commands::get_image_data,
            commands::delete_image,
            // Relationships
            commands::create_relationship,
            commands::list_item_relationships,
            commands::list_inventory_relationships,
            commands::update_relationship_notes,
            commands::delete_relationship,
            // Search and dashboard
            commands::search_items,
            commands::open_search_result,
            commands::get_dashboard_stats,
            // Export and settings
            commands::get_suggested_export_path,
            commands::export_inventory,
            commands::get_export_settings,
            commands::update_export_settings,
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")?;

    Ok(())
}
