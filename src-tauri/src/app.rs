//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::config::DATABASE_FILE_NAME;
use crate::database::{create_pool, Repository};
use crate::error::Result;
use crate::services::{
    AttachmentsService, DashboardService, EquipmentService, ExportService, InventoryService,
    RelationshipsService, SearchService, SettingsService,
};
use crate::session::Session;
use crate::storage::ImageStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: PathBuf,
    pub inventory_service: InventoryService,
    pub equipment_service: EquipmentService,
    pub attachments_service: AttachmentsService,
    pub relationships_service: RelationshipsService,
    pub search_service: SearchService,
    pub dashboard_service: DashboardService,
    pub export_service: ExportService,
    pub settings_service: SettingsService,
    /// Selected inventory and per-category form state
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    /// Open the database and image store under `app_data_dir` and wire
    /// the services together
    pub async fn initialize(app_data_dir: PathBuf) -> Result<Self> {
        tokio::fs::create_dir_all(&app_data_dir).await?;

        let pool = create_pool(&app_data_dir.join(DATABASE_FILE_NAME)).await?;
        let repo = Repository::new(pool);

        let images = ImageStore::new(app_data_dir.clone());
        images.initialize().await?;

        let settings_service = SettingsService::new(app_data_dir.clone());
        // Creates settings.json with defaults on first start
        settings_service.load().await?;

        Ok(Self {
            inventory_service: InventoryService::new(repo.clone(), images.clone()),
            equipment_service: EquipmentService::new(repo.clone(), images.clone()),
            attachments_service: AttachmentsService::new(repo.clone(), images.clone()),
            relationships_service: RelationshipsService::new(repo.clone()),
            search_service: SearchService::new(repo.clone()),
            dashboard_service: DashboardService::new(repo.clone()),
            export_service: ExportService::new(repo, images, settings_service.clone()),
            settings_service,
            session: Arc::new(Mutex::new(Session::new())),
            app_data_dir,
        })
    }
}

/// Application setup - called once on startup
#[cfg(feature = "desktop")]
pub fn setup(app: &mut tauri::App) -> Result<()> {
    use crate::error::AppError;
    use tauri::Manager;

    tracing::info!("Initializing application");

    let app_data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| AppError::Generic(format!("Failed to get app data dir: {}", e)))?;

    tracing::info!("App data directory: {:?}", app_data_dir);

    let state = tauri::async_runtime::block_on(AppState::initialize(app_data_dir))?;
    app.manage(state);

    tracing::info!("Application initialized successfully");

    Ok(())
}
