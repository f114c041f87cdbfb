//! Inventories service
//!
//! Lifecycle of the per-site inventory record: general information,
//! floor plan and deletion with file cleanup.

use crate::config::MAX_SITE_NAME_LENGTH;
use crate::database::{GeneralInfo, Inventory, InventorySnapshot, InventorySummary, Repository};
use crate::error::{AppError, Result};
use crate::storage::ImageStore;
use std::path::Path;

/// Service for managing inventories
#[derive(Clone)]
pub struct InventoryService {
    repo: Repository,
    images: ImageStore,
}

impl InventoryService {
    pub fn new(repo: Repository, images: ImageStore) -> Self {
        Self { repo, images }
    }

    pub async fn list_inventories(&self) -> Result<Vec<InventorySummary>> {
        self.repo.list_inventories().await
    }

    pub async fn get_inventory(&self, id: i64) -> Result<Inventory> {
        self.repo.get_inventory(id).await
    }

    /// Create a new inventory from the general information form
    pub async fn create_inventory(&self, info: GeneralInfo) -> Result<Inventory> {
        let info = validate_general_info(info)?;
        tracing::info!("Creating inventory: {}", info.site_name);

        let inventory = self.repo.create_inventory(&info).await?;

        tracing::info!("Inventory created successfully: {}", inventory.id);
        Ok(inventory)
    }

    /// Save the general information form over an existing inventory
    pub async fn update_inventory(&self, id: i64, info: GeneralInfo) -> Result<Inventory> {
        let info = validate_general_info(info)?;
        tracing::info!("Updating inventory: {}", id);

        self.repo.update_inventory(id, &info).await
    }

    /// Delete an inventory, its items, and every picture file it owns
    pub async fn delete_inventory(&self, id: i64) -> Result<()> {
        tracing::info!("Deleting inventory: {}", id);

        let floor_plan = self.repo.get_inventory(id).await?.floor_plan_path;
        let removed = self.repo.delete_inventory(id).await?;

        self.images
            .delete_best_effort(
                removed
                    .iter()
                    .map(|image| image.image_path.as_str())
                    .chain(floor_plan.as_deref()),
            )
            .await;

        tracing::info!(
            "Inventory deleted successfully: {} ({} images)",
            id,
            removed.len()
        );
        Ok(())
    }

    /// Copy a picture into the image store and use it as the floor plan.
    ///
    /// The previous floor plan file, if any, is removed.
    pub async fn set_floor_plan(&self, id: i64, source: &Path) -> Result<Inventory> {
        tracing::info!("Setting floor plan of inventory {} from {:?}", id, source);

        let stored = self.images.import(source).await?;

        let previous = match self.repo.set_floor_plan(id, Some(&stored.relative_path)).await {
            Ok(previous) => previous,
            Err(e) => {
                self.images
                    .delete_best_effort([stored.relative_path.as_str()])
                    .await;
                return Err(e);
            }
        };

        self.images.delete_best_effort(previous.as_deref()).await;

        self.repo.get_inventory(id).await
    }

    pub async fn clear_floor_plan(&self, id: i64) -> Result<Inventory> {
        let previous = self.repo.set_floor_plan(id, None).await?;
        self.images.delete_best_effort(previous.as_deref()).await;

        self.repo.get_inventory(id).await
    }

    /// Load the inventory with all its category row-sets
    pub async fn load_snapshot(&self, id: i64) -> Result<InventorySnapshot> {
        self.repo.load_snapshot(id).await
    }
}

fn validate_general_info(mut info: GeneralInfo) -> Result<GeneralInfo> {
    info.site_name = info.site_name.trim().to_string();

    if info.site_name.is_empty() {
        return Err(AppError::Validation(
            "El nombre del cliente es obligatorio.".to_string(),
        ));
    }

    if info.site_name.chars().count() > MAX_SITE_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "El nombre del cliente no puede superar {} caracteres.",
            MAX_SITE_NAME_LENGTH
        )));
    }

    Ok(info)
}
