//! Equipment service
//!
//! The CRUD pipeline shared by the ten categories. Field values are
//! positional and follow the category descriptor's column order.

use crate::database::{Category, EquipmentItem, Repository};
use crate::error::Result;
use crate::storage::ImageStore;

/// Service for managing equipment items
#[derive(Clone)]
pub struct EquipmentService {
    repo: Repository,
    images: ImageStore,
}

impl EquipmentService {
    pub fn new(repo: Repository, images: ImageStore) -> Self {
        Self { repo, images }
    }

    /// List the items of a category for an inventory, in insertion order
    pub async fn list_items(&self, category: Category, inventory_id: i64) -> Result<Vec<EquipmentItem>> {
        self.repo.list_items(category, inventory_id).await
    }

    pub async fn get_item(&self, category: Category, id: i64) -> Result<EquipmentItem> {
        self.repo.get_item(category, id).await
    }

    /// Create an item. Empty values are accepted for every field.
    pub async fn create_item(
        &self,
        category: Category,
        inventory_id: i64,
        values: Vec<String>,
    ) -> Result<EquipmentItem> {
        let values = category.normalize_values(values)?;
        tracing::info!("Creating {} in inventory {}", category, inventory_id);

        // Surfaces a missing inventory as InventoryNotFound instead of a
        // foreign key failure
        self.repo.get_inventory(inventory_id).await?;

        let item = self.repo.insert_item(category, inventory_id, &values).await?;

        tracing::info!("{} created successfully: {}", category, item.id);
        Ok(item)
    }

    /// Update an item in place
    pub async fn update_item(
        &self,
        category: Category,
        id: i64,
        values: Vec<String>,
    ) -> Result<EquipmentItem> {
        let values = category.normalize_values(values)?;
        tracing::debug!("Updating {} {}", category, id);

        self.repo.update_item(category, id, &values).await
    }

    /// Delete an item with its pictures and relationships.
    ///
    /// Rows are removed in one transaction; picture files are removed
    /// afterwards and failures there are only logged.
    pub async fn delete_item(&self, category: Category, id: i64) -> Result<()> {
        tracing::info!("Deleting {} {}", category, id);

        let removed = self.repo.delete_item(category, id).await?;

        self.images
            .delete_best_effort(removed.iter().map(|image| image.image_path.as_str()))
            .await;

        tracing::info!(
            "{} deleted successfully: {} ({} images)",
            category,
            id,
            removed.len()
        );
        Ok(())
    }
}
