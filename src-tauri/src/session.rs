//! Editing session
//!
//! Tracks which inventory is selected and, per category, whether the item
//! form is creating a new row or editing an existing one. Every item
//! operation goes through the session so nothing can be saved before the
//! general information of an inventory exists.

use crate::database::{Category, EquipmentItem, GeneralInfo, Inventory};
use crate::error::{AppError, Result};
use crate::services::{EquipmentService, InventoryService};
use serde::Serialize;
use std::collections::HashMap;

/// Mode of a category form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "item_id", rename_all = "snake_case")]
pub enum EditState {
    Creating,
    Editing(i64),
}

#[derive(Debug, Default)]
pub struct Session {
    current_inventory: Option<i64>,
    item_edits: HashMap<Category, EditState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_inventory(&self) -> Option<i64> {
        self.current_inventory
    }

    /// Id of the selected inventory or `NoInventorySelected`
    pub fn require_inventory(&self) -> Result<i64> {
        self.current_inventory.ok_or(AppError::NoInventorySelected)
    }

    pub fn edit_state(&self, category: Category) -> EditState {
        self.item_edits
            .get(&category)
            .copied()
            .unwrap_or(EditState::Creating)
    }

    /// Select an existing inventory. All forms go back to creating.
    pub async fn open_inventory(
        &mut self,
        inventories: &InventoryService,
        id: i64,
    ) -> Result<Inventory> {
        let inventory = inventories.get_inventory(id).await?;

        self.current_inventory = Some(inventory.id);
        self.item_edits.clear();

        tracing::info!("Opened inventory {} ({})", inventory.id, inventory.site_name);
        Ok(inventory)
    }

    /// Start a blank inventory. Nothing is stored until the general
    /// information is saved.
    pub fn new_inventory(&mut self) {
        self.current_inventory = None;
        self.item_edits.clear();
    }

    /// Create the inventory if none is selected, otherwise update it
    pub async fn save_general_info(
        &mut self,
        inventories: &InventoryService,
        info: GeneralInfo,
    ) -> Result<Inventory> {
        match self.current_inventory {
            Some(id) => inventories.update_inventory(id, info).await,
            None => {
                let inventory = inventories.create_inventory(info).await?;
                self.current_inventory = Some(inventory.id);
                Ok(inventory)
            }
        }
    }

    pub async fn delete_current_inventory(&mut self, inventories: &InventoryService) -> Result<()> {
        let id = self.require_inventory()?;

        inventories.delete_inventory(id).await?;
        self.new_inventory();
        Ok(())
    }

    /// Load an item of the selected inventory into its category form
    pub async fn edit_item(
        &mut self,
        equipment: &EquipmentService,
        category: Category,
        id: i64,
    ) -> Result<EquipmentItem> {
        let inventory_id = self.require_inventory()?;
        let item = equipment.get_item(category, id).await?;

        if item.inventory_id != inventory_id {
            return Err(AppError::ItemNotFound { category, id });
        }

        self.item_edits.insert(category, EditState::Editing(id));
        Ok(item)
    }

    /// Save a category form: insert while creating, update while editing.
    ///
    /// A successful save returns the form to creating.
    pub async fn save_item(
        &mut self,
        equipment: &EquipmentService,
        category: Category,
        values: Vec<String>,
    ) -> Result<EquipmentItem> {
        let inventory_id = self.require_inventory()?;

        let item = match self.edit_state(category) {
            EditState::Creating => equipment.create_item(category, inventory_id, values).await?,
            EditState::Editing(id) => equipment.update_item(category, id, values).await?,
        };

        self.item_edits.insert(category, EditState::Creating);
        Ok(item)
    }

    pub fn cancel_edit(&mut self, category: Category) {
        self.item_edits.insert(category, EditState::Creating);
    }

    pub async fn delete_item(
        &mut self,
        equipment: &EquipmentService,
        category: Category,
        id: i64,
    ) -> Result<()> {
        let inventory_id = self.require_inventory()?;
        let item = equipment.get_item(category, id).await?;

        if item.inventory_id != inventory_id {
            return Err(AppError::ItemNotFound { category, id });
        }

        equipment.delete_item(category, id).await?;

        if self.edit_state(category) == EditState::Editing(id) {
            self.cancel_edit(category);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, Repository};
    use crate::storage::ImageStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    struct Fixture {
        inventories: InventoryService,
        equipment: EquipmentService,
        _temp: TempDir,
    }

    async fn setup() -> Fixture {
        let pool = create_memory_pool().await.unwrap();
        let repo = Repository::new(pool);

        let temp = TempDir::new().unwrap();
        let images = ImageStore::new(temp.path().to_path_buf());
        images.initialize().await.unwrap();

        Fixture {
            inventories: InventoryService::new(repo.clone(), images.clone()),
            equipment: EquipmentService::new(repo, images),
            _temp: temp,
        }
    }

    fn info(name: &str) -> GeneralInfo {
        GeneralInfo::new(name, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn printer(code: &str) -> Vec<String> {
        vec![code.to_string(), "HP".to_string()]
    }

    #[tokio::test]
    async fn test_item_save_rejected_without_inventory() {
        let f = setup().await;
        let mut session = Session::new();

        let result = session
            .save_item(&f.equipment, Category::Printer, printer("IMP-01"))
            .await;

        assert!(matches!(result, Err(AppError::NoInventorySelected)));
        assert!(f.inventories.list_inventories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_general_info_creates_then_updates() {
        let f = setup().await;
        let mut session = Session::new();

        let created = session
            .save_general_info(&f.inventories, info("Site A"))
            .await
            .unwrap();
        assert_eq!(session.current_inventory(), Some(created.id));

        let mut changed = info("Site A");
        changed.address = "Calle Mayor 1".to_string();
        let updated = session
            .save_general_info(&f.inventories, changed)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.address, "Calle Mayor 1");
        assert_eq!(f.inventories.list_inventories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_then_save_updates_in_place() {
        let f = setup().await;
        let mut session = Session::new();
        session
            .save_general_info(&f.inventories, info("Site A"))
            .await
            .unwrap();

        let item = session
            .save_item(&f.equipment, Category::Printer, printer("IMP-01"))
            .await
            .unwrap();
        assert_eq!(session.edit_state(Category::Printer), EditState::Creating);

        session
            .edit_item(&f.equipment, Category::Printer, item.id)
            .await
            .unwrap();
        assert_eq!(
            session.edit_state(Category::Printer),
            EditState::Editing(item.id)
        );

        let saved = session
            .save_item(&f.equipment, Category::Printer, printer("IMP-02"))
            .await
            .unwrap();

        assert_eq!(saved.id, item.id);
        assert_eq!(saved.value("code"), Some("IMP-02"));
        assert_eq!(session.edit_state(Category::Printer), EditState::Creating);

        let items = f
            .equipment
            .list_items(Category::Printer, session.require_inventory().unwrap())
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_cannot_edit_item_of_other_inventory() {
        let f = setup().await;
        let mut session = Session::new();

        let other = f.inventories.create_inventory(info("Site B")).await.unwrap();
        let foreign = f
            .equipment
            .create_item(Category::Printer, other.id, printer("IMP-09"))
            .await
            .unwrap();

        session
            .save_general_info(&f.inventories, info("Site A"))
            .await
            .unwrap();

        let result = session
            .edit_item(&f.equipment, Category::Printer, foreign.id)
            .await;
        assert!(matches!(result, Err(AppError::ItemNotFound { .. })));
        assert_eq!(session.edit_state(Category::Printer), EditState::Creating);
    }

    #[tokio::test]
    async fn test_cannot_delete_item_of_other_inventory() {
        let f = setup().await;
        let mut session = Session::new();

        let other = f.inventories.create_inventory(info("Site B")).await.unwrap();
        let foreign = f
            .equipment
            .create_item(Category::Printer, other.id, printer("IMP-09"))
            .await
            .unwrap();

        session
            .save_general_info(&f.inventories, info("Site A"))
            .await
            .unwrap();

        let result = session
            .delete_item(&f.equipment, Category::Printer, foreign.id)
            .await;
        assert!(matches!(result, Err(AppError::ItemNotFound { .. })));

        let remaining = f
            .equipment
            .list_items(Category::Printer, other.id)
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, foreign.id);
    }

    #[tokio::test]
    async fn test_delete_edited_item_resets_form() {
        let f = setup().await;
        let mut session = Session::new();
        session
            .save_general_info(&f.inventories, info("Site A"))
            .await
            .unwrap();

        let item = session
            .save_item(&f.equipment, Category::Printer, printer("IMP-01"))
            .await
            .unwrap();
        session
            .edit_item(&f.equipment, Category::Printer, item.id)
            .await
            .unwrap();

        session
            .delete_item(&f.equipment, Category::Printer, item.id)
            .await
            .unwrap();

        assert_eq!(session.edit_state(Category::Printer), EditState::Creating);
    }

    #[tokio::test]
    async fn test_open_and_delete_current_inventory() {
        let f = setup().await;
        let mut session = Session::new();

        let site = f.inventories.create_inventory(info("Site A")).await.unwrap();
        session.open_inventory(&f.inventories, site.id).await.unwrap();
        assert_eq!(session.current_inventory(), Some(site.id));

        session.cancel_edit(Category::Pc);
        session
            .delete_current_inventory(&f.inventories)
            .await
            .unwrap();

        assert_eq!(session.current_inventory(), None);
        assert!(matches!(
            session.delete_current_inventory(&f.inventories).await,
            Err(AppError::NoInventorySelected)
        ));
        assert!(matches!(
            session.open_inventory(&f.inventories, site.id).await,
            Err(AppError::InventoryNotFound(_))
        ));
    }
}
