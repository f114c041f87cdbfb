//! Repository layer for database operations
//!
//! This module provides CRUD operations for all entities.
//! Failures propagate as [`AppError`]; "not found" is reported through
//! dedicated variants so callers can tell it apart from a failed query.
//! Multi-statement deletes run inside a single transaction.

use super::category::Category;
use super::models::*;
use crate::error::{AppError, Result};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::BTreeMap;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ===== Inventories =====

    /// Create a new inventory
    pub async fn create_inventory(&self, info: &GeneralInfo) -> Result<Inventory> {
        let now = Utc::now();

        let inventory = sqlx::query_as::<_, Inventory>(
            r#"
            INSERT INTO inventories (
                site_name, address, responsible, audit_date, it_structure,
                manuals_location, problem_history, working_mode, extra_equipment,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&info.site_name)
        .bind(&info.address)
        .bind(&info.responsible)
        .bind(info.audit_date)
        .bind(&info.it_structure)
        .bind(&info.manuals_location)
        .bind(&info.problem_history)
        .bind(&info.working_mode)
        .bind(&info.extra_equipment)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_site_name_conflict(e, &info.site_name))?;

        tracing::debug!("Created inventory: {}", inventory.id);
        Ok(inventory)
    }

    /// Overwrite the general information of an inventory
    pub async fn update_inventory(&self, id: i64, info: &GeneralInfo) -> Result<Inventory> {
        let inventory = sqlx::query_as::<_, Inventory>(
            r#"
            UPDATE inventories SET
                site_name = ?, address = ?, responsible = ?, audit_date = ?,
                it_structure = ?, manuals_location = ?, problem_history = ?,
                working_mode = ?, extra_equipment = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&info.site_name)
        .bind(&info.address)
        .bind(&info.responsible)
        .bind(info.audit_date)
        .bind(&info.it_structure)
        .bind(&info.manuals_location)
        .bind(&info.problem_history)
        .bind(&info.working_mode)
        .bind(&info.extra_equipment)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_site_name_conflict(e, &info.site_name))?
        .ok_or(AppError::InventoryNotFound(id))?;

        tracing::debug!("Updated inventory: {}", id);
        Ok(inventory)
    }

    /// Get an inventory by ID
    pub async fn get_inventory(&self, id: i64) -> Result<Inventory> {
        sqlx::query_as::<_, Inventory>("SELECT * FROM inventories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::InventoryNotFound(id))
    }

    /// List all inventories ordered by site name
    pub async fn list_inventories(&self) -> Result<Vec<InventorySummary>> {
        let inventories = sqlx::query_as::<_, InventorySummary>(
            "SELECT id, site_name, address FROM inventories ORDER BY site_name COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(inventories)
    }

    /// Set or clear the floor plan path, returning the previous one
    pub async fn set_floor_plan(&self, id: i64, path: Option<&str>) -> Result<Option<String>> {
        let mut tx = self.pool.begin().await?;

        let previous: Option<Option<String>> =
            sqlx::query_scalar("SELECT floor_plan_path FROM inventories WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let previous = previous.ok_or(AppError::InventoryNotFound(id))?;

        sqlx::query("UPDATE inventories SET floor_plan_path = ?, updated_at = ? WHERE id = ?")
            .bind(path)
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!("Set floor plan of inventory {}: {:?}", id, path);
        Ok(previous)
    }

    /// Delete an inventory together with its images and relationships.
    ///
    /// Equipment rows go through `ON DELETE CASCADE`; image and relationship
    /// rows are removed explicitly in the same transaction. Returns the
    /// removed image rows so their files can be cleaned up.
    pub async fn delete_inventory(&self, id: i64) -> Result<Vec<ImageAttachment>> {
        let mut tx = self.pool.begin().await?;
        let mut removed = Vec::new();

        for category in Category::ALL {
            let ids = category.descriptor().ids_for_inventory_sql();

            let mut images = sqlx::query_as::<_, ImageAttachment>(&format!(
                "SELECT * FROM images WHERE item_type = ? AND item_id IN ({}) ORDER BY id",
                ids
            ))
            .bind(category)
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;

            sqlx::query(&format!(
                "DELETE FROM images WHERE item_type = ? AND item_id IN ({})",
                ids
            ))
            .bind(category)
            .bind(id)
            .execute(&mut *tx)
            .await?;

            sqlx::query(&format!(
                r#"
                DELETE FROM item_relationships
                WHERE (parent_item_type = ? AND parent_item_id IN ({ids}))
                   OR (child_item_type = ? AND child_item_id IN ({ids}))
                "#
            ))
            .bind(category)
            .bind(id)
            .bind(category)
            .bind(id)
            .execute(&mut *tx)
            .await?;

            removed.append(&mut images);
        }

        let rows = sqlx::query("DELETE FROM inventories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::InventoryNotFound(id));
        }

        tx.commit().await?;

        tracing::debug!(
            "Deleted inventory {} ({} image rows removed)",
            id,
            removed.len()
        );
        Ok(removed)
    }

    // ===== Equipment items =====

    /// Insert an item; `values` must hold one entry per descriptor column
    pub async fn insert_item(
        &self,
        category: Category,
        inventory_id: i64,
        values: &[String],
    ) -> Result<EquipmentItem> {
        let descriptor = category.descriptor();
        let sql = descriptor.insert_sql();

        let mut query = sqlx::query(&sql).bind(inventory_id);
        for value in values {
            query = query.bind(value);
        }

        let id = query.execute(&self.pool).await?.last_insert_rowid();

        tracing::debug!("Created {} {} in inventory {}", category, id, inventory_id);

        Ok(EquipmentItem {
            id,
            inventory_id,
            category,
            values: values.to_vec(),
        })
    }

    /// Update an item in place
    pub async fn update_item(
        &self,
        category: Category,
        id: i64,
        values: &[String],
    ) -> Result<EquipmentItem> {
        let sql = category.descriptor().update_sql();

        let mut query = sqlx::query(&sql);
        for value in values {
            query = query.bind(value);
        }

        let rows = query.bind(id).execute(&self.pool).await?.rows_affected();

        if rows == 0 {
            return Err(AppError::ItemNotFound { category, id });
        }

        tracing::debug!("Updated {} {}", category, id);
        self.get_item(category, id).await
    }

    /// Get an item by ID
    pub async fn get_item(&self, category: Category, id: i64) -> Result<EquipmentItem> {
        let sql = format!("{} WHERE id = ?", category.descriptor().select_sql());

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::ItemNotFound { category, id })?;

        item_from_row(category, &row)
    }

    /// List the items of one category for an inventory, in insertion order
    pub async fn list_items(&self, category: Category, inventory_id: i64) -> Result<Vec<EquipmentItem>> {
        let sql = format!(
            "{} WHERE inventory_id = ? ORDER BY id",
            category.descriptor().select_sql()
        );

        let rows = sqlx::query(&sql)
            .bind(inventory_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(|row| item_from_row(category, row)).collect()
    }

    /// Count the items of one category for an inventory
    pub async fn count_items(&self, category: Category, inventory_id: i64) -> Result<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE inventory_id = ?",
            category.descriptor().table
        );

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(inventory_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Delete an item with its image and relationship rows.
    ///
    /// Returns the removed image rows so their files can be cleaned up.
    pub async fn delete_item(&self, category: Category, id: i64) -> Result<Vec<ImageAttachment>> {
        let mut tx = self.pool.begin().await?;

        let images = sqlx::query_as::<_, ImageAttachment>(
            "SELECT * FROM images WHERE item_type = ? AND item_id = ? ORDER BY id",
        )
        .bind(category)
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM images WHERE item_type = ? AND item_id = ?")
            .bind(category)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            DELETE FROM item_relationships
            WHERE (parent_item_type = ? AND parent_item_id = ?)
               OR (child_item_type = ? AND child_item_id = ?)
            "#,
        )
        .bind(category)
        .bind(id)
        .bind(category)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let rows = sqlx::query(&category.descriptor().delete_sql())
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if rows == 0 {
            // Dropping the transaction rolls it back
            return Err(AppError::ItemNotFound { category, id });
        }

        tx.commit().await?;

        tracing::debug!("Deleted {} {} ({} image rows)", category, id, images.len());
        Ok(images)
    }

    /// Load an inventory with every category row-set
    pub async fn load_snapshot(&self, inventory_id: i64) -> Result<InventorySnapshot> {
        let inventory = self.get_inventory(inventory_id).await?;

        let mut items = BTreeMap::new();
        for category in Category::ALL {
            items.insert(category, self.list_items(category, inventory_id).await?);
        }

        Ok(InventorySnapshot { inventory, items })
    }

    // ===== Images =====

    /// Record an image attached to an item
    pub async fn create_image(
        &self,
        category: Category,
        item_id: i64,
        image_path: &str,
        original_filename: &str,
    ) -> Result<ImageAttachment> {
        let image = sqlx::query_as::<_, ImageAttachment>(
            r#"
            INSERT INTO images (item_type, item_id, image_path, original_filename, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(category)
        .bind(item_id)
        .bind(image_path)
        .bind(original_filename)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created image {} for {} {}", image.id, category, item_id);
        Ok(image)
    }

    /// List images attached to an item
    pub async fn list_images(&self, category: Category, item_id: i64) -> Result<Vec<ImageAttachment>> {
        let images = sqlx::query_as::<_, ImageAttachment>(
            "SELECT * FROM images WHERE item_type = ? AND item_id = ? ORDER BY id",
        )
        .bind(category)
        .bind(item_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    pub async fn get_image(&self, id: i64) -> Result<Option<ImageAttachment>> {
        let image = sqlx::query_as::<_, ImageAttachment>("SELECT * FROM images WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(image)
    }

    /// Delete an image row, returning it
    pub async fn delete_image(&self, id: i64) -> Result<ImageAttachment> {
        let image = sqlx::query_as::<_, ImageAttachment>("DELETE FROM images WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::ImageNotFound(id))?;

        tracing::debug!("Deleted image: {}", id);
        Ok(image)
    }

    // ===== Relationships =====

    pub async fn create_relationship(&self, req: &CreateRelationshipRequest) -> Result<ItemRelationship> {
        let relationship = sqlx::query_as::<_, ItemRelationship>(
            r#"
            INSERT INTO item_relationships (
                parent_item_type, parent_item_id, child_item_type, child_item_id, notes, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(req.parent_item_type)
        .bind(req.parent_item_id)
        .bind(req.child_item_type)
        .bind(req.child_item_id)
        .bind(&req.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created relationship: {}", relationship.id);
        Ok(relationship)
    }

    /// Relationships where the item is either parent or child
    pub async fn list_relationships_for_item(
        &self,
        category: Category,
        item_id: i64,
    ) -> Result<Vec<ItemRelationship>> {
        let relationships = sqlx::query_as::<_, ItemRelationship>(
            r#"
            SELECT * FROM item_relationships
            WHERE (parent_item_type = ? AND parent_item_id = ?)
               OR (child_item_type = ? AND child_item_id = ?)
            ORDER BY id
            "#,
        )
        .bind(category)
        .bind(item_id)
        .bind(category)
        .bind(item_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(relationships)
    }

    /// Relationships whose parent item belongs to the inventory
    pub async fn list_relationships_for_inventory(
        &self,
        inventory_id: i64,
    ) -> Result<Vec<ItemRelationship>> {
        let mut relationships = Vec::new();

        for category in Category::ALL {
            let sql = format!(
                r#"
                SELECT * FROM item_relationships
                WHERE parent_item_type = ? AND parent_item_id IN ({})
                "#,
                category.descriptor().ids_for_inventory_sql()
            );

            let mut found = sqlx::query_as::<_, ItemRelationship>(&sql)
                .bind(category)
                .bind(inventory_id)
                .fetch_all(&self.pool)
                .await?;

            relationships.append(&mut found);
        }

        relationships.sort_by_key(|r| r.id);
        Ok(relationships)
    }

    pub async fn update_relationship_notes(&self, id: i64, notes: &str) -> Result<ItemRelationship> {
        sqlx::query_as::<_, ItemRelationship>(
            "UPDATE item_relationships SET notes = ? WHERE id = ? RETURNING *",
        )
        .bind(notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::RelationshipNotFound(id))
    }

    pub async fn delete_relationship(&self, id: i64) -> Result<()> {
        let rows = sqlx::query("DELETE FROM item_relationships WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::RelationshipNotFound(id));
        }

        tracing::debug!("Deleted relationship: {}", id);
        Ok(())
    }
}

fn item_from_row(category: Category, row: &SqliteRow) -> Result<EquipmentItem> {
    let values = category
        .descriptor()
        .columns
        .iter()
        .map(|column| {
            row.try_get::<Option<String>, _>(column.name)
                .map(Option::unwrap_or_default)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(EquipmentItem {
        id: row.try_get("id")?,
        inventory_id: row.try_get("inventory_id")?,
        category,
        values,
    })
}

fn map_site_name_conflict(err: sqlx::Error, site_name: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateSiteName(site_name.to_string())
        }
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_memory_pool;
    use chrono::NaiveDate;

    async fn create_test_repo() -> Repository {
        let pool = create_memory_pool().await.unwrap();
        Repository::new(pool)
    }

    fn site(name: &str) -> GeneralInfo {
        GeneralInfo::new(name, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn values(category: Category, prefix: &str) -> Vec<String> {
        category
            .descriptor()
            .columns
            .iter()
            .map(|c| format!("{}-{}", prefix, c.name))
            .collect()
    }

    #[tokio::test]
    async fn test_create_and_get_inventory() {
        let repo = create_test_repo().await;

        let mut info = site("Site A");
        info.address = "Calle Mayor 1".to_string();
        let inventory = repo.create_inventory(&info).await.unwrap();

        let fetched = repo.get_inventory(inventory.id).await.unwrap();
        assert_eq!(fetched.site_name, "Site A");
        assert_eq!(fetched.address, "Calle Mayor 1");
        assert_eq!(fetched.audit_date, info.audit_date);
        assert!(fetched.floor_plan_path.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_site_name() {
        let repo = create_test_repo().await;

        repo.create_inventory(&site("Site A")).await.unwrap();
        let result = repo.create_inventory(&site("Site A")).await;

        assert!(matches!(result, Err(AppError::DuplicateSiteName(name)) if name == "Site A"));
    }

    #[tokio::test]
    async fn test_missing_inventory_is_not_found() {
        let repo = create_test_repo().await;

        assert!(matches!(
            repo.get_inventory(42).await,
            Err(AppError::InventoryNotFound(42))
        ));
        assert!(matches!(
            repo.update_inventory(42, &site("X")).await,
            Err(AppError::InventoryNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_list_inventories_sorted_by_name() {
        let repo = create_test_repo().await;

        repo.create_inventory(&site("beta")).await.unwrap();
        repo.create_inventory(&site("Alpha")).await.unwrap();

        let names: Vec<String> = repo
            .list_inventories()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.site_name)
            .collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_item_crud_for_every_category() {
        let repo = create_test_repo().await;
        let inventory = repo.create_inventory(&site("Site A")).await.unwrap();
        let other = repo.create_inventory(&site("Site B")).await.unwrap();

        for category in Category::ALL {
            let submitted = values(category, "v1");
            let created = repo
                .insert_item(category, inventory.id, &submitted)
                .await
                .unwrap();

            let listed = repo.list_items(category, inventory.id).await.unwrap();
            assert_eq!(listed.len(), 1, "{}", category);
            assert_eq!(listed[0].values, submitted);
            assert_eq!(listed[0].inventory_id, inventory.id);
            assert!(repo.list_items(category, other.id).await.unwrap().is_empty());

            let updated = repo
                .update_item(category, created.id, &values(category, "v2"))
                .await
                .unwrap();
            assert_eq!(updated.values, values(category, "v2"));
            assert_eq!(repo.count_items(category, inventory.id).await.unwrap(), 1);
        }
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let repo = create_test_repo().await;

        let result = repo
            .update_item(Category::Software, 99, &values(Category::Software, "x"))
            .await;
        assert!(matches!(
            result,
            Err(AppError::ItemNotFound {
                category: Category::Software,
                id: 99
            })
        ));
    }

    #[tokio::test]
    async fn test_delete_item_leaves_siblings() {
        let repo = create_test_repo().await;
        let inventory = repo.create_inventory(&site("Site A")).await.unwrap();

        let first = repo
            .insert_item(Category::Printer, inventory.id, &values(Category::Printer, "a"))
            .await
            .unwrap();
        let second = repo
            .insert_item(Category::Printer, inventory.id, &values(Category::Printer, "b"))
            .await
            .unwrap();

        repo.create_image(Category::Printer, first.id, "images/a.png", "a.png")
            .await
            .unwrap();
        repo.create_image(Category::Printer, second.id, "images/b.png", "b.png")
            .await
            .unwrap();

        let switch = repo
            .insert_item(
                Category::NetworkDevice,
                inventory.id,
                &values(Category::NetworkDevice, "s"),
            )
            .await
            .unwrap();
        for (printer, port) in [(first.id, "Puerto 1"), (second.id, "Puerto 2")] {
            repo.create_relationship(&CreateRelationshipRequest {
                parent_item_type: Category::NetworkDevice,
                parent_item_id: switch.id,
                child_item_type: Category::Printer,
                child_item_id: printer,
                notes: port.to_string(),
            })
            .await
            .unwrap();
        }

        let removed = repo.delete_item(Category::Printer, first.id).await.unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].image_path, "images/a.png");

        let remaining = repo.list_items(Category::Printer, inventory.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
        assert_eq!(repo.list_images(Category::Printer, second.id).await.unwrap().len(), 1);

        assert!(repo
            .list_relationships_for_item(Category::Printer, first.id)
            .await
            .unwrap()
            .is_empty());
        let kept = repo
            .list_relationships_for_item(Category::Printer, second.id)
            .await
            .unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].notes, "Puerto 2");
        assert_eq!(
            repo.list_relationships_for_item(Category::NetworkDevice, switch.id)
                .await
                .unwrap()
                .len(),
            1
        );

        assert!(matches!(
            repo.delete_item(Category::Printer, first.id).await,
            Err(AppError::ItemNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_inventory_cascades() {
        let repo = create_test_repo().await;
        let doomed = repo.create_inventory(&site("Site A")).await.unwrap();
        let kept = repo.create_inventory(&site("Site B")).await.unwrap();

        for category in Category::ALL {
            repo.insert_item(category, doomed.id, &values(category, "d"))
                .await
                .unwrap();
            repo.insert_item(category, kept.id, &values(category, "k"))
                .await
                .unwrap();
        }

        let pc = repo.list_items(Category::Pc, doomed.id).await.unwrap()[0].clone();
        let camera = repo.list_items(Category::CctvCamera, doomed.id).await.unwrap()[0].clone();
        repo.create_image(Category::Pc, pc.id, "images/pc.png", "pc.png")
            .await
            .unwrap();
        repo.create_relationship(&CreateRelationshipRequest {
            parent_item_type: Category::Pc,
            parent_item_id: pc.id,
            child_item_type: Category::CctvCamera,
            child_item_id: camera.id,
            notes: String::new(),
        })
        .await
        .unwrap();

        let removed = repo.delete_inventory(doomed.id).await.unwrap();
        assert_eq!(removed.len(), 1);

        for category in Category::ALL {
            assert_eq!(repo.count_items(category, doomed.id).await.unwrap(), 0);
            assert_eq!(repo.count_items(category, kept.id).await.unwrap(), 1);
        }
        assert!(repo.list_images(Category::Pc, pc.id).await.unwrap().is_empty());
        assert!(repo
            .list_relationships_for_item(Category::Pc, pc.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_load_snapshot() {
        let repo = create_test_repo().await;
        let inventory = repo.create_inventory(&site("Site A")).await.unwrap();

        repo.insert_item(Category::Software, inventory.id, &values(Category::Software, "s"))
            .await
            .unwrap();

        let snapshot = repo.load_snapshot(inventory.id).await.unwrap();
        assert_eq!(snapshot.inventory.id, inventory.id);
        assert_eq!(snapshot.items.len(), Category::ALL.len());
        assert_eq!(snapshot.items(Category::Software).len(), 1);
        assert!(snapshot.items(Category::Pc).is_empty());
    }

    #[tokio::test]
    async fn test_set_floor_plan_returns_previous() {
        let repo = create_test_repo().await;
        let inventory = repo.create_inventory(&site("Site A")).await.unwrap();

        let previous = repo
            .set_floor_plan(inventory.id, Some("images/plan1.png"))
            .await
            .unwrap();
        assert!(previous.is_none());

        let previous = repo
            .set_floor_plan(inventory.id, Some("images/plan2.png"))
            .await
            .unwrap();
        assert_eq!(previous.as_deref(), Some("images/plan1.png"));

        let inventory = repo.get_inventory(inventory.id).await.unwrap();
        assert_eq!(inventory.floor_plan_path.as_deref(), Some("images/plan2.png"));
    }
}
