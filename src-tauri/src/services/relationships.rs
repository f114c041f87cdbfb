//! Relationships service
//!
//! Free-form connections between two items of the same inventory,
//! e.g. a camera wired to a recorder or a PC plugged into a switch.

use crate::database::{Category, CreateRelationshipRequest, ItemRelationship, Repository};
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct RelationshipsService {
    repo: Repository,
}

impl RelationshipsService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Connect two existing items of the same inventory
    pub async fn create_relationship(&self, req: CreateRelationshipRequest) -> Result<ItemRelationship> {
        if req.parent_item_type == req.child_item_type && req.parent_item_id == req.child_item_id {
            return Err(AppError::Validation(
                "Un elemento no puede conectarse consigo mismo.".to_string(),
            ));
        }

        let parent = self
            .repo
            .get_item(req.parent_item_type, req.parent_item_id)
            .await?;
        let child = self
            .repo
            .get_item(req.child_item_type, req.child_item_id)
            .await?;

        if parent.inventory_id != child.inventory_id {
            return Err(AppError::Validation(
                "Solo se pueden conectar elementos del mismo inventario.".to_string(),
            ));
        }

        let relationship = self.repo.create_relationship(&req).await?;

        tracing::info!(
            "Connected {} {} -> {} {}",
            req.parent_item_type,
            req.parent_item_id,
            req.child_item_type,
            req.child_item_id
        );
        Ok(relationship)
    }

    pub async fn list_for_item(&self, category: Category, item_id: i64) -> Result<Vec<ItemRelationship>> {
        self.repo.list_relationships_for_item(category, item_id).await
    }

    pub async fn list_for_inventory(&self, inventory_id: i64) -> Result<Vec<ItemRelationship>> {
        self.repo.list_relationships_for_inventory(inventory_id).await
    }

    pub async fn update_notes(&self, id: i64, notes: String) -> Result<ItemRelationship> {
        self.repo.update_relationship_notes(id, &notes).await
    }

    pub async fn delete_relationship(&self, id: i64) -> Result<()> {
        tracing::info!("Deleting relationship: {}", id);
        self.repo.delete_relationship(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, GeneralInfo};
    use chrono::NaiveDate;

    struct Fixture {
        service: RelationshipsService,
        recorder: i64,
        camera: i64,
        foreign_camera: i64,
        inventory_id: i64,
    }

    async fn setup() -> Fixture {
        let pool = create_memory_pool().await.unwrap();
        let repo = Repository::new(pool);
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let site_a = repo.create_inventory(&GeneralInfo::new("Site A", date)).await.unwrap();
        let site_b = repo.create_inventory(&GeneralInfo::new("Site B", date)).await.unwrap();

        let blank = vec![String::new(); 5];
        let recorder = repo
            .insert_item(Category::CctvRecorder, site_a.id, &blank)
            .await
            .unwrap();
        let camera = repo
            .insert_item(Category::CctvCamera, site_a.id, &blank)
            .await
            .unwrap();
        let foreign_camera = repo
            .insert_item(Category::CctvCamera, site_b.id, &blank)
            .await
            .unwrap();

        Fixture {
            service: RelationshipsService::new(repo),
            recorder: recorder.id,
            camera: camera.id,
            foreign_camera: foreign_camera.id,
            inventory_id: site_a.id,
        }
    }

    fn link(recorder: i64, camera: i64) -> CreateRelationshipRequest {
        CreateRelationshipRequest {
            parent_item_type: Category::CctvRecorder,
            parent_item_id: recorder,
            child_item_type: Category::CctvCamera,
            child_item_id: camera,
            notes: "Canal 1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let f = setup().await;

        let relationship = f
            .service
            .create_relationship(link(f.recorder, f.camera))
            .await
            .unwrap();
        assert_eq!(relationship.notes, "Canal 1");

        let for_camera = f
            .service
            .list_for_item(Category::CctvCamera, f.camera)
            .await
            .unwrap();
        assert_eq!(for_camera.len(), 1);

        let for_inventory = f.service.list_for_inventory(f.inventory_id).await.unwrap();
        assert_eq!(for_inventory.len(), 1);
        assert_eq!(for_inventory[0].id, relationship.id);
    }

    #[tokio::test]
    async fn test_rejects_cross_inventory_and_self_links() {
        let f = setup().await;

        let cross = f
            .service
            .create_relationship(link(f.recorder, f.foreign_camera))
            .await;
        assert!(matches!(cross, Err(AppError::Validation(_))));

        let selfish = f
            .service
            .create_relationship(CreateRelationshipRequest {
                parent_item_type: Category::CctvCamera,
                parent_item_id: f.camera,
                child_item_type: Category::CctvCamera,
                child_item_id: f.camera,
                notes: String::new(),
            })
            .await;
        assert!(matches!(selfish, Err(AppError::Validation(_))));

        let missing = f.service.create_relationship(link(f.recorder, 999)).await;
        assert!(matches!(missing, Err(AppError::ItemNotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let f = setup().await;

        let relationship = f
            .service
            .create_relationship(link(f.recorder, f.camera))
            .await
            .unwrap();

        let updated = f
            .service
            .update_notes(relationship.id, "Canal 4".to_string())
            .await
            .unwrap();
        assert_eq!(updated.notes, "Canal 4");

        f.service.delete_relationship(relationship.id).await.unwrap();
        assert!(matches!(
            f.service.delete_relationship(relationship.id).await,
            Err(AppError::RelationshipNotFound(id)) if id == relationship.id
        ));
        assert!(matches!(
            f.service.update_notes(relationship.id, String::new()).await,
            Err(AppError::RelationshipNotFound(_))
        ));
        assert!(f
            .service
            .list_for_inventory(f.inventory_id)
            .await
            .unwrap()
            .is_empty());
    }
}
