//! Attachments service
//!
//! Handles pictures attached to equipment items.
//! Integrates Repository and ImageStore.

use crate::database::{Category, ImageAttachment, Repository};
use crate::error::{AppError, Result};
use crate::storage::ImageStore;
use std::path::Path;

/// Service for managing item pictures
#[derive(Clone)]
pub struct AttachmentsService {
    repo: Repository,
    images: ImageStore,
}

impl AttachmentsService {
    pub fn new(repo: Repository, images: ImageStore) -> Self {
        Self { repo, images }
    }

    /// Copy a picture into the store and attach it to an item
    pub async fn attach_image(
        &self,
        category: Category,
        item_id: i64,
        source: &Path,
    ) -> Result<ImageAttachment> {
        tracing::info!("Attaching {:?} to {} {}", source, category, item_id);

        // Fails with ItemNotFound before any file is copied
        self.repo.get_item(category, item_id).await?;

        let stored = self.images.import(source).await?;

        let attachment = match self
            .repo
            .create_image(
                category,
                item_id,
                &stored.relative_path,
                &sanitize_filename(&stored.original_filename),
            )
            .await
        {
            Ok(attachment) => attachment,
            Err(e) => {
                self.images
                    .delete_best_effort([stored.relative_path.as_str()])
                    .await;
                return Err(e);
            }
        };

        tracing::info!("Image attached: {}", attachment.id);

        Ok(attachment)
    }

    /// List pictures attached to an item
    pub async fn list_images(&self, category: Category, item_id: i64) -> Result<Vec<ImageAttachment>> {
        self.repo.list_images(category, item_id).await
    }

    /// Read the bytes of an attached picture
    pub async fn get_image_data(&self, image_id: i64) -> Result<Vec<u8>> {
        let image = self
            .repo
            .get_image(image_id)
            .await?
            .ok_or(AppError::ImageNotFound(image_id))?;

        self.images.read(&image.image_path).await
    }

    /// Delete one picture: the row first, then the file
    pub async fn delete_image(&self, image_id: i64) -> Result<()> {
        tracing::info!("Deleting image: {}", image_id);

        let image = self.repo.delete_image(image_id).await?;
        self.images
            .delete_best_effort([image.image_path.as_str()])
            .await;

        tracing::info!("Image deleted: {}", image_id);

        Ok(())
    }
}

/// Strip path separators and control characters from a display filename
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| *c != '/' && *c != '\\' && !c.is_control())
        .take(255)
        .collect()
}
