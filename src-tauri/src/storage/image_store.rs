//! Image storage
//!
//! Pictures are copied into `<root>/images/` under generated UUID file
//! names that keep the (lower-cased) source extension. The database only
//! stores paths relative to `root`, e.g. `images/3f2c...9a.png`.

use crate::config::{IMAGES_DIR_NAME, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::{AppError, Result};
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Result of importing a picture into the store
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Path relative to the store root, always with `/` separators
    pub relative_path: String,
    pub original_filename: String,
}

/// Image store rooted at the application data directory
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the images directory if needed
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.images_dir()).await?;
        tracing::info!("Image store initialized at: {:?}", self.images_dir());
        Ok(())
    }

    /// Copy a picture from anywhere on disk into the store
    pub async fn import(&self, source: &Path) -> Result<StoredImage> {
        let extension = image_extension(source)?;

        let original_filename = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let data = fs::read(source).await?;
        let relative_path = self.write(&data, &extension).await?;

        tracing::debug!("Imported image {:?} as {}", source, relative_path);

        Ok(StoredImage {
            relative_path,
            original_filename,
        })
    }

    /// Write picture bytes under a fresh name, returning the relative path
    pub async fn write(&self, data: &[u8], extension: &str) -> Result<String> {
        let filename = format!("{}.{}", Uuid::new_v4(), extension.to_ascii_lowercase());
        let relative_path = format!("{}/{}", IMAGES_DIR_NAME, filename);
        let path = self.images_dir().join(&filename);

        fs::create_dir_all(self.images_dir()).await?;

        // Write to temp file first, then rename into place
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;

        fs::rename(temp_path, &path).await?;

        tracing::debug!("Wrote image: {} ({} bytes)", relative_path, data.len());

        Ok(relative_path)
    }

    /// Read a stored picture
    pub async fn read(&self, stored_path: &str) -> Result<Vec<u8>> {
        let path = self.resolve(stored_path);

        if !path.exists() {
            return Err(AppError::ImageStore(format!("Image not found: {}", stored_path)));
        }

        Ok(fs::read(&path).await?)
    }

    pub fn exists(&self, stored_path: &str) -> bool {
        self.resolve(stored_path).exists()
    }

    /// Delete a stored picture. Missing files are not an error.
    ///
    /// Only paths inside the images directory are accepted.
    pub async fn delete(&self, stored_path: &str) -> Result<()> {
        let path = self.managed_path(stored_path)?;

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).await?;

        tracing::debug!("Deleted image: {}", stored_path);

        Ok(())
    }

    /// Delete several pictures, logging failures instead of returning them
    pub async fn delete_best_effort<'a, I>(&self, stored_paths: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for stored_path in stored_paths {
            if let Err(e) = self.delete(stored_path).await {
                tracing::warn!("Failed to delete image file {}: {}", stored_path, e);
            }
        }
    }

    /// Absolute location of a stored path.
    ///
    /// Absolute paths (older records pointing outside the store) are
    /// returned unchanged.
    pub fn resolve(&self, stored_path: &str) -> PathBuf {
        let path = Path::new(stored_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn managed_path(&self, stored_path: &str) -> Result<PathBuf> {
        let path = Path::new(stored_path);
        let mut components = path.components();

        let in_images_dir = matches!(
            components.next(),
            Some(Component::Normal(dir)) if dir == IMAGES_DIR_NAME
        );
        let plain = components.clone().count() == 1
            && components.all(|c| matches!(c, Component::Normal(_)));

        if !in_images_dir || !plain {
            return Err(AppError::ImageStore(format!(
                "Refusing to touch path outside the image store: {}",
                stored_path
            )));
        }

        Ok(self.root.join(path))
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Lower-cased extension of a supported picture file
fn image_extension(source: &Path) -> Result<String> {
    let extension = source
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    if !SUPPORTED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::Validation(format!(
            "Unsupported image type: {:?} (expected one of {})",
            source.file_name().unwrap_or_default(),
            SUPPORTED_IMAGE_EXTENSIONS.join(", ")
        )));
    }

    Ok(extension)
}
