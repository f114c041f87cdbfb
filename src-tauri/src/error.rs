//! Error types for the site inventory application
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the frontend, where their display
//! string is shown to the user as-is.

use crate::database::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "desktop")]
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Inventory not found: {0}")]
    InventoryNotFound(i64),

    #[error("{} not found: {id}", category.label())]
    ItemNotFound { category: Category, id: i64 },

    #[error("Image not found: {0}")]
    ImageNotFound(i64),

    #[error("Relationship not found: {0}")]
    RelationshipNotFound(i64),

    #[error("Debe guardar la información general del inventario antes de añadir equipos.")]
    NoInventorySelected,

    #[error("Ya existe un inventario para el cliente '{0}'.")]
    DuplicateSiteName(String),

    #[error("{0}")]
    Validation(String),

    #[error("Image store error: {0}")]
    ImageStore(String),

    #[error("{0}")]
    Generic(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
