//! Database module
//!
//! This module provides all database functionality including:
//! - Schema and migrations
//! - Category descriptors
//! - Model definitions
//! - Repository layer for CRUD operations

pub mod category;
pub mod models;
pub mod repository;
pub mod schema;

pub use category::{Category, CategoryDescriptor, Column, ReportColumn};
pub use models::*;
pub use repository::Repository;
pub use schema::initialize_database;

use crate::config::{DB_BUSY_TIMEOUT_SECS, DB_MAX_CONNECTIONS};
use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;

/// Options for the inventory database file.
///
/// The path is passed as a filename rather than a URL, so spaces or `?`
/// in the data directory need no escaping.
fn file_options(db_path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(DB_BUSY_TIMEOUT_SECS))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
}

/// Open the inventory database, migrating it first.
///
/// Migrations run on their own single connection, which is closed before
/// the application pool connects.
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    tracing::info!("Opening inventory database at {:?}", db_path);

    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let migrator = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(file_options(db_path))
        .await?;
    initialize_database(&migrator).await?;
    migrator.close().await;

    let pool = SqlitePoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .connect_with(file_options(db_path))
        .await?;

    tracing::info!("Inventory database ready");
    Ok(pool)
}

/// Create an initialized in-memory database.
///
/// Each SQLite in-memory connection is its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn create_memory_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    initialize_database(&pool).await?;

    Ok(pool)
}
