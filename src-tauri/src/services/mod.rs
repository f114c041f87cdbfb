//! Services module
//!
//! Business logic services that coordinate between commands and repository.

pub mod attachments;
pub mod dashboard;
pub mod equipment;
pub mod export;
pub mod inventories;
pub mod relationships;
pub mod search;
pub mod settings;

pub use attachments::AttachmentsService;
pub use dashboard::{DashboardService, DashboardStats};
pub use equipment::EquipmentService;
pub use export::{ExportFormat, ExportService};
pub use inventories::InventoryService;
pub use relationships::RelationshipsService;
pub use search::{ItemDetail, SearchEntry, SearchService};
pub use settings::{AppSettings, ExportSettings, SettingsService};
