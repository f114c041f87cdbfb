//! Application configuration constants
//!
//! Central location for file names, accepted inputs and document geometry
//! used throughout the application. User-editable settings live in
//! [`crate::services::settings`].

// ===== Data Directory Layout =====

/// SQLite database file inside the application data directory
pub const DATABASE_FILE_NAME: &str = "inventory.db";

/// Directory for attached pictures and floor plans
pub const IMAGES_DIR_NAME: &str = "images";

/// JSON settings file inside the application data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Picture formats accepted for attachments and floor plans
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

// ===== Database =====

/// Connections in the application pool. The desktop app has a single user,
/// so a handful covers concurrent commands.
pub const DB_MAX_CONNECTIONS: u32 = 4;

/// How long a connection waits on a locked database before failing
pub const DB_BUSY_TIMEOUT_SECS: u64 = 5;

// ===== General Info Limits =====

/// Maximum length of a site name in characters
pub const MAX_SITE_NAME_LENGTH: usize = 200;

// ===== PDF Report Geometry (millimetres, A4 portrait) =====

pub const PDF_PAGE_WIDTH_MM: f32 = 210.0;
pub const PDF_PAGE_HEIGHT_MM: f32 = 297.0;
pub const PDF_MARGIN_MM: f32 = 25.0;
/// Space reserved at the bottom of every page for the footer
pub const PDF_FOOTER_HEIGHT_MM: f32 = 15.0;

/// Largest box the floor plan is scaled into
pub const PDF_FLOOR_PLAN_MAX_WIDTH_MM: f32 = 150.0;
pub const PDF_FLOOR_PLAN_MAX_HEIGHT_MM: f32 = 200.0;

// ===== Spreadsheet =====

/// Fixed widths of the general information sheet (field, value)
pub const SHEET_GENERAL_FIELD_WIDTH: f64 = 30.0;
pub const SHEET_GENERAL_VALUE_WIDTH: f64 = 80.0;

/// Padding added to the longest cell when sizing category columns
pub const SHEET_COLUMN_PADDING: usize = 2;
