//! Database models
//!
//! Rust structs representing database entities.
//! All models use serde for serialization to frontend.

use super::category::Category;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;

/// One audited client site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inventory {
    pub id: i64,
    pub site_name: String,
    pub address: String,
    pub responsible: String,
    pub audit_date: NaiveDate,
    pub it_structure: String,
    pub manuals_location: String,
    pub problem_history: String,
    pub working_mode: String,
    pub extra_equipment: String,
    /// Path relative to the application data directory
    pub floor_plan_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entry of the inventory selector
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventorySummary {
    pub id: i64,
    pub site_name: String,
    pub address: String,
}

/// General information form of an inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralInfo {
    pub site_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub responsible: String,
    pub audit_date: NaiveDate,
    #[serde(default)]
    pub it_structure: String,
    #[serde(default)]
    pub manuals_location: String,
    #[serde(default)]
    pub problem_history: String,
    #[serde(default)]
    pub working_mode: String,
    #[serde(default)]
    pub extra_equipment: String,
}

impl GeneralInfo {
    /// Blank form for a new site dated `audit_date`
    pub fn new(site_name: impl Into<String>, audit_date: NaiveDate) -> Self {
        Self {
            site_name: site_name.into(),
            address: String::new(),
            responsible: String::new(),
            audit_date,
            it_structure: String::new(),
            manuals_location: String::new(),
            problem_history: String::new(),
            working_mode: String::new(),
            extra_equipment: String::new(),
        }
    }
}

/// A row of one of the category tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: i64,
    pub inventory_id: i64,
    pub category: Category,
    /// One value per descriptor column, in column order
    pub values: Vec<String>,
}

impl EquipmentItem {
    /// Value of a column by name
    pub fn value(&self, column: &str) -> Option<&str> {
        self.category
            .descriptor()
            .column_index(column)
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
    }
}

/// Picture attached to an item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ImageAttachment {
    pub id: i64,
    pub item_type: Category,
    pub item_id: i64,
    /// Path relative to the application data directory
    pub image_path: String,
    pub original_filename: String,
    pub created_at: DateTime<Utc>,
}

/// Connection between two items, e.g. a camera wired to a recorder
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItemRelationship {
    pub id: i64,
    pub parent_item_type: Category,
    pub parent_item_id: i64,
    pub child_item_type: Category,
    pub child_item_id: i64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Create relationship request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRelationshipRequest {
    pub parent_item_type: Category,
    pub parent_item_id: i64,
    pub child_item_type: Category,
    pub child_item_id: i64,
    #[serde(default)]
    pub notes: String,
}

/// Full record of one inventory, as handed to the exporters
#[derive(Debug, Clone, Serialize)]
pub struct InventorySnapshot {
    pub inventory: Inventory,
    pub items: BTreeMap<Category, Vec<EquipmentItem>>,
}

impl InventorySnapshot {
    pub fn items(&self, category: Category) -> &[EquipmentItem] {
        self.items
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
