//! Search service
//!
//! Builds an in-memory index of every item of an inventory and filters it
//! with a case-insensitive substring match.

use crate::database::{Category, EquipmentItem, ImageAttachment, ItemRelationship, Repository};
use crate::error::Result;
use serde::Serialize;

/// One searchable item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry {
    pub category: Category,
    pub category_label: &'static str,
    pub item_id: i64,
    /// Category label and representative fields joined by " - "
    pub display: String,
}

/// Snapshot of the searchable items of one inventory
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
    /// Lower-cased `display` of each entry, same order
    haystacks: Vec<String>,
}

impl SearchIndex {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a EquipmentItem>) -> Self {
        let entries: Vec<SearchEntry> = items.into_iter().map(entry_for).collect();
        let haystacks = entries.iter().map(|e| e.display.to_lowercase()).collect();

        Self { entries, haystacks }
    }

    /// Entries whose display string contains `query`, ignoring case.
    ///
    /// A blank query returns every entry.
    pub fn filter(&self, query: &str) -> Vec<SearchEntry> {
        let needle = query.trim().to_lowercase();

        if needle.is_empty() {
            return self.entries.clone();
        }

        self.entries
            .iter()
            .zip(&self.haystacks)
            .filter(|(_, haystack)| haystack.contains(&needle))
            .map(|(entry, _)| entry.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry_for(item: &EquipmentItem) -> SearchEntry {
    let descriptor = item.category.descriptor();

    let display = std::iter::once(descriptor.label)
        .chain(
            descriptor
                .search_columns
                .iter()
                .filter_map(|column| item.value(column))
                .filter(|value| !value.trim().is_empty()),
        )
        .collect::<Vec<_>>()
        .join(" - ");

    SearchEntry {
        category: item.category,
        category_label: descriptor.label,
        item_id: item.id,
        display,
    }
}

/// Everything shown when a search result is opened
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetail {
    pub item: EquipmentItem,
    pub images: Vec<ImageAttachment>,
    pub relationships: Vec<ItemRelationship>,
}

#[derive(Clone)]
pub struct SearchService {
    repo: Repository,
}

impl SearchService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Index every item of the inventory across all categories
    pub async fn build_index(&self, inventory_id: i64) -> Result<SearchIndex> {
        let mut items = Vec::new();
        for category in Category::ALL {
            items.extend(self.repo.list_items(category, inventory_id).await?);
        }

        let index = SearchIndex::from_items(&items);
        tracing::debug!(
            "Built search index for inventory {} ({} entries)",
            inventory_id,
            index.len()
        );
        Ok(index)
    }

    pub async fn search(&self, inventory_id: i64, query: &str) -> Result<Vec<SearchEntry>> {
        Ok(self.build_index(inventory_id).await?.filter(query))
    }

    /// Load the detail view of a search result
    pub async fn open_result(&self, category: Category, item_id: i64) -> Result<ItemDetail> {
        let item = self.repo.get_item(category, item_id).await?;
        let images = self.repo.list_images(category, item_id).await?;
        let relationships = self
            .repo
            .list_relationships_for_item(category, item_id)
            .await?;

        Ok(ItemDetail {
            item,
            images,
            relationships,
        })
    }
}
