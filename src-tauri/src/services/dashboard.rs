//! Dashboard service
//!
//! Summary figures for the selected inventory: equipment totals per
//! category and the operating system mix of its PCs.

use crate::database::{Category, EquipmentItem, Repository};
use crate::error::Result;
use serde::Serialize;
use std::collections::HashMap;

/// Label used for PCs with no operating system recorded
pub const UNSPECIFIED_OS_LABEL: &str = "Sin especificar";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OsShare {
    pub os: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub category_counts: Vec<CategoryCount>,
    pub os_distribution: Vec<OsShare>,
    pub total_items: i64,
}

#[derive(Clone)]
pub struct DashboardService {
    repo: Repository,
}

impl DashboardService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn stats(&self, inventory_id: i64) -> Result<DashboardStats> {
        let mut category_counts = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            category_counts.push(CategoryCount {
                category,
                label: category.label(),
                count: self.repo.count_items(category, inventory_id).await?,
            });
        }

        let pcs = self.repo.list_items(Category::Pc, inventory_id).await?;

        Ok(DashboardStats {
            total_items: category_counts.iter().map(|c| c.count).sum(),
            category_counts,
            os_distribution: os_distribution(&pcs),
        })
    }
}

/// Group PCs by operating system.
///
/// Names are compared trimmed and case-insensitively; the first spelling
/// seen is the one reported. Sorted by count descending, then name.
pub fn os_distribution(pcs: &[EquipmentItem]) -> Vec<OsShare> {
    let mut shares: Vec<OsShare> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for pc in pcs {
        let os = pc.value("os").unwrap_or_default().trim();
        let os = if os.is_empty() { UNSPECIFIED_OS_LABEL } else { os };

        match positions.get(&os.to_lowercase()) {
            Some(&position) => shares[position].count += 1,
            None => {
                positions.insert(os.to_lowercase(), shares.len());
                shares.push(OsShare {
                    os: os.to_string(),
                    count: 1,
                });
            }
        }
    }

    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.os.cmp(&b.os)));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, GeneralInfo};
    use chrono::NaiveDate;

    fn pc(os: &str) -> EquipmentItem {
        let mut values = vec![String::new(); 10];
        values[5] = os.to_string();
        EquipmentItem {
            id: 0,
            inventory_id: 1,
            category: Category::Pc,
            values,
        }
    }

    #[test]
    fn test_os_distribution_groups_case_insensitively() {
        let pcs = vec![
            pc("Windows 11"),
            pc("windows 11 "),
            pc("Ubuntu 22.04"),
            pc(""),
            pc("Windows 10"),
            pc("Windows 10"),
            pc("Windows 11"),
        ];

        let shares = os_distribution(&pcs);
        assert_eq!(
            shares,
            vec![
                OsShare { os: "Windows 11".to_string(), count: 3 },
                OsShare { os: "Windows 10".to_string(), count: 2 },
                OsShare { os: UNSPECIFIED_OS_LABEL.to_string(), count: 1 },
                OsShare { os: "Ubuntu 22.04".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_os_distribution_empty() {
        assert!(os_distribution(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_stats_include_every_category() {
        let pool = create_memory_pool().await.unwrap();
        let repo = Repository::new(pool);
        let inventory = repo
            .create_inventory(&GeneralInfo::new(
                "Site A",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ))
            .await
            .unwrap();

        repo.insert_item(Category::Pc, inventory.id, &pc("Windows 11").values)
            .await
            .unwrap();
        repo.insert_item(Category::Pc, inventory.id, &pc("Windows 11").values)
            .await
            .unwrap();
        repo.insert_item(Category::Server, inventory.id, &vec![String::new(); 5])
            .await
            .unwrap();

        let stats = DashboardService::new(repo).stats(inventory.id).await.unwrap();

        assert_eq!(stats.category_counts.len(), 10);
        assert_eq!(stats.category_counts[0].count, 2);
        assert_eq!(stats.category_counts[3].category, Category::Server);
        assert_eq!(stats.category_counts[3].count, 1);
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.os_distribution.len(), 1);
        assert_eq!(stats.os_distribution[0].count, 2);
    }
}
