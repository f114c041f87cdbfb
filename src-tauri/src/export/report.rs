//! Audit report model
//!
//! The PDF is described here as a flat list of blocks, independent of page
//! geometry. [`super::pdf`] lays the blocks out on A4 pages.

use super::format_audit_date;
use crate::database::{Category, InventorySnapshot};
use std::path::PathBuf;

pub const COVER_TITLE: &str = "AUDITORÍA";
pub const FLOOR_PLAN_TITLE: &str = "PLANO DE UBICACIÓN";

const EQUIPMENT_SECTION: &str = "1. RELACIÓN DE EQUIPOS";
const STRUCTURE_SECTION: &str = "2. ESTRUCTURA INFORMÁTICA DEL CENTRO";
const MANUALS_SECTION: &str = "3. UBICACIÓN FÍSICA DE INTERÉS / MANUALES";
const PROBLEMS_SECTION: &str = "4. HISTÓRICO DE PROBLEMAS GENERALES";
const WORKING_MODE_SECTION: &str = "5. MODO DE TRABAJO DE LA ACADEMIA";
const SOFTWARE_SECTION: &str = "6. SOFTWARE Y EQUIPOS EXTRA";
const EXTRA_EQUIPMENT_HEADING: &str = "EQUIPOS EXTRA (Videovigilancia, etc.)";

/// Index page entries, in document order
pub const SECTION_INDEX: [&str; 6] = [
    EQUIPMENT_SECTION,
    "2. ESTRUCTURA INFORMÁTICA DEL CENTRO",
    "3. UBICACIÓN FÍSICA / MANUALES",
    "4. HISTÓRICO DE PROBLEMAS",
    "5. MODO DE TRABAJO",
    SOFTWARE_SECTION,
];

const EQUIPMENT_TABLES: [Category; 5] = [
    Category::Pc,
    Category::Projector,
    Category::Printer,
    Category::Server,
    Category::NetworkDevice,
];

const SECURITY_TABLES: [Category; 3] = [
    Category::CctvRecorder,
    Category::CctvCamera,
    Category::AccessControl,
];

/// Inputs that do not come from the database
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub company_name: String,
    /// Absolute path of the cover logo
    pub logo_path: Option<PathBuf>,
    /// Absolute path of the floor plan picture
    pub floor_plan_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cover {
    /// Drawn instead of the company name when it can be read
    pub logo_path: Option<PathBuf>,
    pub company_name: String,
    pub title: String,
    pub site_name: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Large section title
    Title(String),
    Heading(String),
    Paragraph(String),
    Table(Table),
    /// Picture scaled to fit; replaced by a note when it cannot be decoded
    Image(PathBuf),
    /// Vertical gap in millimetres
    Spacer(f32),
    PageBreak,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub cover: Cover,
    pub blocks: Vec<Block>,
    /// Text printed at the bottom of every page, next to the page number
    pub footer: String,
}

impl Report {
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn table(&self, title: &str) -> Option<&Table> {
        self.tables().find(|table| table.title == title)
    }
}

/// Lay out the audit document for one inventory
pub fn build_report(snapshot: &InventorySnapshot, options: &ReportOptions) -> Report {
    let inventory = &snapshot.inventory;

    let cover = Cover {
        logo_path: options.logo_path.clone(),
        company_name: options.company_name.clone(),
        title: COVER_TITLE.to_string(),
        site_name: inventory.site_name.to_uppercase(),
        date: format_audit_date(inventory.audit_date),
    };

    let mut blocks = Vec::new();

    for entry in SECTION_INDEX {
        blocks.push(Block::Heading(entry.to_string()));
        blocks.push(Block::Spacer(4.0));
    }
    blocks.push(Block::PageBreak);

    blocks.push(Block::Title(EQUIPMENT_SECTION.to_string()));
    blocks.push(Block::Spacer(8.0));
    for category in EQUIPMENT_TABLES.into_iter().chain(SECURITY_TABLES) {
        push_category_table(&mut blocks, snapshot, category);
    }
    blocks.push(Block::PageBreak);

    let text_sections = [
        (STRUCTURE_SECTION, &inventory.it_structure),
        (MANUALS_SECTION, &inventory.manuals_location),
        (PROBLEMS_SECTION, &inventory.problem_history),
        (WORKING_MODE_SECTION, &inventory.working_mode),
    ];
    for (heading, text) in text_sections {
        blocks.push(Block::Heading(heading.to_string()));
        if !text.trim().is_empty() {
            blocks.push(Block::Paragraph(text.clone()));
        }
        blocks.push(Block::Spacer(8.0));
    }
    blocks.push(Block::PageBreak);

    blocks.push(Block::Title(SOFTWARE_SECTION.to_string()));
    blocks.push(Block::Spacer(8.0));
    push_category_table(&mut blocks, snapshot, Category::Software);
    push_category_table(&mut blocks, snapshot, Category::Credential);

    if !inventory.extra_equipment.trim().is_empty() {
        blocks.push(Block::Heading(EXTRA_EQUIPMENT_HEADING.to_string()));
        blocks.push(Block::Paragraph(inventory.extra_equipment.clone()));
        blocks.push(Block::Spacer(8.0));
    }

    if let Some(path) = &options.floor_plan_path {
        blocks.push(Block::PageBreak);
        blocks.push(Block::Title(FLOOR_PLAN_TITLE.to_string()));
        blocks.push(Block::Spacer(8.0));
        blocks.push(Block::Image(path.clone()));
    }

    Report {
        cover,
        blocks,
        footer: options.company_name.clone(),
    }
}

/// Append the table of a category, skipped when it has no rows
fn push_category_table(blocks: &mut Vec<Block>, snapshot: &InventorySnapshot, category: Category) {
    let items = snapshot.items(category);
    if items.is_empty() {
        return;
    }

    let descriptor = category.descriptor();
    let headers = descriptor
        .report_columns
        .iter()
        .map(|column| column.header.to_string())
        .collect();
    let rows = items
        .iter()
        .map(|item| {
            descriptor
                .report_columns
                .iter()
                .map(|column| item.values.get(column.index).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    blocks.push(Block::Heading(descriptor.report_title.to_string()));
    blocks.push(Block::Table(Table {
        title: descriptor.report_title.to_string(),
        headers,
        rows,
    }));
    blocks.push(Block::Spacer(8.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{EquipmentItem, Inventory};
    use chrono::{NaiveDate, Utc};
    use std::collections::BTreeMap;

    fn snapshot(site_name: &str) -> InventorySnapshot {
        InventorySnapshot {
            inventory: Inventory {
                id: 1,
                site_name: site_name.to_string(),
                address: "Calle Mayor 1".to_string(),
                responsible: "Ana".to_string(),
                audit_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                it_structure: "Red plana".to_string(),
                manuals_location: String::new(),
                problem_history: String::new(),
                working_mode: String::new(),
                extra_equipment: String::new(),
                floor_plan_path: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            items: BTreeMap::new(),
        }
    }

    fn add(snapshot: &mut InventorySnapshot, category: Category, values: &[&str]) {
        let items = snapshot.items.entry(category).or_default();
        items.push(EquipmentItem {
            id: items.len() as i64 + 1,
            inventory_id: 1,
            category,
            values: category
                .normalize_values(values.iter().map(|v| v.to_string()).collect())
                .unwrap(),
        });
    }

    fn options() -> ReportOptions {
        ReportOptions {
            company_name: "WIK-IN".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pc_table_row() {
        let mut snapshot = snapshot("Site A");
        add(
            &mut snapshot,
            Category::Pc,
            &["PC-01", "", "", "", "", "", "", "", "Lab 1", ""],
        );

        let report = build_report(&snapshot, &options());
        let table = report.table("ORDENADORES").unwrap();

        assert_eq!(table.headers.len(), 7);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].first().map(String::as_str), Some("PC-01"));
        assert_eq!(table.rows[0].last().map(String::as_str), Some("Lab 1"));
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let mut snapshot = snapshot("Site A");
        add(&mut snapshot, Category::Software, &["Office", "OEM"]);

        let report = build_report(&snapshot, &options());
        let titles: Vec<&str> = report.tables().map(|t| t.title.as_str()).collect();

        assert_eq!(titles, vec!["SOFTWARE"]);
    }

    #[test]
    fn test_cover_and_sections() {
        let snapshot = snapshot("Colegio Norte");
        let report = build_report(&snapshot, &options());

        assert_eq!(report.cover.site_name, "COLEGIO NORTE");
        assert_eq!(report.cover.date, "05/03/2024");
        assert_eq!(report.cover.title, COVER_TITLE);
        assert_eq!(report.footer, "WIK-IN");

        assert!(report
            .blocks
            .contains(&Block::Paragraph("Red plana".to_string())));
        assert!(report
            .blocks
            .contains(&Block::Title(SOFTWARE_SECTION.to_string())));

        // Index entries are shorter than some body headings
        assert!(report
            .blocks
            .contains(&Block::Heading("5. MODO DE TRABAJO".to_string())));
        assert!(report.blocks.contains(&Block::Heading(
            "5. MODO DE TRABAJO DE LA ACADEMIA".to_string()
        )));
        assert!(!report
            .blocks
            .iter()
            .any(|block| matches!(block, Block::Image(_))));
    }

    #[test]
    fn test_table_order_follows_document_layout() {
        let mut snapshot = snapshot("Site A");
        add(&mut snapshot, Category::Credential, &["Router", "admin", "1234"]);
        add(&mut snapshot, Category::CctvCamera, &["Hikvision"]);
        add(&mut snapshot, Category::Printer, &["IMP-01"]);

        let report = build_report(&snapshot, &options());
        let titles: Vec<&str> = report.tables().map(|t| t.title.as_str()).collect();

        assert_eq!(titles, vec!["IMPRESORAS", "CÁMARAS CCTV", "CREDENCIALES"]);
    }

    #[test]
    fn test_floor_plan_is_last() {
        let snapshot = snapshot("Site A");
        let options = ReportOptions {
            floor_plan_path: Some(PathBuf::from("/tmp/plano.png")),
            ..options()
        };

        let report = build_report(&snapshot, &options);

        assert_eq!(
            report.blocks.last(),
            Some(&Block::Image(PathBuf::from("/tmp/plano.png")))
        );
        assert!(report
            .blocks
            .contains(&Block::Title(FLOOR_PLAN_TITLE.to_string())));
    }
}
