//! Spreadsheet exporter
//!
//! One "Informacion General" sheet followed by one sheet per non-empty
//! category, with the stored fields in column order.

use super::format_audit_date;
use crate::config::{SHEET_COLUMN_PADDING, SHEET_GENERAL_FIELD_WIDTH, SHEET_GENERAL_VALUE_WIDTH};
use crate::database::{Category, EquipmentItem, InventorySnapshot};
use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

pub const GENERAL_SHEET_NAME: &str = "Informacion General";

/// Build the workbook and save it to `path`
pub fn write_workbook(snapshot: &InventorySnapshot, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    write_general_sheet(workbook.add_worksheet(), snapshot, &header)?;

    let mut sheets = 1;
    for category in Category::ALL {
        let items = snapshot.items(category);
        if items.is_empty() {
            continue;
        }
        write_category_sheet(workbook.add_worksheet(), category, items, &header)?;
        sheets += 1;
    }

    workbook.save(path)?;

    tracing::debug!("Wrote workbook {:?} with {} sheets", path, sheets);
    Ok(())
}

fn write_general_sheet(
    sheet: &mut Worksheet,
    snapshot: &InventorySnapshot,
    header: &Format,
) -> Result<()> {
    let inventory = &snapshot.inventory;
    let date = format_audit_date(inventory.audit_date);

    let rows = [
        ("Cliente", inventory.site_name.as_str()),
        ("Ubicación", inventory.address.as_str()),
        ("Responsable", inventory.responsible.as_str()),
        ("Fecha", date.as_str()),
        ("Estructura Informática", inventory.it_structure.as_str()),
        ("Ubicación Manuales", inventory.manuals_location.as_str()),
        ("Histórico Problemas", inventory.problem_history.as_str()),
        ("Modo de Trabajo", inventory.working_mode.as_str()),
        ("Equipos Extra", inventory.extra_equipment.as_str()),
    ];

    sheet.set_name(GENERAL_SHEET_NAME)?;
    sheet.write_string_with_format(0, 0, "Campo", header)?;
    sheet.write_string_with_format(0, 1, "Valor", header)?;

    for (row, (field, value)) in (1u32..).zip(rows) {
        sheet.write_string(row, 0, field)?;
        sheet.write_string(row, 1, value)?;
    }

    sheet.set_column_width(0, SHEET_GENERAL_FIELD_WIDTH)?;
    sheet.set_column_width(1, SHEET_GENERAL_VALUE_WIDTH)?;

    Ok(())
}

fn write_category_sheet(
    sheet: &mut Worksheet,
    category: Category,
    items: &[EquipmentItem],
    header: &Format,
) -> Result<()> {
    let descriptor = category.descriptor();
    sheet.set_name(descriptor.sheet_name)?;

    for (col, column) in (0u16..).zip(descriptor.columns) {
        sheet.write_string_with_format(0, col, column.label, header)?;

        let mut longest = column.label.chars().count();
        for (row, item) in (1u32..).zip(items) {
            let value = item.values.get(usize::from(col)).map(String::as_str).unwrap_or("");
            sheet.write_string(row, col, value)?;
            longest = longest.max(value.chars().count());
        }

        sheet.set_column_width(col, (longest + SHEET_COLUMN_PADDING) as f64)?;
    }

    Ok(())
}
