//! Document export
//!
//! Turns an [`InventorySnapshot`](crate::database::InventorySnapshot) into
//! an audit PDF or a multi-sheet spreadsheet. Both exporters are
//! synchronous and are driven from a blocking task by the export service.

pub mod pdf;
pub mod report;
pub mod spreadsheet;

pub use pdf::render_pdf;
pub use report::{build_report, Block, Cover, Report, ReportOptions, Table};
pub use spreadsheet::write_workbook;

/// Audit date as printed in documents
pub fn format_audit_date(date: chrono::NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
