//! Export service
//!
//! Loads the inventory snapshot, resolves picture paths and runs the
//! PDF or spreadsheet exporter on the blocking thread pool.

use crate::database::Repository;
use crate::error::{AppError, Result};
use crate::export::{build_report, render_pdf, write_workbook, ReportOptions};
use crate::services::SettingsService;
use crate::storage::ImageStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Spreadsheet,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Spreadsheet => "xlsx",
        }
    }

    fn file_prefix(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "Auditoria",
            ExportFormat::Spreadsheet => "Inventario",
        }
    }
}

/// Default file name offered by the save dialog, e.g. `Auditoria_Site A.pdf`
pub fn suggested_file_name(site_name: &str, format: ExportFormat) -> String {
    let site: String = site_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    format!("{}_{}.{}", format.file_prefix(), site, format.extension())
}

#[derive(Clone)]
pub struct ExportService {
    repo: Repository,
    images: ImageStore,
    settings: SettingsService,
}

impl ExportService {
    pub fn new(repo: Repository, images: ImageStore, settings: SettingsService) -> Self {
        Self {
            repo,
            images,
            settings,
        }
    }

    /// Where the save dialog should start for this inventory
    pub async fn suggested_path(&self, inventory_id: i64, format: ExportFormat) -> Result<PathBuf> {
        let inventory = self.repo.get_inventory(inventory_id).await?;
        let settings = self.settings.get_export().await?;

        let file_name = suggested_file_name(&inventory.site_name, format);
        Ok(match settings.default_dir {
            Some(dir) => PathBuf::from(dir).join(file_name),
            None => PathBuf::from(file_name),
        })
    }

    /// Export one inventory to `destination`
    pub async fn export(
        &self,
        inventory_id: i64,
        format: ExportFormat,
        destination: &Path,
    ) -> Result<PathBuf> {
        tracing::info!(
            "Exporting inventory {} as {:?} to {:?}",
            inventory_id,
            format,
            destination
        );

        let snapshot = self.repo.load_snapshot(inventory_id).await?;
        let destination = destination.to_path_buf();

        let task = match format {
            ExportFormat::Pdf => {
                let settings = self.settings.get_export().await?;
                let options = ReportOptions {
                    company_name: settings.company_name,
                    logo_path: settings.logo_path.map(PathBuf::from),
                    floor_plan_path: snapshot
                        .inventory
                        .floor_plan_path
                        .as_deref()
                        .map(|path| self.images.resolve(path)),
                };
                let path = destination.clone();

                tokio::task::spawn_blocking(move || -> Result<()> {
                    let report = build_report(&snapshot, &options);
                    let bytes = render_pdf(&report)?;
                    std::fs::write(&path, bytes)?;
                    Ok(())
                })
            }
            ExportFormat::Spreadsheet => {
                let path = destination.clone();
                tokio::task::spawn_blocking(move || write_workbook(&snapshot, &path))
            }
        };

        task.await
            .map_err(|e| AppError::Export(format!("Export task failed: {}", e)))?
            .map_err(into_export_error)?;

        tracing::info!("Export written to {:?}", destination);
        Ok(destination)
    }
}

fn into_export_error(e: AppError) -> AppError {
    match e {
        AppError::Export(_) => e,
        other => AppError::Export(other.to_string()),
    }
}
