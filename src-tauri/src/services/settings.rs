//! Settings service
//!
//! Manages application settings persistence using JSON file storage.

use crate::config::SETTINGS_FILE_NAME;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// Document export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Shown on the cover when no logo is available, and in every footer
    #[serde(default = "default_company_name")]
    pub company_name: String,
    /// Logo image drawn on the cover page
    #[serde(default)]
    pub logo_path: Option<String>,
    /// Directory proposed by the save dialog
    #[serde(default)]
    pub default_dir: Option<String>,
}

fn default_company_name() -> String {
    "WIK-IN".to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            logo_path: None,
            default_dir: None,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub export: ExportSettings,
}

/// Service for managing application settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            settings_path: app_data_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Load settings from disk or create default if not exists
    pub async fn load(&self) -> Result<AppSettings> {
        if !self.settings_path.exists() {
            tracing::info!("Settings file not found, creating default settings");
            let default = AppSettings::default();
            self.save(&default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: AppSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse settings: {}", e)))?;

        Ok(settings)
    }

    /// Save settings to disk
    pub async fn save(&self, settings: &AppSettings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)?;

        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&self.settings_path, content).await?;
        tracing::info!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }

    pub async fn get_export(&self) -> Result<ExportSettings> {
        let settings = self.load().await?;
        Ok(settings.export)
    }

    pub async fn update_export(&self, export: ExportSettings) -> Result<()> {
        if export.company_name.trim().is_empty() {
            return Err(AppError::Validation(
                "El nombre de la empresa no puede estar vacío.".to_string(),
            ));
        }

        let mut settings = self.load().await?;
        settings.export = export;
        self.save(&settings).await?;
        Ok(())
    }
}
