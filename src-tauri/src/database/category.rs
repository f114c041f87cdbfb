//! Equipment categories and their compile-time descriptors
//!
//! Every category maps to one table with an `id`, an `inventory_id` and an
//! ordered list of text columns. All SQL touching category tables is built
//! from these descriptors, so table and column names never come from user
//! input.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The ten kinds of record kept per inventory
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Category {
    Pc,
    Projector,
    Printer,
    Server,
    NetworkDevice,
    CctvRecorder,
    CctvCamera,
    AccessControl,
    Software,
    Credential,
}

/// A text column of a category table
#[derive(Debug, Serialize)]
pub struct Column {
    pub name: &'static str,
    /// Header used in tables and spreadsheet sheets
    pub label: &'static str,
}

/// A column shown in the PDF report table for a category
#[derive(Debug)]
pub struct ReportColumn {
    pub header: &'static str,
    /// Index into [`CategoryDescriptor::columns`]
    pub index: usize,
}

/// Static description of one category table
#[derive(Debug)]
pub struct CategoryDescriptor {
    pub category: Category,
    pub table: &'static str,
    /// Singular display name
    pub label: &'static str,
    pub columns: &'static [Column],
    /// Columns concatenated into the search display string
    pub search_columns: &'static [&'static str],
    pub sheet_name: &'static str,
    pub report_title: &'static str,
    pub report_columns: &'static [ReportColumn],
}

const fn col(name: &'static str, label: &'static str) -> Column {
    Column { name, label }
}

const fn rcol(header: &'static str, index: usize) -> ReportColumn {
    ReportColumn { header, index }
}

static PC: CategoryDescriptor = CategoryDescriptor {
    category: Category::Pc,
    table: "pcs",
    label: "Ordenador",
    columns: &[
        col("code", "Cód."),
        col("board", "Placa"),
        col("ram", "RAM"),
        col("cpu", "Core"),
        col("disk", "Disco"),
        col("os", "S.O"),
        col("power_supply", "Fuente"),
        col("antivirus", "Antivirus"),
        col("location", "Ubic."),
        col("notes", "Obs."),
    ],
    search_columns: &["code", "os", "location"],
    sheet_name: "PCs",
    report_title: "ORDENADORES",
    report_columns: &[
        rcol("CÓDIGO", 0),
        rcol("PLACA", 1),
        rcol("RAM", 2),
        rcol("CORE", 3),
        rcol("DISCO", 4),
        rcol("S.O", 5),
        rcol("UBICACIÓN", 8),
    ],
};

static PROJECTOR: CategoryDescriptor = CategoryDescriptor {
    category: Category::Projector,
    table: "projectors",
    label: "Proyector",
    columns: &[
        col("code", "Cód."),
        col("model", "Modelo"),
        col("touch", "Táctil"),
        col("location", "Ubic."),
        col("notes", "Obs."),
    ],
    search_columns: &["code", "model", "location"],
    sheet_name: "Proyectores",
    report_title: "PROYECTORES / PANTALLAS",
    report_columns: &[rcol("CÓDIGO", 0), rcol("MODELO", 1), rcol("TÁCTIL", 2), rcol("UBICACIÓN", 3)],
};

static PRINTER: CategoryDescriptor = CategoryDescriptor {
    category: Category::Printer,
    table: "printers",
    label: "Impresora",
    columns: &[
        col("code", "Cód."),
        col("model", "Modelo"),
        col("connection", "Conexión"),
        col("location", "Ubic."),
        col("notes", "Obs."),
    ],
    search_columns: &["code", "model", "location"],
    sheet_name: "Impresoras",
    report_title: "IMPRESORAS",
    report_columns: &[rcol("CÓDIGO", 0), rcol("MODELO", 1), rcol("CONEXIÓN", 2), rcol("UBICACIÓN", 3)],
};

static SERVER: CategoryDescriptor = CategoryDescriptor {
    category: Category::Server,
    table: "servers",
    label: "Servidor",
    columns: &[
        col("code", "Cód."),
        col("model", "Modelo"),
        col("purpose", "Uso"),
        col("location", "Ubic."),
        col("notes", "Obs."),
    ],
    search_columns: &["code", "model", "purpose"],
    sheet_name: "Servidores",
    report_title: "SERVIDORES",
    report_columns: &[rcol("CÓDIGO", 0), rcol("MODELO", 1), rcol("USO", 2), rcol("UBICACIÓN", 3)],
};

static NETWORK_DEVICE: CategoryDescriptor = CategoryDescriptor {
    category: Category::NetworkDevice,
    table: "network_devices",
    label: "Equipo de red",
    columns: &[
        col("code", "Cód."),
        col("device_type", "Tipo"),
        col("model", "Modelo"),
        col("location", "Ubic."),
        col("notes", "Obs."),
    ],
    search_columns: &["code", "device_type", "model"],
    sheet_name: "Equipos de Red",
    report_title: "ROUTERS / SWITCH / WIFI",
    report_columns: &[rcol("CÓDIGO", 0), rcol("TIPO", 1), rcol("MODELO", 2), rcol("UBICACIÓN", 3)],
};

static CCTV_RECORDER: CategoryDescriptor = CategoryDescriptor {
    category: Category::CctvRecorder,
    table: "cctv_recorders",
    label: "Grabador CCTV",
    columns: &[
        col("brand", "Marca"),
        col("model", "Modelo"),
        col("channels", "Canales"),
        col("location", "Ubic."),
        col("notes", "Obs."),
    ],
    search_columns: &["brand", "model", "location"],
    sheet_name: "Grabadores CCTV",
    report_title: "GRABADORES CCTV",
    report_columns: &[rcol("MARCA", 0), rcol("MODELO", 1), rcol("CANALES", 2), rcol("UBICACIÓN", 3)],
};

static CCTV_CAMERA: CategoryDescriptor = CategoryDescriptor {
    category: Category::CctvCamera,
    table: "cctv_cameras",
    label: "Cámara CCTV",
    columns: &[
        col("brand", "Marca"),
        col("model", "Modelo"),
        col("lens_type", "Lente"),
        col("location", "Ubic."),
        col("notes", "Obs."),
    ],
    search_columns: &["brand", "model", "location"],
    sheet_name: "Camaras CCTV",
    report_title: "CÁMARAS CCTV",
    report_columns: &[rcol("MARCA", 0), rcol("MODELO", 1), rcol("LENTE", 2), rcol("UBICACIÓN", 3)],
};

static ACCESS_CONTROL: CategoryDescriptor = CategoryDescriptor {
    category: Category::AccessControl,
    table: "access_control",
    label: "Control de acceso",
    columns: &[
        col("brand", "Marca"),
        col("model", "Modelo"),
        col("device_type", "Tipo"),
        col("location", "Ubic."),
        col("notes", "Obs."),
    ],
    search_columns: &["brand", "model", "device_type"],
    sheet_name: "Control de Acceso",
    report_title: "CONTROL DE ACCESO",
    report_columns: &[rcol("MARCA", 0), rcol("MODELO", 1), rcol("TIPO", 2), rcol("UBICACIÓN", 3)],
};

static SOFTWARE: CategoryDescriptor = CategoryDescriptor {
    category: Category::Software,
    table: "software",
    label: "Software",
    columns: &[col("name", "Software"), col("license", "Licencia")],
    search_columns: &["name", "license"],
    sheet_name: "Software",
    report_title: "SOFTWARE",
    report_columns: &[rcol("SOFTWARE", 0), rcol("LICENCIA", 1)],
};

static CREDENTIAL: CategoryDescriptor = CategoryDescriptor {
    category: Category::Credential,
    table: "credentials",
    label: "Credencial",
    columns: &[
        col("element", "Elemento"),
        col("username", "Usuario"),
        col("password", "Contraseña"),
        col("notes", "Notas"),
    ],
    search_columns: &["element", "username"],
    sheet_name: "Credenciales",
    report_title: "CREDENCIALES",
    report_columns: &[
        rcol("ELEMENTO", 0),
        rcol("USUARIO", 1),
        rcol("CONTRASEÑA", 2),
        rcol("NOTAS", 3),
    ],
};

impl Category {
    /// All categories in display and export order
    pub const ALL: [Category; 10] = [
        Category::Pc,
        Category::Projector,
        Category::Printer,
        Category::Server,
        Category::NetworkDevice,
        Category::CctvRecorder,
        Category::CctvCamera,
        Category::AccessControl,
        Category::Software,
        Category::Credential,
    ];

    pub fn descriptor(self) -> &'static CategoryDescriptor {
        match self {
            Category::Pc => &PC,
            Category::Projector => &PROJECTOR,
            Category::Printer => &PRINTER,
            Category::Server => &SERVER,
            Category::NetworkDevice => &NETWORK_DEVICE,
            Category::CctvRecorder => &CCTV_RECORDER,
            Category::CctvCamera => &CCTV_CAMERA,
            Category::AccessControl => &ACCESS_CONTROL,
            Category::Software => &SOFTWARE,
            Category::Credential => &CREDENTIAL,
        }
    }

    /// Stable identifier, identical to the serde and database encodings
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Pc => "pc",
            Category::Projector => "projector",
            Category::Printer => "printer",
            Category::Server => "server",
            Category::NetworkDevice => "network_device",
            Category::CctvRecorder => "cctv_recorder",
            Category::CctvCamera => "cctv_camera",
            Category::AccessControl => "access_control",
            Category::Software => "software",
            Category::Credential => "credential",
        }
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    /// Normalize positional field values to exactly one value per column.
    ///
    /// Missing trailing values become empty strings; extra values are rejected.
    pub fn normalize_values(self, mut values: Vec<String>) -> Result<Vec<String>> {
        let expected = self.descriptor().columns.len();
        if values.len() > expected {
            return Err(AppError::Validation(format!(
                "{} expects {} fields, got {}",
                self.label(),
                expected,
                values.len()
            )));
        }
        values.resize(expected, String::new());
        Ok(values)
    }

    /// Build positional field values from a column-name map.
    pub fn values_from_map(self, fields: &HashMap<String, String>) -> Result<Vec<String>> {
        let descriptor = self.descriptor();

        if let Some(unknown) = fields
            .keys()
            .find(|key| descriptor.column_index(key).is_none())
        {
            return Err(AppError::Validation(format!(
                "Unknown field '{}' for {}",
                unknown,
                self.label()
            )));
        }

        Ok(descriptor
            .columns
            .iter()
            .map(|column| fields.get(column.name).cloned().unwrap_or_default())
            .collect())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown category: {}", s)))
    }
}

impl CategoryDescriptor {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn select_sql(&self) -> String {
        format!(
            "SELECT id, inventory_id, {} FROM {}",
            self.column_list(),
            self.table
        )
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (inventory_id, {}) VALUES (?{})",
            self.table,
            self.column_list(),
            ", ?".repeat(self.columns.len())
        )
    }

    pub fn update_sql(&self) -> String {
        let assignments = self
            .columns
            .iter()
            .map(|column| format!("{} = ?", column.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("UPDATE {} SET {} WHERE id = ?", self.table, assignments)
    }

    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE id = ?", self.table)
    }

    /// Subquery selecting the ids of this category's rows for one inventory
    pub fn ids_for_inventory_sql(&self) -> String {
        format!("SELECT id FROM {} WHERE inventory_id = ?", self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors_are_consistent() {
        for category in Category::ALL {
            let descriptor = category.descriptor();
            assert_eq!(descriptor.category, category);
            assert!(!descriptor.columns.is_empty());

            for name in descriptor.search_columns {
                assert!(
                    descriptor.column_index(name).is_some(),
                    "{} search column {} missing",
                    category,
                    name
                );
            }
            for report_column in descriptor.report_columns {
                assert!(report_column.index < descriptor.columns.len());
            }
            // Excel limits sheet names to 31 characters
            assert!(descriptor.sheet_name.chars().count() <= 31);
        }
    }

    #[test]
    fn test_category_string_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        assert!("router".parse::<Category>().is_err());
    }

    #[test]
    fn test_generated_sql() {
        let software = Category::Software.descriptor();
        assert_eq!(
            software.insert_sql(),
            "INSERT INTO software (inventory_id, name, license) VALUES (?, ?, ?)"
        );
        assert_eq!(
            software.update_sql(),
            "UPDATE software SET name = ?, license = ? WHERE id = ?"
        );
        assert_eq!(
            software.select_sql(),
            "SELECT id, inventory_id, name, license FROM software"
        );
    }

    #[test]
    fn test_normalize_values_pads_and_rejects_overflow() {
        let values = Category::Software
            .normalize_values(vec!["Office".to_string()])
            .unwrap();
        assert_eq!(values, vec!["Office".to_string(), String::new()]);

        let too_many = vec!["a".to_string(); 3];
        assert!(Category::Software.normalize_values(too_many).is_err());
    }

    #[test]
    fn test_values_from_map() {
        let mut fields = HashMap::new();
        fields.insert("code".to_string(), "PC-01".to_string());
        fields.insert("location".to_string(), "Lab 1".to_string());

        let values = Category::Pc.values_from_map(&fields).unwrap();
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], "PC-01");
        assert_eq!(values[8], "Lab 1");
        assert_eq!(values[1], "");

        fields.insert("colour".to_string(), "red".to_string());
        assert!(matches!(
            Category::Pc.values_from_map(&fields),
            Err(AppError::Validation(_))
        ));
    }
}
