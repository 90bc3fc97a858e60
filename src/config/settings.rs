//! User settings for cabinet-stats
//!
//! Manages display preferences, the reconciliation baseline strategy and
//! export defaults. Settings are the only user state kept between sessions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::CabinetPaths;
use crate::error::CabinetError;
use crate::export::ExportFormat;
use crate::services::reconciliation::BaselineStrategy;
use crate::storage::{load_document, save_document};

/// Export preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Format used when none is given explicitly
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Directory for export files; the config dir's `exports/` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// User settings for cabinet-stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Label of the deal cutoff shown next to deal counts
    #[serde(default = "default_cutoff_label")]
    pub cutoff_label: String,

    /// How the previous snapshot of a cabinet is chosen
    #[serde(default)]
    pub baseline_strategy: BaselineStrategy,

    /// Export preferences
    #[serde(default)]
    pub export: ExportSettings,

    /// Whether record changes are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Start sessions with the two demo cabinets
    #[serde(default)]
    pub seed_demo_data: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₽".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_cutoff_label() -> String {
    "00:00 MSK".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            cutoff_label: default_cutoff_label(),
            baseline_strategy: BaselineStrategy::default(),
            export: ExportSettings::default(),
            audit_enabled: true,
            seed_demo_data: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if no file exists
    ///
    /// Defaults are not written back; the caller decides when to persist.
    pub fn load_or_create(paths: &CabinetPaths) -> Result<Self, CabinetError> {
        load_document(&paths.settings_file())
            .map(Option::unwrap_or_default)
            .map_err(|e| CabinetError::Config(format!("Failed to load settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CabinetPaths) -> Result<(), CabinetError> {
        paths.ensure_directories()?;
        save_document(&paths.settings_file(), self)
    }

    /// Directory exports are written to
    pub fn export_dir(&self, paths: &CabinetPaths) -> PathBuf {
        self.export
            .output_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir())
    }
}
