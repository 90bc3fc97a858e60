//! Path management for cabinet-stats
//!
//! ## Path Resolution Order
//!
//! 1. `CABINET_STATS_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/cabinet-stats` on Linux, `%APPDATA%\cabinet-stats` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CabinetError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "CABINET_STATS_DIR";

/// Manages all paths used by cabinet-stats
#[derive(Debug, Clone)]
pub struct CabinetPaths {
    /// Base directory for settings, audit log and exports
    base_dir: PathBuf,
}

impl CabinetPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CabinetError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default directory for spreadsheet exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CabinetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CabinetError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, CabinetError> {
    ProjectDirs::from("", "", "cabinet-stats")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CabinetError::Config("Could not determine a home directory".into()))
}
