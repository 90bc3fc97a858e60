//! JSON export
//!
//! Writes the record list as a versioned document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{CabinetError, CabinetResult};
use crate::models::CabinetRecord;

use super::rows::{to_rows, ExportRow};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported document: metadata plus one row per record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Records in display order
    pub records: Vec<ExportRow>,
}

impl RecordsExport {
    /// Build the document for `records`
    pub fn new(records: &[CabinetRecord]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            records: to_rows(records),
        }
    }
}

/// Export records to pretty-printed JSON
pub fn export_json<W: Write>(records: &[CabinetRecord], writer: &mut W) -> CabinetResult<()> {
    let export = RecordsExport::new(records);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| CabinetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CabinetError::Export(e.to_string()))
}
