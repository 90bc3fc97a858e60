//! YAML export
//!
//! Same document as the JSON export, with a short comment header.

use std::io::Write;

use crate::error::{CabinetError, CabinetResult};
use crate::models::CabinetRecord;

use super::json::RecordsExport;

/// Export records to YAML
pub fn export_yaml<W: Write>(records: &[CabinetRecord], writer: &mut W) -> CabinetResult<()> {
    let export = RecordsExport::new(records);

    let header = format!(
        "# Cabinet statistics export\n# Generated: {}\n# Records: {}\n\n",
        export.exported_at,
        export.records.len()
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| CabinetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CabinetError::Export(e.to_string()))
}
