//! CSV export
//!
//! Writes one header row and one row per record through the `csv` crate, so
//! names with commas or quotes are escaped properly.

use std::io::Write;

use crate::error::{CabinetError, CabinetResult};
use crate::models::CabinetRecord;

use super::rows::ExportRow;

/// Export records to CSV
pub fn export_csv<W: Write>(records: &[CabinetRecord], writer: &mut W) -> CabinetResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    if records.is_empty() {
        // serde only emits the header along with the first row
        csv_writer
            .write_record(super::EXPORT_HEADERS)
            .map_err(|e| CabinetError::Export(e.to_string()))?;
    }

    for record in records {
        csv_writer
            .serialize(ExportRow::from(record))
            .map_err(|e| CabinetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CabinetError::Export(e.to_string()))
}
