//! Export module for cabinet-stats
//!
//! Writes the current record list to a file, one row per record, columns in
//! record field order. Nothing is filtered or aggregated.
//! - XLSX: styled single-sheet workbook (default)
//! - CSV: spreadsheet-compatible plain text
//! - JSON / YAML: machine- and human-readable documents

pub mod csv;
pub mod json;
pub mod rows;
pub mod xlsx;
pub mod yaml;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CabinetError, CabinetResult};
use crate::models::CabinetRecord;

pub use rows::{ExportRow, EXPORT_HEADERS};

/// Name of the worksheet in XLSX exports
pub const SHEET_NAME: &str = "Cabinet statistics";

/// Supported export formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Default export file name: `statistics_<YYYY-MM-DD>.<ext>`
pub fn export_filename(date: NaiveDate, format: ExportFormat) -> String {
    format!("statistics_{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Write `records` to `dir` in `format`, named after `date`
///
/// The directory is created if needed. Returns the path of the written file.
/// An existing file of the same name is overwritten.
pub fn export_records(
    records: &[CabinetRecord],
    dir: &Path,
    format: ExportFormat,
    date: NaiveDate,
) -> CabinetResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        CabinetError::Export(format!(
            "Failed to create export directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(export_filename(date, format));
    export_to_path(records, &path, format)?;
    Ok(path)
}

/// Write `records` to exactly `path` in `format`
pub fn export_to_path(
    records: &[CabinetRecord],
    path: &Path,
    format: ExportFormat,
) -> CabinetResult<()> {
    match format {
        ExportFormat::Xlsx => xlsx::export_xlsx(records, path),
        ExportFormat::Csv => write_file(path, |w| csv::export_csv(records, w)),
        ExportFormat::Json => write_file(path, |w| json::export_json(records, w)),
        ExportFormat::Yaml => write_file(path, |w| yaml::export_yaml(records, w)),
    }
}

fn write_file<F>(path: &Path, write: F) -> CabinetResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> CabinetResult<()>,
{
    let file = File::create(path).map_err(|e| {
        CabinetError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer
        .flush()
        .map_err(|e| CabinetError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::demo_records;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(date(), ExportFormat::Xlsx),
            "statistics_2026-10-16.xlsx"
        );
        assert_eq!(
            export_filename(date(), ExportFormat::Yaml),
            "statistics_2026-10-16.yaml"
        );
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(ExportFormat::default(), ExportFormat::Xlsx);
        assert_eq!(serde_json::to_string(&ExportFormat::Csv).unwrap(), "\"csv\"");
        let parsed: ExportFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(parsed, ExportFormat::Json);
    }

    #[test]
    fn test_export_every_format() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested").join("exports");
        let records = demo_records(date());

        for format in [
            ExportFormat::Xlsx,
            ExportFormat::Csv,
            ExportFormat::Json,
            ExportFormat::Yaml,
        ] {
            let path = export_records(&records, &out, format, date()).unwrap();
            assert_eq!(path, out.join(export_filename(date(), format)));
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = export_records(&demo_records(date()), &blocker, ExportFormat::Csv, date())
            .unwrap_err();
        assert!(matches!(err, CabinetError::Export(_)));
    }
}
