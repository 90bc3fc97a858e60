//! Batch CSV intake
//!
//! Reads cabinet entries from a CSV file with a header row. Columns are
//! matched by name (`lastName`, `firstName`, `cabinet`, `totalRevenue`,
//! `balance`, `dealsBeforeMidnight`, `dealsAfterMidnight`, optional `date`),
//! so their order does not matter.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{CabinetError, CabinetResult};
use crate::models::{CabinetDraft, CabinetEntry};

/// Read raw drafts from CSV text
///
/// Fails with `CabinetError::Import` naming the data row (1-based, header
/// excluded) when a row is missing a column or cannot be read.
pub fn read_drafts<R: Read>(reader: R) -> CabinetResult<Vec<CabinetDraft>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CabinetDraft>()
        .enumerate()
        .map(|(index, row)| {
            row.map_err(|e| CabinetError::Import(format!("row {}: {}", index + 1, e)))
        })
        .collect()
}

/// Read and validate every row of a CSV file
///
/// All rows are validated before any is returned, so a bad row aborts the
/// whole batch. The error names the row and the offending field.
pub fn read_entries(path: &Path) -> CabinetResult<Vec<CabinetEntry>> {
    let file = std::fs::File::open(path).map_err(|e| {
        CabinetError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    parse_drafts(&read_drafts(file)?)
}

/// Validate drafts in order, stopping at the first bad one
pub fn parse_drafts(drafts: &[CabinetDraft]) -> CabinetResult<Vec<CabinetEntry>> {
    drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .parse()
                .map_err(|e| CabinetError::Import(format!("row {}: {}", index + 1, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const HEADER: &str =
        "lastName,firstName,cabinet,totalRevenue,balance,dealsBeforeMidnight,dealsAfterMidnight";

    #[test]
    fn test_read_drafts() {
        let csv = format!(
            "{}\nIvanov,Petr,Cabinet A,150000,45000,12,8\nSmirnova, Anna ,Cabinet B,\"220 000,50\",68000,18,5\n",
            HEADER
        );
        let drafts = read_drafts(csv.as_bytes()).unwrap();

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].cabinet, "Cabinet A");
        assert_eq!(drafts[1].first_name, "Anna");
        assert_eq!(drafts[1].date, None);

        let entries = parse_drafts(&drafts).unwrap();
        assert_eq!(entries[1].total_revenue, Money::from_minor(22_000_050));
    }

    #[test]
    fn test_columns_by_name_with_date() {
        let csv = "date,cabinet,lastName,firstName,totalRevenue,balance,dealsAfterMidnight,dealsBeforeMidnight\n\
                   2026-10-15,Cabinet A,Ivanov,Petr,100,1,2,3\n";
        let entries = parse_drafts(&read_drafts(csv.as_bytes()).unwrap()).unwrap();

        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2026, 10, 15));
        assert_eq!(entries[0].deals_before_midnight, 3);
        assert_eq!(entries[0].deals_after_midnight, 2);
    }

    #[test]
    fn test_missing_column_names_row() {
        let csv = "lastName,firstName,cabinet\nIvanov,Petr,Cabinet A\n";
        let err = read_drafts(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CabinetError::Import(_)));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_invalid_row_aborts_batch() {
        let csv = format!(
            "{}\nIvanov,Petr,Cabinet A,150000,45000,12,8\nSmirnova,Anna,Cabinet B,lots,68000,18,5\n",
            HEADER
        );
        let drafts = read_drafts(csv.as_bytes()).unwrap();
        let err = parse_drafts(&drafts).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("row 2"));
        assert!(message.contains("totalRevenue"));
    }

    #[test]
    fn test_read_entries_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("day.csv");
        std::fs::write(&path, format!("{}\nIvanov,Petr,A,1,2,3,4\n", HEADER)).unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);

        let missing = read_entries(&temp_dir.path().join("nope.csv")).unwrap_err();
        assert!(missing.to_string().contains("Failed to open"));
    }
}
