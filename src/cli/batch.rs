//! CLI command handler for batch entry
//!
//! Feeds a CSV file of entries through the reconciler in file order, prints
//! the resulting table and summary, and optionally exports it.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{CabinetPaths, Settings};
use crate::display::{format_record_table, format_summary};
use crate::error::CabinetResult;
use crate::export::{export_records, ExportFormat};
use crate::reports::summary_cards;
use crate::services::import::read_entries;
use crate::services::{summarize, BaselineStrategy, CabinetService};
use crate::storage::{demo_store, RecordStore};

/// Arguments of `cabinet batch`
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file with one entry per row
    pub file: PathBuf,

    /// Export the resulting records in this format
    #[arg(short, long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Directory for the export file (default: settings, then config dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Baseline strategy for daily revenue (default: from settings)
    #[arg(long, value_enum)]
    pub strategy: Option<BaselineStrategy>,

    /// Start from the demo cabinets instead of an empty list
    #[arg(long)]
    pub seed: bool,

    /// Date for undated rows and the export file name (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Handle the batch command
pub fn handle_batch_command(
    paths: &CabinetPaths,
    settings: &Settings,
    args: BatchArgs,
) -> CabinetResult<()> {
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let strategy = args.strategy.unwrap_or(settings.baseline_strategy);
    let logger = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));

    let entries = read_entries(&args.file)?;

    let mut store = if args.seed || settings.seed_demo_data {
        demo_store(today)
    } else {
        RecordStore::new()
    };

    let mut service = CabinetService::new(&mut store, strategy).with_audit(logger.as_ref());
    for entry in entries {
        service.create(entry, today)?;
    }

    let records = store.list();
    println!(
        "{}",
        format_record_table(records, &settings.currency_symbol, &settings.date_format)
    );
    println!();
    let cards = summary_cards(
        &summarize(records),
        &settings.currency_symbol,
        &settings.cutoff_label,
    );
    print!("{}", format_summary(&cards));

    if let Some(format) = args.export {
        let dir = args.output.unwrap_or_else(|| settings.export_dir(paths));
        let path = export_records(records, &dir, format, today)?;
        if let Some(logger) = &logger {
            logger.log(&AuditEntry::export(
                path.display().to_string(),
                format.extension(),
                records.len(),
            ))?;
        }
        println!();
        println!("Exported {} records to: {}", records.len(), path.display());
    }

    Ok(())
}
