//! CLI command handler for the audit log

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::CabinetPaths;
use crate::error::CabinetResult;

/// Arguments of `cabinet audit`
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of most recent entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle the audit command
pub fn handle_audit_command(paths: &CabinetPaths, args: AuditArgs) -> CabinetResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
