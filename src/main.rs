use anyhow::Result;
use clap::{Parser, Subcommand};

use cabinet_stats::cli::{
    handle_audit_command, handle_batch_command, handle_config_command, AuditArgs, BatchArgs,
    ConfigArgs,
};
use cabinet_stats::config::{paths::CabinetPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "cabinet",
    version,
    about = "Terminal dashboard for per-cabinet revenue statistics",
    long_about = "Cabinet Stats tracks cumulative revenue, balance and deals per \
                  operator cabinet. Each new report is reconciled against the \
                  previous one to derive daily revenue, and the results are shown \
                  as summary cards, charts and tables or exported to a spreadsheet."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Reconcile a CSV file of entries and print or export the result
    Batch(BatchArgs),

    /// Show current configuration and paths
    Config(ConfigArgs),

    /// Show the most recent audit log entries
    Audit(AuditArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CabinetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            cabinet_stats::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Batch(args)) => {
            handle_batch_command(&paths, &settings, args)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, &settings, args)?;
        }
        Some(Commands::Audit(args)) => {
            handle_audit_command(&paths, args)?;
        }
    }

    Ok(())
}
