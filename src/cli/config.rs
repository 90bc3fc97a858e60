//! CLI command handler for configuration

use clap::Args;

use crate::config::{CabinetPaths, Settings};
use crate::error::CabinetResult;

/// Arguments of `cabinet config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the current settings (defaults included) to the settings file
    #[arg(long)]
    pub save: bool,
}

/// Handle the config command
pub fn handle_config_command(
    paths: &CabinetPaths,
    settings: &Settings,
    args: ConfigArgs,
) -> CabinetResult<()> {
    println!("Cabinet Stats Configuration");
    println!("===========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!("Export directory: {}", settings.export_dir(paths).display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date format:       {}", settings.date_format);
    println!("  Deal cutoff:       {}", settings.cutoff_label);
    println!("  Baseline strategy: {}", settings.baseline_strategy);
    println!("  Export format:     {}", settings.export.default_format);
    println!("  Audit log enabled: {}", settings.audit_enabled);
    println!("  Seed demo data:    {}", settings.seed_demo_data);

    if args.save {
        settings.save(paths)?;
        println!();
        println!("Settings saved to {}", paths.settings_file().display());
    } else if !paths.is_initialized() {
        println!();
        println!("Using defaults. Run 'cabinet config --save' to write a settings file.");
    }

    Ok(())
}
