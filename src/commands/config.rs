use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use ticket_roi::config;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (built-in defaults merged with the
/// config file and environment overrides).
pub fn show(config_path: &Path) -> Result<()> {
    info!("Loading configuration for display");
    let cfg = config::load_config(config_path)?;

    println!("{}", "Effective Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Catalog models: {}", cfg.catalog.entries.len());
    println!("  Default model: {}", cfg.catalog.default_model);
    println!("  Seat price: ${} / month", cfg.pricing.seat_price);
    println!("  Trace quota: {} traces / month", cfg.pricing.trace_quota);

    info!("Configuration validation successful");
    Ok(())
}
