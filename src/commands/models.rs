use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use ticket_roi::config;
use tracing::info;

/// Execute the models command
///
/// Lists the model pricing catalog the estimates are based on.
pub fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    info!(models = cfg.catalog.entries.len(), "listing model catalog");

    println!("{}", "Model Pricing Catalog:".green().bold());
    println!();

    for entry in &cfg.catalog.entries {
        let marker = if entry.name == cfg.catalog.default_model {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", entry.name.bold(), marker);
        println!(
            "    {}: ${} / ticket",
            "Vision".cyan(),
            entry.pricing.vision_cost
        );
        println!(
            "    {}: ${} / token, {} tokens assumed per ticket",
            "Tokens".cyan(),
            entry.pricing.token_cost,
            entry.pricing.tokens_per_ticket
        );
        println!(
            "    {}: ${} / ticket",
            "Base prompt output".cyan(),
            entry.pricing.base_prompt_output
        );
        println!();
    }

    Ok(())
}
