use crate::cli::SimplifiedArgs;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use ticket_roi::config;
use ticket_roi::format::usd;
use ticket_roi::simplified::{SimplifiedConfig, SimplifiedCostModel};
use tracing::info;

/// Execute the simplified estimate command
pub fn execute(config_path: &Path, args: &SimplifiedArgs) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let scenario = apply_overrides(cfg.simplified.clone(), args);

    info!(
        tickets = scenario.tickets_per_month,
        missing_points_percentage = scenario.missing_points_percentage,
        "computing simplified estimate"
    );
    let breakdown = SimplifiedCostModel::new(&cfg.pricing).compute(&scenario);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("{}", "Simplified Monthly Cost Estimate".green().bold());
    println!();
    println!(
        "{} {}",
        "Total monthly cost:".bold(),
        usd(breakdown.total_monthly_cost).bold()
    );
    println!();

    println!(
        "  {}: {}",
        "LangChain seats".cyan(),
        usd(breakdown.langchain_cost)
    );
    println!(
        "  {}: {}",
        "Production uptime".cyan(),
        usd(breakdown.production_uptime_cost)
    );
    println!();

    println!(
        "  {} ({} tickets)",
        "Missing-points tier".bold(),
        breakdown.missing_points_tickets
    );
    println!(
        "    {}: {}",
        "Ticket resolution".cyan(),
        usd(breakdown.missing_points.ticket_resolution)
    );
    println!(
        "    {}: {}",
        "LLM calls".cyan(),
        usd(breakdown.missing_points.llm_calls)
    );
    println!(
        "    {}: {}",
        "Receipt processing".cyan(),
        usd(breakdown.missing_points.receipt_processing)
    );
    println!(
        "    {}: {}",
        "Subtotal".cyan(),
        usd(breakdown.missing_points.subtotal)
    );
    println!();

    println!(
        "  {} ({} tickets)",
        "Other tickets tier".bold(),
        breakdown.other_tickets
    );
    println!(
        "    {}: {}",
        "Ticket resolution".cyan(),
        usd(breakdown.other.ticket_resolution)
    );
    println!(
        "    {}: {}",
        "LLM calls".cyan(),
        usd(breakdown.other.llm_calls)
    );
    println!("    {}: {}", "Subtotal".cyan(), usd(breakdown.other.subtotal));

    Ok(())
}

fn apply_overrides(mut scenario: SimplifiedConfig, args: &SimplifiedArgs) -> SimplifiedConfig {
    if let Some(tickets) = args.tickets_per_month {
        scenario.tickets_per_month = tickets;
    }
    if let Some(percentage) = args.missing_points_percentage {
        scenario.missing_points_percentage = percentage;
    }
    if let Some(seats) = args.langchain_seats {
        scenario.langchain_seats = seats;
    }
    scenario
}
