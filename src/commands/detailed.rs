use crate::cli::DetailedArgs;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use ticket_roi::config;
use ticket_roi::detailed::{DetailedConfig, DetailedCostModel};
use ticket_roi::format::{payback_label, usd};
use ticket_roi::projection::cumulative_savings;
use tracing::{info, warn};

/// Execute the detailed estimate command
///
/// Renders the full monthly breakdown, the manual-baseline comparison and
/// the cumulative-savings projection, or the raw breakdown as JSON.
pub fn execute(config_path: &Path, args: &DetailedArgs) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let scenario = apply_overrides(cfg.detailed.clone(), args);

    // Fallback policy lives here, not in the engine: an unknown model still
    // computes, but the operator should know the numbers are default pricing.
    if cfg.catalog.lookup(&scenario.model_name).is_none() {
        warn!(
            model = %scenario.model_name,
            default = %cfg.catalog.default_model,
            "unknown model, using default catalog entry"
        );
        println!(
            "{}",
            format!(
                "Note: model '{}' is not in the catalog; using pricing for '{}'",
                scenario.model_name, cfg.catalog.default_model
            )
            .yellow()
        );
    }

    info!(tickets = scenario.tickets, model = %scenario.model_name, "computing detailed estimate");
    let breakdown = DetailedCostModel::new(&cfg.catalog, &cfg.pricing).compute(&scenario);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("{}", "LLM Cost & ROI Estimate".green().bold());
    println!();

    println!(
        "{} {}  (recurring LLM + licensing)",
        "Estimated monthly cost:".bold(),
        usd(breakdown.total_monthly_llm).bold()
    );
    println!();
    println!(
        "  {}: {}",
        "Vision / image processing".cyan(),
        usd(breakdown.cost_vision)
    );
    println!(
        "  {}: {}",
        "Text prompt usage".cyan(),
        usd(breakdown.cost_text)
    );
    println!(
        "  {}: {}",
        "LangSmith / LangGraph licensing".cyan(),
        usd(breakdown.cost_langsmith)
    );
    println!(
        "  {}: {}",
        "Trace overage".cyan(),
        usd(breakdown.trace_overage)
    );
    println!(
        "  {}: {}",
        "Amortized build (monthly)".cyan(),
        usd(breakdown.amortized_build_monthly)
    );
    println!();

    let manual_remaining = breakdown.tickets - breakdown.automated_tickets;
    println!(
        "  Automation handles {} tickets / month (at {}%), {} remain manual",
        breakdown.automated_tickets, breakdown.automation_rate, manual_remaining
    );
    println!(
        "  {}: {} / month",
        "Manual baseline".cyan(),
        usd(breakdown.manual_baseline_monthly)
    );
    println!(
        "  {}: {} + {} = {}",
        "Agent + leftover manual".cyan(),
        usd(breakdown.agent_monthly_all_in),
        usd(breakdown.manual_after_agent_monthly),
        usd(breakdown.agent_monthly_all_in + breakdown.manual_after_agent_monthly)
    );
    println!();

    let savings_line = usd(breakdown.recurring_net_monthly_savings);
    let savings_colored = if breakdown.recurring_net_monthly_savings > 0.0 {
        savings_line.green()
    } else {
        savings_line.red()
    };
    println!(
        "  {}: {}",
        "Recurring net monthly savings".bold(),
        savings_colored
    );
    println!(
        "  {}: {}",
        "Payback (recoup build cost)".bold(),
        payback_label(breakdown.payback_months)
    );

    if args.projection_months > 0 {
        println!();
        println!(
            "{}",
            format!(
                "Cumulative net savings over {} months (starts at -build cost):",
                args.projection_months
            )
            .bold()
        );
        let series = cumulative_savings(
            scenario.build_cost,
            breakdown.recurring_net_monthly_savings,
            args.projection_months,
        );
        for (month, value) in series.iter().enumerate() {
            let formatted = usd(*value);
            let colored_value = if *value >= 0.0 {
                formatted.green()
            } else {
                formatted.red()
            };
            println!("  M{:<3} {}", month + 1, colored_value);
        }
    }

    Ok(())
}

fn apply_overrides(mut scenario: DetailedConfig, args: &DetailedArgs) -> DetailedConfig {
    if let Some(tickets) = args.tickets {
        scenario.tickets = tickets;
    }
    if let Some(rate) = args.automation_rate {
        scenario.automation_rate = rate;
    }
    if let Some(model) = &args.model {
        scenario.model_name = model.clone();
    }
    if let Some(users) = args.langsmith_users {
        scenario.langsmith_users = users;
    }
    if let Some(build_cost) = args.build_cost {
        scenario.build_cost = build_cost;
    }
    if let Some(months) = args.amortization_months {
        scenario.amortization_months = months;
    }
    if let Some(cost) = args.manual_cost_per_ticket {
        scenario.manual_cost_per_ticket = cost;
    }
    scenario
}
