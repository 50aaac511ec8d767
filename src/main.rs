use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use ticket_roi::init_tracing;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    match args.get_command() {
        cli::Commands::Detailed(detailed_args) => {
            commands::detailed::execute(&args.config, &detailed_args)?;
        }
        cli::Commands::Simplified(simplified_args) => {
            commands::simplified::execute(&args.config, &simplified_args)?;
        }
        cli::Commands::Models => {
            commands::models::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("ticket-roi v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
