use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use ticket_roi::projection::DEFAULT_PROJECTION_MONTHS;

#[derive(Parser, Debug)]
#[command(
    name = "ticket-roi",
    version,
    about = "Cost/ROI estimator for AI-agent ticket automation"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "ticket-roi.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Detailed monthly breakdown with ROI projection (default)
    Detailed(DetailedArgs),

    /// Simplified workload-tiered monthly cost
    Simplified(SimplifiedArgs),

    /// List the model pricing catalog
    Models,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate the configuration file
    Validate,
}

/// Scenario overrides for the detailed model. Anything not given falls back
/// to the config file's `[detailed]` section, then to built-in defaults.
#[derive(Args, Debug, Clone)]
pub struct DetailedArgs {
    /// Tickets per month
    #[arg(long)]
    pub tickets: Option<f64>,

    /// Automation success rate (0-100)
    #[arg(long)]
    pub automation_rate: Option<f64>,

    /// Model name from the catalog
    #[arg(long)]
    pub model: Option<String>,

    /// LangSmith / LangGraph observability seats
    #[arg(long)]
    pub langsmith_users: Option<f64>,

    /// One-time build cost
    #[arg(long)]
    pub build_cost: Option<f64>,

    /// Months to amortize the build cost over
    #[arg(long)]
    pub amortization_months: Option<f64>,

    /// Average cost of one manually handled ticket
    #[arg(long)]
    pub manual_cost_per_ticket: Option<f64>,

    /// Months covered by the cumulative-savings projection
    #[arg(long, default_value_t = DEFAULT_PROJECTION_MONTHS)]
    pub projection_months: usize,

    /// Emit the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for DetailedArgs {
    fn default() -> Self {
        Self {
            tickets: None,
            automation_rate: None,
            model: None,
            langsmith_users: None,
            build_cost: None,
            amortization_months: None,
            manual_cost_per_ticket: None,
            projection_months: DEFAULT_PROJECTION_MONTHS,
            json: false,
        }
    }
}

/// Scenario overrides for the simplified model.
#[derive(Args, Debug, Clone, Default)]
pub struct SimplifiedArgs {
    /// Tickets per month
    #[arg(long)]
    pub tickets_per_month: Option<f64>,

    /// Share of tickets that are missing-points cases (0-100)
    #[arg(long)]
    pub missing_points_percentage: Option<f64>,

    /// LangChain observability seats
    #[arg(long)]
    pub langchain_seats: Option<f64>,

    /// Emit the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Get the command to execute, defaulting to a detailed estimate
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Detailed(DetailedArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_detailed() {
        let cli = Cli {
            config: PathBuf::from("ticket-roi.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Detailed(args) => {
                assert!(args.tickets.is_none());
                assert_eq!(args.projection_months, 12);
                assert!(!args.json);
            }
            _ => panic!("Expected Detailed command"),
        }
    }

    #[test]
    fn test_cli_parsing_detailed_overrides() {
        let args = vec![
            "ticket-roi",
            "detailed",
            "--tickets",
            "5000",
            "--automation-rate",
            "70",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Detailed(args) => {
                assert_eq!(args.tickets, Some(5000.0));
                assert_eq!(args.automation_rate, Some(70.0));
                assert!(args.json);
            }
            _ => panic!("Expected Detailed command"),
        }
    }

    #[test]
    fn test_cli_parsing_simplified() {
        let args = vec![
            "ticket-roi",
            "simplified",
            "--missing-points-percentage",
            "75",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Simplified(args) => {
                assert_eq!(args.missing_points_percentage, Some(75.0));
                assert!(args.tickets_per_month.is_none());
            }
            _ => panic!("Expected Simplified command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_validate() {
        let args = vec!["ticket-roi", "config", "validate"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Validate));
            }
            _ => panic!("Expected Config command"),
        }
    }
}
