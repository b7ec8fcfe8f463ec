//! Gratuity demonstration CLI
//!
//! Command-line entry point for the gratuity calculator. Running it with no
//! arguments evaluates the sample invocation (amount 10, tip 5%) and prints
//! the tip-inclusive total to standard output.

use anyhow::Result;
use clap::Parser;
use gratuity_calculator::calculate_total;
use serde::Serialize;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Gratuity calculator demonstration tool
#[derive(Parser, Debug)]
#[command(name = "gratuity")]
#[command(about = "Compute a tip-inclusive total from a base amount and a percentage")]
#[command(version)]
struct Cli {
    /// Base amount
    #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
    amount: f64,

    /// Tip rate in percent points
    #[arg(short, long, default_value_t = 5.0, allow_negative_numbers = true)]
    tip: f64,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Breakdown of a single calculation for structured output
#[derive(Debug, Serialize)]
struct TipBreakdown {
    amount: f64,
    tip_percent: f64,
    tip: f64,
    total: f64,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!(amount = cli.amount, tip_percent = cli.tip, "starting calculation");

    match calculate_total(cli.amount, cli.tip) {
        Ok(total) => {
            info!(total, "calculation completed");
            if cli.format == "json" {
                let breakdown = TipBreakdown {
                    amount: cli.amount,
                    tip_percent: cli.tip,
                    tip: total - cli.amount,
                    total,
                };
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                println!("{total}");
            }
            Ok(())
        }
        Err(e) => {
            error!(category = e.category(), "calculation failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_sample_invocation() {
        let cli = Cli::parse_from(["gratuity"]);
        assert_eq!(cli.amount, 10.0);
        assert_eq!(cli.tip, 5.0);
        assert_eq!(cli.format, "text");
        assert!(!cli.verbose);
    }

    #[test]
    fn negative_values_parse_through_to_the_calculator() {
        let cli = Cli::parse_from(["gratuity", "--amount", "-1", "--tip", "5"]);
        assert_eq!(cli.amount, -1.0);
        assert!(calculate_total(cli.amount, cli.tip).is_err());
    }
}
