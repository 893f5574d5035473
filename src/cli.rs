//! Command-line interface for the compound interest calculator

use anyhow::bail;
use clap::Parser;

use crate::input::{parse_amount, parse_frequency, parse_rate};
use crate::projection::{ProjectionConfig, ProjectionEngine};
use crate::render::{self, Format, RenderOptions};

/// Calculate compound interest with rich terminal output
#[derive(Parser, Debug)]
#[command(name = "compound", version)]
#[command(about = "Calculate compound interest with rich terminal output")]
#[command(after_help = "\
Examples:
  compound 10000                         # $10k at 7% for 10 years
  compound 10000 -r 8% -t 30             # Custom rate and time
  compound 50000 -c 500                  # With $500/month contributions
  compound 10000 -o json > results.json  # Export to JSON
")]
pub struct CliArgs {
    /// Starting principal amount (e.g. 10000 or 10,000)
    #[arg(value_name = "PRINCIPAL", allow_hyphen_values = true)]
    pub principal: String,

    /// Annual interest rate. Accepts: 7%, 0.07, .07
    #[arg(short, long, default_value = "7%", allow_hyphen_values = true)]
    pub rate: String,

    /// Duration in years
    #[arg(short = 't', long = "time", default_value_t = 10, allow_negative_numbers = true)]
    pub time: i64,

    /// Compounding frequency: daily, monthly, quarterly, annually, or an integer
    #[arg(short = 'n', long = "compound", default_value = "monthly", value_name = "FREQ")]
    pub compound: String,

    /// Regular contribution amount
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub contribution: String,

    /// Contribution frequency: monthly, weekly, annually, etc.
    #[arg(long = "contribution-freq", default_value = "monthly", value_name = "FREQ")]
    pub contribution_freq: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "rich")]
    pub output: Format,

    /// Suppress the sparkline chart
    #[arg(long)]
    pub no_chart: bool,

    /// Suppress the year-by-year table
    #[arg(long)]
    pub no_table: bool,

    /// Show only the final amount
    #[arg(short, long)]
    pub quiet: bool,
}

/// Validate the parsed arguments, run the projection and print the
/// rendered output. Any validation failure aborts before the engine
/// runs; only the high-rate advisory is non-fatal.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let principal = parse_amount(&args.principal)?;
    if principal < 0.0 {
        bail!("Principal cannot be negative.");
    }

    let rate = parse_rate(&args.rate)?;
    if rate >= 1.0 {
        eprintln!(
            "Warning: Rate {:.1}% seems high. Did you mean {}?",
            rate * 100.0,
            args.rate,
        );
    }

    let compound_freq = parse_frequency(&args.compound)?;

    let contribution = parse_amount(&args.contribution)?;
    if contribution < 0.0 {
        bail!("Contribution cannot be negative.");
    }

    let contribution_freq = parse_frequency(&args.contribution_freq)?;

    if args.time <= 0 {
        bail!("Time must be positive.");
    }

    let config = ProjectionConfig {
        principal,
        rate,
        years: args.time as u32,
        compound_freq,
        contribution,
        contribution_freq,
    };
    log::debug!("running projection: {:?}", config);

    let result = ProjectionEngine::new(config).project();

    let options = RenderOptions {
        show_chart: !args.no_chart,
        show_table: !args.no_table,
        quiet: args.quiet,
    };
    let output = render::render(&result, args.output, &options)?;
    println!("{}", output);

    Ok(())
}
