mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::extract::ExtractArgs;
use commands::matching::MatchLenderArgs;
use commands::ratios::RatiosArgs;
use commands::underwrite::UnderwriteArgs;

/// Automated mortgage underwriting analysis
#[derive(Parser)]
#[command(
    name = "uwa",
    version,
    about = "Automated mortgage underwriting analysis",
    long_about = "A CLI for mortgage underwriting with decimal precision. \
                  Extracts underwriting fields from document text, computes \
                  stress-tested GDS/TDS ratios, and matches applicants to a \
                  lender tier."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full underwriting pipeline on a document text file
    Underwrite(UnderwriteArgs),
    /// Extract income, credit score, down payment, and liabilities
    Extract(ExtractArgs),
    /// Compute stress-tested GDS/TDS ratios
    Ratios(RatiosArgs),
    /// Match ratios and borrower attributes to a lender tier
    MatchLender(MatchLenderArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Underwrite(args) => commands::underwrite::run_underwrite(args),
        Commands::Extract(args) => commands::extract::run_extract(args),
        Commands::Ratios(args) => commands::ratios::run_ratios(args),
        Commands::MatchLender(args) => commands::matching::run_match_lender(args),
        Commands::Version => {
            println!("uwa {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
