mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::PortfolioArgs;

/// Portfolio stress testing and allocation analysis
#[derive(Parser)]
#[command(
    name = "plab",
    version,
    about = "Portfolio stress testing and allocation analysis",
    long_about = "Scores a portfolio's risk and diversification, suggests allocation \
                  changes, and projects its value under five macro stress scenarios \
                  (market crash, inflation spike, rate hike, geopolitical crisis, \
                  tech-sector crash). All arithmetic is decimal."
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
    /// Risk and diversification scores with recommendations
    Analyze(PortfolioArgs),
    /// Impact of the five canned stress scenarios
    Scenarios(PortfolioArgs),
    /// Analysis and scenarios together, with the worst scenario called out
    StressTest(PortfolioArgs),
    /// Print the sample portfolio as JSON
    Sample,
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

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analyze(args) => commands::analysis::run_analyze(args),
        Commands::Scenarios(args) => commands::scenarios::run_scenarios(args),
        Commands::StressTest(args) => commands::scenarios::run_stress_test(args),
        Commands::Sample => commands::analysis::run_sample(),
        Commands::Version => {
            println!("plab {}", env!("CARGO_PKG_VERSION"));
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
