use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pgreport_common::ReportConfig;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod chart;
mod output;
mod table;

#[derive(Parser)]
#[command(name = "pgreport")]
#[command(about = "Sort, classify and export PostgreSQL report tables and charts")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML); PGREPORT_* environment variables override it
    #[arg(long, global = true, env = "PGREPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a CSV table by one column
    Sort(table::SortArgs),
    /// Print the inferred type of every column of a CSV table
    Classify(table::ClassifyArgs),
    /// Format a value the way chart axes and tooltips do
    Format(chart::FormatArgs),
    /// Export chart JSON as CSV
    ExportCsv(chart::ChartArgs),
    /// Print renderer options and series data for chart JSON
    Options(chart::ChartArgs),
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "pgreport=debug" } else { "pgreport=info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let config = ReportConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })?;

    match cli.command {
        Commands::Sort(args) => table::handle_sort(args, &config),
        Commands::Classify(args) => table::handle_classify(args, &config),
        Commands::Format(args) => chart::handle_format(args, &config),
        Commands::ExportCsv(args) => chart::handle_export_csv(args),
        Commands::Options(args) => chart::handle_options(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
