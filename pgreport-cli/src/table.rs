use crate::output::emit;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pgreport_common::{ReportConfig, SortDirection};
use pgreport_table::csv_io::{read_table_path, write_table};
use pgreport_table::{render_table, Table, TableSorter};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Html,
}

#[derive(Args)]
pub struct SortArgs {
    /// CSV file whose first record is the header row
    #[arg(short, long)]
    input: PathBuf,
    /// Zero-based column to sort by
    #[arg(short, long)]
    column: usize,
    /// Sort direction: ascending or descending (defaults to the configured initial direction)
    #[arg(short, long)]
    direction: Option<SortDirection>,
    /// Number of trailing rows kept in place as a footer (totals)
    #[arg(long, default_value_t = 0)]
    footer: usize,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// CSV file whose first record is the header row
    #[arg(short, long)]
    input: PathBuf,
}

fn load_table(path: &Path, config: &ReportConfig) -> Result<Table> {
    let delimiter = config.delimiter_byte()?;
    read_table_path(path, delimiter)
        .with_context(|| format!("Failed to read table from {}", path.display()))
}

pub fn handle_sort(args: SortArgs, config: &ReportConfig) -> Result<()> {
    let mut table = load_table(&args.input, config)?;
    table.pin_footer(args.footer);

    let direction = args.direction.unwrap_or(config.initial_direction);

    let mut sorter = TableSorter::with_config(table, config);
    let column_type = sorter.column_type(args.column)?;
    sorter.sort(args.column, direction)?;
    info!(
        "Sorted {} rows by column {} ({}, {})",
        sorter.table().row_count(),
        args.column,
        column_type,
        direction
    );

    let rendered = match args.format {
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_table(sorter.table(), &mut buffer, config.delimiter_byte()?)?;
            String::from_utf8(buffer).context("CSV output is not valid UTF-8")?
        }
        OutputFormat::Html => render_table(sorter.table(), None),
    };

    emit(&rendered, args.output.as_deref())
}

pub fn handle_classify(args: ClassifyArgs, config: &ReportConfig) -> Result<()> {
    let table = load_table(&args.input, config)?;
    let labels: Vec<String> = table.header().iter().map(|h| h.label.clone()).collect();
    let mut sorter = TableSorter::with_config(table, config);

    let mut report = String::new();
    for (column, label) in labels.iter().enumerate() {
        let column_type = sorter.column_type(column)?;
        report.push_str(&format!("{}\t{}\t{}\n", column, label, column_type));
    }

    emit(&report, None)
}
