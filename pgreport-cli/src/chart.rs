use crate::output::emit;
use anyhow::{Context, Result};
use clap::Args;
use pgreport_charts::{
    export_csv, format_magnitude, format_number, renderer_options, series_data, Chart, UnitKind,
};
use pgreport_common::ReportConfig;
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args)]
pub struct FormatArgs {
    /// Value to format
    #[arg(allow_hyphen_values = true)]
    value: f64,
    /// Decimal places (defaults to the configured precision)
    #[arg(short, long)]
    precision: Option<u32>,
    /// Series or axis label selecting the unit (size, duration, other)
    #[arg(short, long)]
    label: Option<String>,
    /// Thousands-separated number as shown in pie tooltips
    #[arg(short, long, conflicts_with_all = ["precision", "label"])]
    number: bool,
}

#[derive(Args)]
pub struct ChartArgs {
    /// Chart JSON file
    #[arg(short, long)]
    input: PathBuf,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_chart(args: &ChartArgs) -> Result<Chart> {
    Chart::from_path(&args.input)
        .with_context(|| format!("Failed to load chart from {}", args.input.display()))
}

pub fn handle_format(args: FormatArgs, config: &ReportConfig) -> Result<()> {
    let formatted = if args.number {
        format_number(args.value)
    } else {
        let unit = UnitKind::from_label(args.label.as_deref());
        let precision = args.precision.unwrap_or(config.default_precision);
        debug!(?unit, precision, "formatting magnitude");
        format_magnitude(args.value, precision, unit)
    };

    emit(&format!("{}\n", formatted), None)
}

pub fn handle_export_csv(args: ChartArgs) -> Result<()> {
    let chart = load_chart(&args)?;
    emit(&export_csv(&chart), args.output.as_deref())
}

pub fn handle_options(args: ChartArgs) -> Result<()> {
    let chart = load_chart(&args)?;
    let document = json!({
        "options": renderer_options(&chart),
        "data": series_data(&chart),
    });

    let mut rendered =
        serde_json::to_string_pretty(&document).context("Failed to serialize options")?;
    rendered.push('\n');
    emit(&rendered, args.output.as_deref())
}
