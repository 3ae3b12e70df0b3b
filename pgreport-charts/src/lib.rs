//! Report chart support
//!
//! Collaborators of the sortable tables in generated reports:
//! - Magnitude and number formatting for axis ticks and tooltips
//! - The chart data model, loadable from JSON
//! - CSV export of chart series
//! - jqPlot renderer options and tooltip markup

pub mod export;
pub mod format;
pub mod options;
pub mod series;
pub mod tooltip;

pub use export::export_csv;
pub use format::{format_magnitude, format_number, UnitKind};
pub use options::{renderer_options, series_data, tick_labels};
pub use series::{Chart, ChartKind, DataPoint, Series, XValue};
pub use tooltip::tooltip_html;
