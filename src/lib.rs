//! pgreport - sortable monitoring report tables and chart data
//!
//! This is the facade crate that ties the report components together: the
//! table sorting engine, the chart data layer and the shared configuration.

pub use pgreport_charts as charts;
pub use pgreport_common as common;
pub use pgreport_table as table;

/// Re-export common types and utilities
pub mod prelude {
    pub use crate::charts::{
        export_csv, format_magnitude, format_number, Chart, ChartKind, DataPoint, Series,
        UnitKind, XValue,
    };
    pub use crate::common::{ReportConfig, ReportError, Result, SortDirection};
    pub use crate::table::{
        classify_column, compare, Cell, ColumnType, HeaderCell, Row, SortKey, Table,
        TableSorter,
    };
}
