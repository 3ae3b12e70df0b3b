//! Sortable report tables
//!
//! This crate infers the content type of each table column from its rendered
//! text, extracts normalized sort keys (unit-scaled magnitudes, date ordinals
//! or plain text) and reorders table bodies in response to header activations.
//! It includes:
//! - Column classification (numeric, percentage, dates, alphabetic)
//! - Never-failing comparators for each column type
//! - A per-table sort engine with direction toggling
//! - HTML and CSV rendering of tables

pub mod classify;
pub mod compare;
pub mod csv_io;
pub mod engine;
pub mod html;
pub mod model;

pub use classify::{classify_column, ColumnType};
pub use compare::{compare, compare_text, SortKey};
pub use engine::{SortState, TableSorter};
pub use html::render_table;
pub use model::{Cell, HeaderCell, Row, Table};
