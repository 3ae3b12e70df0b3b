//! Table sort engine
//!
//! A [`TableSorter`] owns one table together with its sort state: the
//! memoized classification of each column and the currently active column and
//! direction. Activating the active column again reverses the rows in place;
//! activating another column extracts fresh keys and runs a stable sort.

use crate::classify::{classify_column, ColumnType};
use crate::compare::{compare, SortKey};
use crate::model::{Row, Table};
use pgreport_common::{ReportConfig, ReportError, Result, SortDirection};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Per-table sort state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    column_types: HashMap<usize, ColumnType>,
    active: Option<(usize, SortDirection)>,
}

impl SortState {
    /// Column and direction of the last sort
    pub fn active(&self) -> Option<(usize, SortDirection)> {
        self.active
    }

    /// Cached classification of a column, if it has been computed
    pub fn cached_type(&self, column: usize) -> Option<ColumnType> {
        self.column_types.get(&column).copied()
    }

    fn invalidate(&mut self) {
        self.column_types.clear();
        self.active = None;
    }
}

/// Sorts the body rows of a single table
#[derive(Debug, Clone)]
pub struct TableSorter {
    table: Table,
    state: SortState,
    initial_direction: SortDirection,
    year_pivot: u32,
}

impl TableSorter {
    pub fn new(table: Table) -> Self {
        Self::with_config(table, &ReportConfig::default())
    }

    pub fn with_config(table: Table, config: &ReportConfig) -> Self {
        Self {
            table,
            state: SortState::default(),
            initial_direction: config.initial_direction,
            year_pivot: config.two_digit_year_pivot,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    fn check_column(&self, column: usize) -> Result<()> {
        let columns = self.table.column_count();
        if column >= columns {
            return Err(ReportError::ColumnOutOfRange {
                index: column,
                columns,
            });
        }
        Ok(())
    }

    /// Classified type of a column, computed on first use
    pub fn column_type(&mut self, column: usize) -> Result<ColumnType> {
        self.check_column(column)?;

        if let Some(column_type) = self.state.cached_type(column) {
            return Ok(column_type);
        }

        let column_type = classify_column(self.table.column_texts(column));
        debug!(column, %column_type, "classified column");
        self.state.column_types.insert(column, column_type);
        Ok(column_type)
    }

    /// Handle a header activation
    ///
    /// Returns the direction now applied, or `None` when the activation was
    /// ignored (unsortable column or empty body).
    pub fn activate(&mut self, column: usize) -> Result<Option<SortDirection>> {
        self.check_column(column)?;

        if !self.table.header()[column].sortable {
            warn!(column, "ignoring activation of unsortable column");
            return Ok(None);
        }

        if self.table.row_count() == 0 {
            return Ok(None);
        }

        match self.state.active {
            Some((active, direction)) if active == column => {
                let direction = direction.toggled();
                self.table.reverse_rows();
                self.mark_active(column, direction);
                debug!(column, %direction, "reversed sorted column");
                Ok(Some(direction))
            }
            _ => {
                let direction = self.initial_direction;
                self.sort(column, direction)?;
                Ok(Some(direction))
            }
        }
    }

    /// Sort by a column in an explicit direction, recomputing every key
    ///
    /// Descending order is the reversed ascending order, so rows with equal
    /// keys appear in reverse input order.
    pub fn sort(&mut self, column: usize, direction: SortDirection) -> Result<()> {
        let column_type = self.column_type(column)?;

        if self.table.row_count() == 0 {
            return Ok(());
        }

        let year_pivot = self.year_pivot;
        let mut keyed: Vec<(SortKey, Row)> = self
            .table
            .take_rows()
            .into_iter()
            .map(|row| {
                let key = SortKey::extract(column_type, row.sort_text(column), year_pivot);
                (key, row)
            })
            .collect();

        keyed.sort_by(|a, b| compare(&a.0, &b.0));
        if direction == SortDirection::Descending {
            keyed.reverse();
        }

        let row_count = keyed.len();
        self.table
            .set_sorted_rows(keyed.into_iter().map(|(_, row)| row).collect());
        self.mark_active(column, direction);

        debug!(column, %column_type, %direction, rows = row_count, "sorted table");
        Ok(())
    }

    /// Replace the table body, discarding cached classifications and state
    pub fn replace_rows(&mut self, rows: Vec<Row>) {
        self.table.replace_rows(rows);
        self.state.invalidate();
        self.table.set_indicator(None, SortDirection::Ascending);
    }

    /// Put rows back in the order they were added
    pub fn restore_original_order(&mut self) {
        let mut rows = self.table.take_rows();
        rows.sort_by_key(Row::position);
        self.table.set_sorted_rows(rows);
        self.state.active = None;
        self.table.set_indicator(None, SortDirection::Ascending);
    }

    fn mark_active(&mut self, column: usize, direction: SortDirection) {
        self.state.active = Some((column, direction));
        self.table.set_indicator(Some(column), direction);
    }
}
