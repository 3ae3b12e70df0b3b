//! Table model: header cells, data rows and pinned footer rows.

use pgreport_common::SortDirection;
use serde::{Deserialize, Serialize};

/// A single display cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Rendered text of the cell
    pub text: String,
    /// Explicit sort key overriding the rendered text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_key: Option<String>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            custom_key: None,
        }
    }

    pub fn with_key(text: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            custom_key: Some(key.into()),
        }
    }

    /// Text used for classification and key extraction
    pub fn sort_text(&self) -> &str {
        self.custom_key.as_deref().unwrap_or(&self.text).trim()
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

/// A data row with its position at the time it entered the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    #[serde(default)]
    position: usize,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells, position: 0 }
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(|t| Cell::new(t)).collect())
    }

    /// Original position within the table body
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Sort text of a column; missing cells read as empty
    pub fn sort_text(&self, column: usize) -> &str {
        self.cells.get(column).map(Cell::sort_text).unwrap_or("")
    }

    /// Display text of a column; missing cells read as empty
    pub fn text(&self, column: usize) -> &str {
        self.cells.get(column).map(|c| c.text.as_str()).unwrap_or("")
    }
}

/// Column header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub label: String,
    /// Whether activating this header sorts the column
    pub sortable: bool,
    /// Active sort direction, set only on the currently sorted column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<SortDirection>,
}

impl HeaderCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sortable: true,
            indicator: None,
        }
    }

    pub fn unsortable(label: impl Into<String>) -> Self {
        Self {
            sortable: false,
            ..Self::new(label)
        }
    }
}

/// Tabular report section: one header row, data rows and footer rows
///
/// Deserialized rows keep their serialized positions when those number the
/// body `0..n`; otherwise positions follow the deserialized order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableData")]
pub struct Table {
    header: Vec<HeaderCell>,
    rows: Vec<Row>,
    #[serde(default)]
    footer: Vec<Row>,
}

#[derive(Deserialize)]
struct TableData {
    header: Vec<HeaderCell>,
    rows: Vec<Row>,
    #[serde(default)]
    footer: Vec<Row>,
}

impl From<TableData> for Table {
    fn from(data: TableData) -> Self {
        let mut seen = vec![false; data.rows.len()];
        let numbered = data.rows.iter().all(|row| match seen.get_mut(row.position) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        });

        let mut table = Table {
            header: data.header,
            rows: Vec::with_capacity(data.rows.len()),
            footer: data.footer,
        };
        if numbered {
            table.rows = data.rows;
        } else {
            table.replace_rows(data.rows);
        }
        table
    }
}

impl Table {
    pub fn new(header: Vec<HeaderCell>) -> Self {
        Self {
            header,
            rows: Vec::new(),
            footer: Vec::new(),
        }
    }

    /// Build a table from plain header labels and row texts
    pub fn from_texts<H, R, S>(labels: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        R: IntoIterator<Item = Vec<S>>,
        S: Into<String>,
    {
        let mut table = Self::new(labels.into_iter().map(HeaderCell::new).collect());
        for row in rows {
            table.push_row(Row::from_texts(row));
        }
        table
    }

    /// Append a data row, recording its original position
    pub fn push_row(&mut self, mut row: Row) {
        row.position = self.rows.len();
        self.rows.push(row);
    }

    /// Append a row that stays below the body and never moves
    pub fn push_footer(&mut self, row: Row) {
        self.footer.push(row);
    }

    /// Move the last `count` data rows into the footer
    pub fn pin_footer(&mut self, count: usize) {
        let split = self.rows.len().saturating_sub(count);
        let mut pinned = self.rows.split_off(split);
        pinned.append(&mut self.footer);
        self.footer = pinned;
    }

    pub fn header(&self) -> &[HeaderCell] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn footer(&self) -> &[Row] {
        &self.footer
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Sort texts of one column across the data rows
    pub fn column_texts(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row.sort_text(column))
    }

    /// Display texts of one column across the data rows
    pub fn column_values(&self, column: usize) -> Vec<&str> {
        self.rows.iter().map(|row| row.text(column)).collect()
    }

    pub(crate) fn take_rows(&mut self) -> Vec<Row> {
        std::mem::take(&mut self.rows)
    }

    pub(crate) fn set_sorted_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Replace the body, renumbering original positions
    pub(crate) fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows.clear();
        for row in rows {
            self.push_row(row);
        }
    }

    pub(crate) fn reverse_rows(&mut self) {
        self.rows.reverse();
    }

    pub(crate) fn set_indicator(&mut self, column: Option<usize>, direction: SortDirection) {
        for (idx, header) in self.header.iter_mut().enumerate() {
            header.indicator = if Some(idx) == column {
                Some(direction)
            } else {
                None
            };
        }
    }
}
