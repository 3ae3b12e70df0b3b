//! CSV input and output for tables. The first record is the header row.

use crate::model::{HeaderCell, Row, Table};
use pgreport_common::{ReportError, Result};
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Read a table from CSV data
pub fn read_table<R: Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let header: Vec<HeaderCell> = csv_reader.headers()?.iter().map(HeaderCell::new).collect();
    if header.is_empty() {
        return Err(ReportError::InvalidInput(
            "CSV input has no header row".to_string(),
        ));
    }

    let mut table = Table::new(header);
    for record in csv_reader.records() {
        let record = record?;
        table.push_row(Row::from_texts(record.iter()));
    }

    debug!(
        columns = table.column_count(),
        rows = table.row_count(),
        "loaded table from CSV"
    );
    Ok(table)
}

/// Read a table from a CSV file
pub fn read_table_path(path: &Path, delimiter: u8) -> Result<Table> {
    let file = std::fs::File::open(path)?;
    read_table(file, delimiter)
}

/// Write a table as CSV: header, body rows in current order, then footer rows
pub fn write_table<W: Write>(table: &Table, writer: W, delimiter: u8) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record(table.header().iter().map(|h| h.label.as_str()))?;
    for row in table.rows().iter().chain(table.footer()) {
        csv_writer.write_record(row.cells.iter().map(|c| c.text.as_str()))?;
    }
    csv_writer.flush()?;
    Ok(())
}
