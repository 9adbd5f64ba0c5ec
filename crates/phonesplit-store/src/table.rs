use crate::error::{Result, StoreError};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use phonesplit_core::domain::{Record, Table};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const BOM: char = '\u{feff}';

pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| StoreError::io(path, source))?;
    parse_table(file, path)
}

/// Reads a headed CSV. `path` is only used in error messages.
pub fn parse_table<R: Read>(reader: R, path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Vec<String> = reader
        .headers()
        .map_err(|source| StoreError::csv(path, source))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(StoreError::EmptyInput(path.to_path_buf()));
    }
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix(BOM) {
            *first = stripped.to_string();
        }
    }

    let width = headers.len();
    let mut table = Table::new(headers);
    for row in reader.records() {
        let row = row.map_err(|source| StoreError::csv(path, source))?;
        if row.len() > width {
            return Err(StoreError::MalformedRow {
                path: path.to_path_buf(),
                line: row.position().map(|pos| pos.line()).unwrap_or_default(),
                expected: width,
                found: row.len(),
            });
        }
        let mut fields: Vec<String> = row.iter().map(str::to_string).collect();
        fields.resize(width, String::new());
        table.rows.push(Record::new(fields));
    }

    Ok(table)
}

/// Writes the header row and every record with `\n` line endings.
pub fn write_table<W: Write>(writer: W, table: &Table) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    writer.write_record(&table.headers)?;
    for record in &table.rows {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}
