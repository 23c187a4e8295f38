//! Format writers - terminal consumers of a row stream
//!
//! Three interchangeable encodings over the same rows: newline-delimited
//! JSON, a single pretty-printed array, and CSV. The JSONL writer never
//! holds more than one row; the other two materialize the stream because
//! their framing (closing bracket, header line) requires it.

use crate::extract::registry::{META_FIELDS, NUTRIENTS};
use crate::extract::types::Row;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::io::Write;

/// Writes each row as one compact JSON object per line
pub struct JsonlWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(writer: W) -> Self {
        JsonlWriter { writer }
    }

    pub fn write_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<()> {
        for row in rows {
            let line = serde_json::to_string(&row).context("Failed to serialize row")?;
            writeln!(self.writer, "{}", line).context("Failed to write row")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}

/// Writes the whole stream as one indented JSON array
pub struct ArrayWriter<W: Write> {
    writer: W,
}

impl<W: Write> ArrayWriter<W> {
    pub fn new(writer: W) -> Self {
        ArrayWriter { writer }
    }

    pub fn write_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<()> {
        let rows: Vec<Row> = rows.into_iter().collect();
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?;
        writeln!(self.writer, "{}", json).context("Failed to write rows")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}

/// Writes the stream as CSV with a header row
///
/// Column order is stable: the seven metadata fields first, then registry
/// keys present in the first row in registry order, then any keys first
/// seen in later rows, appended in first-seen order. An empty stream
/// produces no output at all, not even a header.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        CsvWriter { writer: csv::Writer::from_writer(writer) }
    }

    pub fn write_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> Result<()> {
        let rows: Vec<Row> = rows.into_iter().collect();
        if rows.is_empty() {
            return Ok(());
        }

        let columns = column_order(&rows);
        self.writer
            .write_record(&columns)
            .context("Failed to write CSV header")?;

        for row in &rows {
            let record = columns.iter().map(|column| cell(row.get(column)));
            self.writer
                .write_record(record)
                .context("Failed to write CSV row")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}

/// Compute the header for a non-empty row set.
///
/// The accumulator is an explicit Vec + seen-set so the "columns discovered
/// in later rows" rule does not lean on map iteration order.
fn column_order(rows: &[Row]) -> Vec<String> {
    let mut columns: Vec<String> = META_FIELDS.iter().map(|f| f.to_string()).collect();
    columns.extend(
        NUTRIENTS
            .iter()
            .filter(|spec| rows[0].contains_key(spec.key))
            .map(|spec| spec.key.to_string()),
    );

    let mut seen: HashSet<String> = columns.iter().cloned().collect();
    for row in rows {
        for key in row.data.keys() {
            if seen.insert(key.clone()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Render one cell: absent and null become the empty string, strings are
/// written bare, everything else as its JSON text.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
