//! # Tabular Export
//!
//! Writes any [`Tabular`](crate::attributes::Tabular) record type to a
//! [`RowSink`]: one header row of field names in declaration order, then one
//! row per record. Records are read and written one at a time; nothing is
//! buffered beyond the current row.
//!
//! Two sinks ship with the crate:
//!
//! - [`CsvSink`]: comma separated, CRLF terminated, quoting a cell only when it
//!   holds a comma, a double quote, CR or LF. Null cells are empty.
//! - [`JsonLinesSink`]: one JSON object per record keyed by field name. The
//!   header row only supplies the keys.

use serde_json::{Map, Value};
use std::io::Write;
use tracing::debug;

use crate::attributes::{field_names, FieldSpec, FieldValue};
use crate::error::Result;

/// Destination for exported rows.
pub trait RowSink {
    fn write_header(&mut self, names: &[&'static str]) -> Result<()>;

    fn write_row(&mut self, values: &[FieldValue]) -> Result<()>;

    /// Flush anything buffered. Called once after the last row.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub struct CsvSink<W: Write> {
    out: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, cell) in cells.into_iter().enumerate() {
            if i > 0 {
                self.out.write_all(b",")?;
            }
            self.out.write_all(escape_csv(cell.as_ref()).as_bytes())?;
        }
        self.out.write_all(b"\r\n")?;
        Ok(())
    }
}

impl<W: Write> RowSink for CsvSink<W> {
    fn write_header(&mut self, names: &[&'static str]) -> Result<()> {
        self.write_record(names.iter().copied())
    }

    fn write_row(&mut self, values: &[FieldValue]) -> Result<()> {
        self.write_record(values.iter().map(|v| v.to_string()))
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Quotes a cell when it would otherwise break the record structure.
pub fn escape_csv(cell: &str) -> std::borrow::Cow<'_, str> {
    if cell.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\"")).into()
    } else {
        cell.into()
    }
}

pub struct JsonLinesSink<W: Write> {
    out: W,
    names: Vec<&'static str>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RowSink for JsonLinesSink<W> {
    fn write_header(&mut self, names: &[&'static str]) -> Result<()> {
        self.names = names.to_vec();
        Ok(())
    }

    fn write_row(&mut self, values: &[FieldValue]) -> Result<()> {
        let mut object = Map::with_capacity(values.len());
        for (name, value) in self.names.iter().zip(values) {
            object.insert((*name).to_string(), serde_json::to_value(value)?);
        }
        serde_json::to_writer(&mut self.out, &Value::Object(object))?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the header and one row per record. Returns the number of records.
pub fn run<'r, R, I, K>(fields: &[FieldSpec<R>], records: I, sink: &mut K) -> Result<usize>
where
    R: 'r,
    I: IntoIterator<Item = &'r R>,
    K: RowSink + ?Sized,
{
    sink.write_header(&field_names(fields))?;

    let mut written = 0;
    let mut row = Vec::with_capacity(fields.len());
    for record in records {
        row.clear();
        row.extend(fields.iter().map(|f| f.value(record)));
        sink.write_row(&row)?;
        written += 1;
    }
    sink.finish()?;

    debug!(records = written, columns = fields.len(), "export finished");
    Ok(written)
}
