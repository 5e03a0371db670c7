use crate::sheet::record::SheetRecord;
use crate::sheet::types::Record;
use anyhow::{Context, Result};
use std::io::Write;

/// Emits records as tab-delimited rows.
///
/// Cells containing tabs, quotes or newlines are quoted on the way out and
/// unquoted again by the reading side, so values survive the spreadsheet
/// round trip untouched.
pub struct SheetWriter<W: Write> {
    rows: csv::Writer<W>,
}

impl<W: Write> SheetWriter<W> {
    pub fn new(writer: W) -> Self {
        SheetWriter {
            rows: csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer),
        }
    }

    /// Write one pure record as its key row plus value rows.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        SheetRecord::from_record(record).write_to(self)
    }

    /// Write records in input order; no reordering, no deduplication.
    pub fn write_records<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    pub(crate) fn write_row<T, C>(&mut self, cells: T) -> Result<()>
    where
        T: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        self.rows
            .write_record(cells)
            .context("failed to write sheet row")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.rows.flush().context("failed to flush sheet output")
    }
}
