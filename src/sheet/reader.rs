use crate::error::SheetError;
use crate::sheet::record::{SheetRecord, TypeMarker};
use anyhow::{ensure, Result};

/// Reconstructs [`SheetRecord`]s from an ordered sequence of raw rows.
///
/// The row grammar is strict: every record starts with a key row of exactly
/// two cells, followed by exactly as many value rows as its marker declares.
/// Running out of rows between records is the normal end of input; running
/// out mid-record is an error.
pub struct SheetReader<I> {
    rows: I,
    values_column: usize,
}

impl<I> SheetReader<I>
where
    I: Iterator<Item = Vec<String>>,
{
    /// `values_column` selects which value column is authoritative (1-based,
    /// counted from the cell after the row marker).
    pub fn new(rows: I, values_column: usize) -> Result<Self> {
        ensure!(
            values_column >= 1,
            "values column must be >= 1 (is {values_column})"
        );
        Ok(SheetReader {
            rows,
            values_column,
        })
    }

    /// Read the next record, or `Ok(None)` on clean end of input at a
    /// key-row boundary. The returned record has been verified.
    pub fn read_one_record(&mut self) -> Result<Option<SheetRecord>, SheetError> {
        let Some(key_row) = self.rows.next() else {
            return Ok(None);
        };
        let (marker, key) = split_key_row(key_row)?;

        let expected = marker.value_rows();
        let mut values = Vec::with_capacity(expected);
        while values.len() < expected {
            let Some(row) = self.rows.next() else {
                return Err(SheetError::TruncatedRecord {
                    key,
                    expected,
                    actual: values.len(),
                });
            };
            values.push(self.value_cell(row)?);
        }

        let record = SheetRecord {
            marker,
            key,
            values,
        };
        record.verify()?;
        Ok(Some(record))
    }

    /// Read records until the input is exhausted.
    pub fn read_all_records(&mut self) -> Result<Vec<SheetRecord>, SheetError> {
        let mut records = Vec::new();
        while let Some(record) = self.read_one_record()? {
            records.push(record);
        }
        Ok(records)
    }

    fn value_cell(&self, mut row: Vec<String>) -> Result<String, SheetError> {
        let needed = std::cmp::max(2, self.values_column + 1);
        if row.len() < needed || row[0] != SheetRecord::VALUE_ROW_MARKER {
            return Err(SheetError::BadValueRow { row });
        }
        Ok(row.swap_remove(self.values_column))
    }
}

fn split_key_row(row: Vec<String>) -> Result<(TypeMarker, String), SheetError> {
    let [marker_cell, key]: [String; 2] =
        <[String; 2]>::try_from(row).map_err(|row| SheetError::BadKeyRow { row })?;
    let marker = TypeMarker::parse(&marker_cell).ok_or(SheetError::InvalidTypeMarker {
        key: key.clone(),
        marker: marker_cell,
    })?;
    Ok((marker, key))
}
