use crate::error::SheetError;
use crate::sheet::types::{NamePath, Record, RecordValue};
use crate::sheet::writer::SheetWriter;
use anyhow::Result;
use std::io::Write;

/// The type cell of a key row, parsed into its two legal shapes right after
/// reading so no later stage has to re-interpret the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMarker {
    /// `-` on the wire: the record holds exactly one string.
    Scalar,
    /// A non-negative decimal on the wire: the record holds that many
    /// values, 0 and 1 included.
    Array(usize),
}

impl TypeMarker {
    const SCALAR: &'static str = "-";

    pub fn parse(cell: &str) -> Option<TypeMarker> {
        if cell == Self::SCALAR {
            return Some(TypeMarker::Scalar);
        }
        cell.parse::<usize>().ok().map(TypeMarker::Array)
    }

    pub fn render(&self) -> String {
        match self {
            TypeMarker::Scalar => Self::SCALAR.to_string(),
            TypeMarker::Array(len) => len.to_string(),
        }
    }

    /// How many value rows a record with this marker owes.
    pub fn value_rows(&self) -> usize {
        match self {
            TypeMarker::Scalar => 1,
            TypeMarker::Array(len) => *len,
        }
    }
}

/// The wire form of a record: one key row followed by its value rows.
///
/// Carries sheet-specific data (the marker, the joined key) that the pure
/// [`Record`] does not need; convert at the boundary with
/// [`SheetRecord::from_record`] and [`SheetRecord::into_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRecord {
    pub marker: TypeMarker,
    pub key: String,
    pub values: Vec<String>,
}

impl SheetRecord {
    /// Marker cell of every value row.
    pub const VALUE_ROW_MARKER: &'static str = "";

    pub fn from_record(record: &Record) -> SheetRecord {
        let key = record.path.render();
        match &record.value {
            RecordValue::Scalar(value) => SheetRecord {
                marker: TypeMarker::Scalar,
                key,
                values: vec![value.clone()],
            },
            RecordValue::Array(items) => SheetRecord {
                marker: TypeMarker::Array(items.len()),
                key,
                values: items.clone(),
            },
        }
    }

    /// Convert back to the pure form: scalar records yield their single
    /// string, array records keep their values as an array even for
    /// lengths 0 and 1. Callers are expected to [`verify`](Self::verify)
    /// first.
    pub fn into_record(self) -> Record {
        let path = NamePath::parse(&self.key);
        let value = match self.marker {
            TypeMarker::Scalar => {
                RecordValue::Scalar(self.values.into_iter().next().unwrap_or_default())
            }
            TypeMarker::Array(_) => RecordValue::Array(self.values),
        };
        Record { path, value }
    }

    /// Check that the declared marker and the number of values held agree.
    pub fn verify(&self) -> Result<(), SheetError> {
        let actual = self.values.len();
        match self.marker {
            TypeMarker::Scalar if actual != 1 => Err(SheetError::ScalarArityMismatch {
                key: self.key.clone(),
                actual,
            }),
            TypeMarker::Array(declared) if actual != declared => {
                Err(SheetError::ArrayLengthMismatch {
                    key: self.key.clone(),
                    declared,
                    actual,
                })
            }
            _ => Ok(()),
        }
    }

    /// Emit the key row, then one value row per value, in order.
    pub fn write_to<W: Write>(&self, writer: &mut SheetWriter<W>) -> Result<()> {
        writer.write_row([self.marker.render().as_str(), self.key.as_str()])?;
        for value in &self.values {
            writer.write_row([Self::VALUE_ROW_MARKER, value.as_str()])?;
        }
        Ok(())
    }
}
