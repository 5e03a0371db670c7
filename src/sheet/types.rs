use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered key segments identifying a nested location in a JSON document,
/// e.g. `["Cards", "Strike", "NAME"]`.
///
/// The sheet format renders a path by joining its segments with `::`.
/// Parsing is the exact inverse as long as no segment contains `::` itself;
/// that limitation comes with the format and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePath(Vec<String>);

impl NamePath {
    pub const SEPARATOR: &'static str = "::";

    /// The empty path, the starting point for flattening a document root.
    pub fn root() -> Self {
        NamePath(Vec::new())
    }

    /// Split a joined key back into its segments. Any string parses;
    /// malformed input (leading/trailing `::`) yields empty segments.
    pub fn parse(key: &str) -> Self {
        NamePath(key.split(Self::SEPARATOR).map(str::to_string).collect())
    }

    /// Join the segments into the sheet key form.
    pub fn render(&self) -> String {
        self.0.join(Self::SEPARATOR)
    }

    /// Return a new path with `segment` appended; the receiver is unchanged.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        NamePath(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for NamePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// The value of a record: a single string, or an ordered run of strings.
///
/// This is the complete set of leaf shapes the sheet format can carry.
/// A one-element array is distinct from a scalar and stays an array
/// through every conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Scalar(String),
    Array(Vec<String>),
}

impl RecordValue {
    pub fn into_json(self) -> serde_json::Value {
        match self {
            RecordValue::Scalar(s) => serde_json::Value::String(s),
            RecordValue::Array(items) => serde_json::Value::Array(
                items.into_iter().map(serde_json::Value::String).collect(),
            ),
        }
    }
}

/// One flattened leaf of a JSON document: where it lives and what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub path: NamePath,
    pub value: RecordValue,
}

impl Record {
    pub fn new(path: NamePath, value: RecordValue) -> Self {
        Record { path, value }
    }

    pub fn scalar(path: NamePath, value: impl Into<String>) -> Self {
        Record::new(path, RecordValue::Scalar(value.into()))
    }

    pub fn array(path: NamePath, values: Vec<String>) -> Self {
        Record::new(path, RecordValue::Array(values))
    }
}

/// Configuration for reading a sheet back into JSON.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Which value column is authoritative when collaborators' edits occupy
    /// several columns of the same rows. 1-based; column 1 is the first
    /// cell after the row marker.
    pub values_column: usize,

    /// Rows discarded unconditionally before record parsing begins.
    pub skip_rows: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            values_column: 1,
            skip_rows: 0,
        }
    }
}
