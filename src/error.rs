use thiserror::Error;

/// Errors raised while converting between JSON documents and sheets.
///
/// All of these are fatal to the current conversion run: they propagate to
/// the entry point and abort it. Running out of input between records is
/// not an error (the reader signals it with `Ok(None)`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// A key row must have exactly two cells: the type marker and the key.
    #[error("invalid key row (expected 2 cells): {row:?}")]
    BadKeyRow { row: Vec<String> },

    /// A value row must start with an empty cell and reach the selected
    /// value column.
    #[error("invalid value row: {row:?}")]
    BadValueRow { row: Vec<String> },

    /// Input ended while value rows for an already-started record were
    /// still owed.
    #[error("record `{key}`: expected {expected} value rows, but input ended after {actual}")]
    TruncatedRecord {
        key: String,
        expected: usize,
        actual: usize,
    },

    /// A scalar record must carry exactly one value.
    #[error("record `{key}`: scalar record holds {actual} values instead of 1")]
    ScalarArityMismatch { key: String, actual: usize },

    /// The length declared by an array marker disagrees with the number of
    /// values actually held.
    #[error("record `{key}`: declared array length {declared} does not match {actual} values")]
    ArrayLengthMismatch {
        key: String,
        declared: usize,
        actual: usize,
    },

    /// The type marker is neither `-` nor a non-negative integer.
    #[error("record `{key}`: invalid type marker `{marker}`")]
    InvalidTypeMarker { key: String, marker: String },

    /// A leaf in the JSON document is neither a string nor an array of
    /// strings, so no record can represent it.
    #[error("unsupported value {found} at `{path}`: leaves must be strings or arrays of strings")]
    UnexpectedValue { path: String, found: String },
}
