//! The JSON side of the conversion: flattening a nested document into
//! records, and rebuilding a document from them.

pub mod build;
pub mod flatten;

pub use build::build_document;
pub use flatten::flatten_document;
