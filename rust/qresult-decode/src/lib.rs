//! Row decoding of tagged-cell query result batches.
//!
//! A query result arrives as a sequence of [`CellsBatch`](qresult_format::CellsBatch)
//! messages. Each batch stores a flat, row-major list of cell type tags and one
//! value array per cell type. [`RowDecoder`] walks the tags column by column,
//! pulls each value from the matching array, chains batches until the terminal
//! one, and yields one [`Row`] at a time.
//!
//! Structural problems are reported at the exact cell where they occur; nothing
//! is validated ahead of time.

pub mod cursor;
pub mod decoder;
pub mod options;
pub mod query;
pub mod row;
pub mod schema;
pub mod string_cells;
pub mod value;

pub use decoder::RowDecoder;
pub use options::{DecodeOptions, Utf8Policy};
pub use row::Row;
pub use schema::ColumnSchema;
pub use value::CellValue;

#[cfg(test)]
mod tests;
