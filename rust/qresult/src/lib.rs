//! # qresult: row decoding of batched, tagged-cell query results
//!
//! A query engine streams its results as a sequence of `CellsBatch` messages.
//! Each batch carries a row-major list of cell type tags and one value array
//! per cell type (integers, floats, delimiter-joined strings, blobs). Rows may
//! straddle batch boundaries, and the final batch of a result is flagged as
//! terminal.
//!
//! ## Module Organization
//!
//! * [`format`] - Wire message definitions (`CellsBatch`, `QueryResult`)
//! * [`decode`] - Lazy row decoding across chained batches
//! * [`arrow`] - Export of a complete result into an Arrow `RecordBatch`
//! * [`common`] - Error type and helpers shared by all crates
//!
//! ## Getting Started
//!
//! ```no_run
//! use qresult::decode::query::decode_query_result;
//!
//! # fn run(bytes: &[u8]) -> qresult::common::Result<()> {
//! for row in decode_query_result(bytes)? {
//!     let row = row?;
//!     println!("{row}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Decoding errors surface at the cell that causes them; rows yielded before
//! an error are complete.

pub use qresult_arrow as arrow;
pub use qresult_common as common;
pub use qresult_decode as decode;
pub use qresult_format as format;
