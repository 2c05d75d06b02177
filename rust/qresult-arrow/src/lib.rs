//! Apache Arrow export of decoded query results.
//!
//! This crate includes:
//! - Fully-buffering conversion of a row sequence into a single Arrow
//!   `RecordBatch`, one column per schema entry (`table`)
//! - Per-column Arrow type derivation from the decoded values (`column_buffer`)
//! - qresult/Arrow error conversion (`to_arrow_error`)

pub mod column_buffer;
pub mod table;
pub mod to_arrow_error;

pub use table::{IntoRecordBatch, TableBuilder, query_result_to_record_batch};
