//! Wire message definitions for tagged-cell query results, along with
//! extension methods used by the decoder.

pub mod defs;

pub use defs::{
    CellType,
    proto::{CellsBatch, QueryResult},
};
