//! Decoding straight from `QueryResult` envelopes.

use std::{slice, vec};

use qresult_common::Result;
use qresult_format::{CellsBatch, QueryResult};

use crate::{decoder::RowDecoder, schema::ColumnSchema};

impl<'a> RowDecoder<slice::Iter<'a, CellsBatch>> {
    /// Creates a decoder over the batches of `result`, using its column names
    /// as the schema.
    ///
    /// # Errors
    /// Fails with `ErrorKind::Query` if the engine reported an error, and with
    /// `ErrorKind::InvalidArgument` if the column names are not unique.
    pub fn from_query_result(result: &'a QueryResult) -> Result<Self> {
        result.check_error()?;
        let schema = ColumnSchema::try_new(result.column_names.iter().cloned())?;
        Ok(RowDecoder::new(schema, &result.batch))
    }
}

impl RowDecoder<vec::IntoIter<CellsBatch>> {
    /// Like [`RowDecoder::from_query_result`], taking ownership of the result.
    pub fn from_owned_query_result(result: QueryResult) -> Result<Self> {
        result.check_error()?;
        let schema = ColumnSchema::try_new(result.column_names)?;
        Ok(RowDecoder::new(schema, result.batch))
    }
}

/// Parses an encoded `QueryResult` message and returns a decoder over its rows.
///
/// # Errors
/// Fails with `ErrorKind::Decode` if `bytes` is not a valid message, and
/// otherwise as [`RowDecoder::from_owned_query_result`].
pub fn decode_query_result(bytes: &[u8]) -> Result<RowDecoder<vec::IntoIter<CellsBatch>>> {
    RowDecoder::from_owned_query_result(QueryResult::from_bytes(bytes)?)
}
