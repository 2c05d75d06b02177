//! Additional methods for `QueryResult`.

use qresult_common::{Result, error::Error};

use crate::defs::proto::QueryResult;

impl QueryResult {
    /// Parses an encoded `QueryResult` message.
    pub fn from_bytes(bytes: &[u8]) -> Result<QueryResult> {
        Ok(<QueryResult as prost::Message>::decode(bytes)?)
    }

    /// Returns the error reported by the engine, if the query failed.
    pub fn error_message(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    /// Fails with `ErrorKind::Query` when the engine reported an error.
    pub fn check_error(&self) -> Result<()> {
        match self.error_message() {
            Some(message) => Err(Error::query(message)),
            None => Ok(()),
        }
    }

    /// Combines the parts of a streamed query response into a single result.
    ///
    /// Batches are appended in arrival order. Column names are taken from the
    /// first part that carries them. For the error and the statement fields,
    /// the last part that sets a value wins.
    pub fn merge_streamed(parts: impl IntoIterator<Item = QueryResult>) -> QueryResult {
        let mut merged = QueryResult::default();
        for part in parts {
            if merged.column_names.is_empty() {
                merged.column_names = part.column_names;
            }
            merged.batch.extend(part.batch);
            if !part.error.is_empty() {
                merged.error = part.error;
            }
            if part.statement_count != 0 {
                merged.statement_count = part.statement_count;
            }
            if part.statement_with_output_count != 0 {
                merged.statement_with_output_count = part.statement_with_output_count;
            }
            if !part.last_statement_sql.is_empty() {
                merged.last_statement_sql = part.last_statement_sql;
            }
        }
        merged
    }
}
