//! Conversion of a complete row sequence into one Arrow `RecordBatch`.

use std::{borrow::Borrow, sync::Arc};

use arrow_array::{RecordBatch, RecordBatchOptions};
use arrow_schema::{ArrowError, Schema};
use qresult_common::{Result, error::Error, verify_arg};
use qresult_decode::{ColumnSchema, Row, RowDecoder};
use qresult_format::{CellsBatch, QueryResult};

use crate::{column_buffer::ColumnBuffer, to_arrow_error::ToArrowResult};

/// Accumulates rows column by column and assembles them into a `RecordBatch`.
///
/// Column order follows the schema. Every field is nullable, and each column's
/// Arrow type is derived from the values it received (see
/// [`ColumnKind`](crate::column_buffer::ColumnKind)).
pub struct TableBuilder {
    schema: ColumnSchema,
    columns: Vec<ColumnBuffer>,
    row_count: usize,
}

impl TableBuilder {
    pub fn new(schema: ColumnSchema) -> TableBuilder {
        let columns = schema.names().iter().map(ColumnBuffer::new).collect();
        TableBuilder {
            schema,
            columns,
            row_count: 0,
        }
    }

    /// Appends one row.
    ///
    /// # Errors
    /// Returns `ErrorKind::InvalidArgument` if the row was decoded against a
    /// different schema.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        verify_arg!(row, row.schema() == &self.schema);
        for (column, value) in self.columns.iter_mut().zip(row.into_values()) {
            column.push(value);
        }
        self.row_count += 1;
        Ok(())
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Builds the record batch. A schema without columns produces an empty
    /// batch with no fields.
    pub fn finish(self) -> Result<RecordBatch> {
        let fields = self.columns.iter().map(ColumnBuffer::field).collect::<Vec<_>>();
        let arrays = self
            .columns
            .into_iter()
            .map(ColumnBuffer::finish)
            .collect::<Vec<_>>();
        let schema = Arc::new(Schema::new(fields));
        let options = RecordBatchOptions::new().with_row_count(Some(self.row_count));
        let batch = RecordBatch::try_new_with_options(schema, arrays, &options)
            .map_err(|e| Error::arrow("record batch", e))?;
        log::debug!(
            "exported {} rows x {} columns to arrow",
            batch.num_rows(),
            batch.num_columns()
        );
        Ok(batch)
    }
}

/// Drains a row source into a single Arrow `RecordBatch`.
pub trait IntoRecordBatch {
    /// Decodes every remaining row and converts the result into a record batch.
    ///
    /// # Errors
    /// The conversion is all-or-nothing: the first decoding error is returned
    /// unchanged and no partial batch is produced.
    fn into_record_batch(self) -> Result<RecordBatch>;
}

impl<I> IntoRecordBatch for RowDecoder<I>
where
    I: Iterator,
    I::Item: Borrow<CellsBatch>,
{
    fn into_record_batch(self) -> Result<RecordBatch> {
        let mut builder = TableBuilder::new(self.schema().clone());
        for row in self {
            builder.push_row(row?)?;
        }
        builder.finish()
    }
}

/// Converts a complete `QueryResult` into an Arrow `RecordBatch`.
///
/// qresult errors are reported as `ArrowError::ExternalError` wrapping the
/// underlying [`Error`], so callers can downcast to inspect the failure.
pub fn query_result_to_record_batch(
    result: &QueryResult,
) -> std::result::Result<RecordBatch, ArrowError> {
    RowDecoder::from_query_result(result)
        .and_then(IntoRecordBatch::into_record_batch)
        .to_arrow_res()
}
