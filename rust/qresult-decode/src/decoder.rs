//! Row-by-row decoding of a batch sequence.

use std::{borrow::Borrow, iter::FusedIterator};

use qresult_common::{Result, error::Error, try_or_ret_some_err};
use qresult_format::{CellType, CellsBatch};

use crate::{
    cursor::BatchCursor, options::DecodeOptions, row::Row, schema::ColumnSchema,
    string_cells::decode_utf8, value::CellValue,
};

/// Lazily decodes rows from a sequence of [`CellsBatch`] messages.
///
/// Cell `k` of the tag stream (counted across batches) belongs to column
/// `k % column_count`; one row is produced per full cycle through the columns.
/// Batches are chained until the first one marked `is_last_batch`. Anything
/// supplied after the terminal batch is never pulled.
///
/// Errors surface at the cell that causes them, so every row yielded before an
/// error is complete and correct. After the first error (or the end of the
/// data) the iterator only returns `None`.
///
/// Passing borrowed batches (`&[CellsBatch]`, `&Vec<CellsBatch>`) allows any
/// number of independent passes over the same result.
///
/// A schema with no columns yields no rows. The batch chain is still walked to
/// its terminal batch, so a missing terminal batch is reported, and any cell
/// found fails with `TruncatedRow`, since no row can hold it.
pub struct RowDecoder<I>
where
    I: Iterator,
    I::Item: Borrow<CellsBatch>,
{
    schema: ColumnSchema,
    cursor: BatchCursor<I>,
    options: DecodeOptions,
    rows_decoded: u64,
    finished: bool,
}

/// Position of a tag read from the stream.
struct TaggedCell {
    tag: i32,
    batch_index: usize,
    cell_index: usize,
}

impl<I> RowDecoder<I>
where
    I: Iterator,
    I::Item: Borrow<CellsBatch>,
{
    /// Creates a decoder over `batches` with default [`DecodeOptions`].
    ///
    /// No batch is touched until the first row is requested.
    pub fn new(schema: ColumnSchema, batches: impl IntoIterator<IntoIter = I>) -> Self {
        let options = DecodeOptions::default();
        RowDecoder {
            cursor: BatchCursor::new(batches, options.string_delimiter()),
            schema,
            options,
            rows_decoded: 0,
            finished: false,
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.cursor.set_string_delimiter(options.string_delimiter());
        Self { options, ..self }
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Number of rows yielded so far.
    pub fn rows_decoded(&self) -> u64 {
        self.rows_decoded
    }

    /// Decodes all remaining rows.
    ///
    /// # Errors
    /// Fails with the first decoding error; the rows decoded before it are dropped.
    pub fn collect_rows(self) -> Result<Vec<Row>> {
        self.collect()
    }

    fn decode_row(&mut self) -> Result<Option<Row>> {
        let column_count = self.schema.len();
        if column_count == 0 {
            if let Some(cell) = self.next_cell()? {
                return Err(Error::truncated_row(self.rows_decoded, "", cell.batch_index));
            }
            return Ok(None);
        }

        let mut values = Vec::with_capacity(column_count);
        for column in 0..column_count {
            let Some(cell) = self.next_cell()? else {
                if column == 0 {
                    return Ok(None);
                }
                return Err(Error::truncated_row(
                    self.rows_decoded,
                    self.schema.name(column),
                    self.cursor.batch_index(),
                ));
            };
            values.push(self.decode_cell(cell, column)?);
        }
        Ok(Some(Row::new(self.schema.clone(), values)))
    }

    /// Reads the next tag, crossing into following batches as needed.
    ///
    /// Returns `None` once the terminal batch is exhausted.
    fn next_cell(&mut self) -> Result<Option<TaggedCell>> {
        loop {
            let is_last_batch = self.cursor.current_batch()?.is_last_batch;
            let cell_index = self.cursor.cell_index();
            if let Some(tag) = self.cursor.next_tag() {
                return Ok(Some(TaggedCell {
                    tag,
                    batch_index: self.cursor.batch_index(),
                    cell_index,
                }));
            }
            if is_last_batch {
                return Ok(None);
            }
            self.cursor.advance_batch()?;
        }
    }

    fn decode_cell(&mut self, cell: TaggedCell, column: usize) -> Result<CellValue> {
        let column_name = self.schema.name(column);
        let unrecognized = || {
            Error::unrecognized_cell_type(
                cell.tag,
                column_name,
                cell.batch_index,
                cell.cell_index,
            )
        };
        let cell_type = CellType::try_from(cell.tag).map_err(|_| unrecognized())?;

        let cursor = &mut self.cursor;
        let value = match cell_type {
            CellType::Invalid => return Err(unrecognized()),
            CellType::Null => Some(CellValue::Null),
            CellType::Varint => cursor.read_varint().map(CellValue::Int),
            CellType::Float64 => cursor.read_float64().map(CellValue::Float),
            CellType::String => match cursor.read_string() {
                Some(bytes) => Some(CellValue::String(
                    decode_utf8(bytes, self.options.utf8_policy())?,
                )),
                None => None,
            },
            CellType::Blob => cursor.read_blob().map(|b| CellValue::Bytes(b.to_vec())),
        };
        value.ok_or_else(|| {
            Error::out_of_bounds_read(
                cell_type.value_kind(),
                column_name,
                cell.batch_index,
                cell.cell_index,
            )
        })
    }
}

impl<I> Iterator for RowDecoder<I>
where
    I: Iterator,
    I::Item: Borrow<CellsBatch>,
{
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        // Stays set unless a complete row comes back.
        self.finished = true;
        let Some(row) = try_or_ret_some_err!(self.decode_row()) else {
            log::debug!(
                "decoded {} rows from {} batches",
                self.rows_decoded,
                self.cursor.batch_index() + 1
            );
            return None;
        };
        self.finished = false;
        self.rows_decoded += 1;
        log::trace!("row {}: {row}", self.rows_decoded - 1);
        Some(Ok(row))
    }
}

impl<I> FusedIterator for RowDecoder<I>
where
    I: Iterator,
    I::Item: Borrow<CellsBatch>,
{
}
