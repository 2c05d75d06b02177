//! Cross-batch read position over a sequence of `CellsBatch` messages.

use std::borrow::Borrow;

use qresult_common::{Result, error::Error};
use qresult_format::CellsBatch;

use crate::string_cells::StringCellSplitter;

/// Owns the batch being decoded and the read positions within it.
///
/// Batches are pulled from the supplied iterator strictly on demand: the first
/// one on the first access, every following one through [`advance_batch`].
/// The cursor never looks ahead, so only the current batch is held.
///
/// Every typed read checks the remaining length of its array first and returns
/// `None` instead of reading past the end.
///
/// [`advance_batch`]: BatchCursor::advance_batch
pub struct BatchCursor<I>
where
    I: Iterator,
    I::Item: Borrow<CellsBatch>,
{
    batches: I,
    current: Option<I::Item>,
    started: bool,
    batch_index: usize,
    cell_index: usize,
    varint_index: usize,
    float64_index: usize,
    blob_index: usize,
    strings: StringCellSplitter,
}

impl<I> BatchCursor<I>
where
    I: Iterator,
    I::Item: Borrow<CellsBatch>,
{
    pub fn new(batches: impl IntoIterator<IntoIter = I>, string_delimiter: u8) -> Self {
        BatchCursor {
            batches: batches.into_iter(),
            current: None,
            started: false,
            batch_index: 0,
            cell_index: 0,
            varint_index: 0,
            float64_index: 0,
            blob_index: 0,
            strings: StringCellSplitter::new(string_delimiter),
        }
    }

    /// Returns the batch currently being consumed.
    ///
    /// # Errors
    /// Returns `ErrorKind::TruncatedSequence` if the sequence holds no batches.
    pub fn current_batch(&mut self) -> Result<&CellsBatch> {
        if !self.started {
            self.started = true;
            self.current = self.batches.next();
            if let Some(batch) = self.batch() {
                log_batch_entered(0, batch);
            }
        }
        self.batch().ok_or_else(|| Error::truncated_sequence(0))
    }

    /// Moves to the next batch of the sequence and rewinds every read position.
    ///
    /// # Errors
    /// Returns `ErrorKind::TruncatedSequence` if there is no next batch.
    pub fn advance_batch(&mut self) -> Result<()> {
        self.current_batch()?;
        let next = self
            .batches
            .next()
            .ok_or_else(|| Error::truncated_sequence(self.batch_index + 1))?;
        self.batch_index += 1;
        self.cell_index = 0;
        self.varint_index = 0;
        self.float64_index = 0;
        self.blob_index = 0;
        self.strings.reset();
        self.current = Some(next);
        if let Some(batch) = self.batch() {
            log_batch_entered(self.batch_index, batch);
        }
        Ok(())
    }

    /// Index of the current batch within the sequence.
    #[inline]
    pub fn batch_index(&self) -> usize {
        self.batch_index
    }

    /// Index, within the current batch, of the cell that `next_tag` returns next.
    #[inline]
    pub fn cell_index(&self) -> usize {
        self.cell_index
    }

    /// Reads the next raw type tag of the current batch.
    ///
    /// Returns `None` once the batch's cells are exhausted, or before the first
    /// batch has been pulled.
    pub fn next_tag(&mut self) -> Option<i32> {
        let tag = self.batch()?.tag_at(self.cell_index)?;
        self.cell_index += 1;
        Some(tag)
    }

    pub fn read_varint(&mut self) -> Option<i64> {
        let value = *self.batch()?.varint_cells.get(self.varint_index)?;
        self.varint_index += 1;
        Some(value)
    }

    pub fn read_float64(&mut self) -> Option<f64> {
        let value = *self.batch()?.float64_cells.get(self.float64_index)?;
        self.float64_index += 1;
        Some(value)
    }

    pub fn read_string(&mut self) -> Option<&[u8]> {
        let batch = <I::Item as Borrow<CellsBatch>>::borrow(self.current.as_ref()?);
        self.strings.next_entry(&batch.string_cells)
    }

    pub fn read_blob(&mut self) -> Option<&[u8]> {
        let batch = <I::Item as Borrow<CellsBatch>>::borrow(self.current.as_ref()?);
        let value = batch.blob_cells.get(self.blob_index)?;
        self.blob_index += 1;
        Some(value)
    }

    /// Sets the byte separating entries of `string_cells`.
    pub fn set_string_delimiter(&mut self, delimiter: u8) {
        self.strings.set_delimiter(delimiter);
    }

    fn batch(&self) -> Option<&CellsBatch> {
        self.current
            .as_ref()
            .map(<I::Item as Borrow<CellsBatch>>::borrow)
    }
}

fn log_batch_entered(index: usize, batch: &CellsBatch) {
    log::debug!(
        "entered batch {index}: {} cells, last: {}",
        batch.cell_count(),
        batch.is_last_batch
    );
}
