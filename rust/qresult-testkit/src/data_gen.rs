//! Data generation utilities for testing.
//!
//! Generates synthetic, well-formed batches from a seed and re-cuts a single
//! batch into a chained sequence of batches carrying the same cells.

use qresult_format::{CellType, CellsBatch, defs::STRING_CELL_DELIMITER};

use crate::BatchBuilder;

/// Generates a terminal batch holding `row_count * column_count` random cells.
///
/// Every cell type except `Invalid` is produced, including empty strings,
/// which are stored in the joined layout like any other. The same seed always
/// yields the same batch.
pub fn random_batch(seed: u64, column_count: usize, row_count: usize) -> CellsBatch {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut builder = BatchBuilder::new();
    for _ in 0..column_count * row_count {
        builder = match rng.u8(0..5) {
            0 => builder.null(),
            1 => builder.varint(rng.i64(..)),
            2 => builder.float64(rng.f64() * 1e6 - 5e5),
            3 => {
                let len = rng.usize(0..8);
                let value: String = std::iter::repeat_with(|| rng.alphanumeric())
                    .take(len)
                    .collect();
                builder.string(&value)
            }
            _ => {
                let len = rng.usize(0..6);
                let value: Vec<u8> = std::iter::repeat_with(|| rng.u8(..)).take(len).collect();
                builder.blob(&value)
            }
        };
    }
    builder.last().build()
}

/// Cuts `batch` into consecutive batches at the given cell indices.
///
/// `boundaries` must be ascending and within `0..=batch.cells.len()`; empty
/// pieces are allowed. Each value follows its cell into the piece the cell
/// lands in. Only the final piece inherits `is_last_batch` from `batch`.
pub fn split_at_cells(batch: &CellsBatch, boundaries: &[usize]) -> Vec<CellsBatch> {
    let strings = string_segments(&batch.string_cells);
    let (mut varint, mut float, mut string, mut blob) = (0, 0, 0, 0);

    let mut pieces = Vec::with_capacity(boundaries.len() + 1);
    let mut current = CellsBatch::default();
    let mut piece_strings: Vec<&[u8]> = Vec::new();
    let mut boundaries = boundaries.iter().copied().peekable();
    for (index, &tag) in batch.cells.iter().enumerate() {
        while boundaries.next_if(|&b| b <= index).is_some() {
            pieces.push(finish_piece(&mut current, &mut piece_strings));
        }
        current.cells.push(tag);
        match CellType::try_from(tag) {
            Ok(CellType::Varint) => {
                if let Some(&value) = batch.varint_cells.get(varint) {
                    current.varint_cells.push(value);
                    varint += 1;
                }
            }
            Ok(CellType::Float64) => {
                if let Some(&value) = batch.float64_cells.get(float) {
                    current.float64_cells.push(value);
                    float += 1;
                }
            }
            Ok(CellType::String) => {
                if let Some(&value) = strings.get(string) {
                    piece_strings.push(value);
                    string += 1;
                }
            }
            Ok(CellType::Blob) => {
                if let Some(value) = batch.blob_cells.get(blob) {
                    current.blob_cells.push(value.clone());
                    blob += 1;
                }
            }
            Ok(CellType::Null) | Ok(CellType::Invalid) | Err(_) => {}
        }
    }
    for _ in boundaries {
        pieces.push(finish_piece(&mut current, &mut piece_strings));
    }
    let mut last = finish_piece(&mut current, &mut piece_strings);
    last.is_last_batch = batch.is_last_batch;
    pieces.push(last);
    pieces
}

/// Takes the piece being assembled, joining the strings that landed in it.
fn finish_piece(current: &mut CellsBatch, strings: &mut Vec<&[u8]>) -> CellsBatch {
    let mut piece = std::mem::take(current);
    piece.string_cells = strings.join(&STRING_CELL_DELIMITER);
    strings.clear();
    piece
}

/// Cuts `batch` into pieces of at most `cells_per_batch` cells each.
pub fn split_evenly(batch: &CellsBatch, cells_per_batch: usize) -> Vec<CellsBatch> {
    assert_ne!(cells_per_batch, 0);
    let boundaries: Vec<usize> = (cells_per_batch..batch.cells.len())
        .step_by(cells_per_batch)
        .collect();
    split_at_cells(batch, &boundaries)
}

/// Picks `count` random, ascending cut points within `0..=cell_count`.
pub fn random_boundaries(seed: u64, cell_count: usize, count: usize) -> Vec<usize> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut boundaries: Vec<usize> = (0..count).map(|_| rng.usize(0..=cell_count)).collect();
    boundaries.sort_unstable();
    boundaries
}

fn string_segments(blob: &[u8]) -> Vec<&[u8]> {
    blob.split(|&b| b == STRING_CELL_DELIMITER).collect()
}
