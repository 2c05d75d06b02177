//! Fluent construction of `CellsBatch` fixtures.

use qresult_format::{
    CellType, CellsBatch,
    defs::STRING_CELL_DELIMITER,
};

/// Builds a [`CellsBatch`] cell by cell.
///
/// The cell methods (`varint`, `string`, ...) push a type tag together with its
/// value, which keeps the tag stream and the value arrays consistent. The raw
/// methods (`tags`, `varint_values`, `joined_strings`, ...) touch only one side,
/// for fixtures that need a mismatch between the two.
#[derive(Debug, Default, Clone)]
pub struct BatchBuilder {
    batch: CellsBatch,
    string_count: usize,
}

impl BatchBuilder {
    pub fn new() -> BatchBuilder {
        Default::default()
    }

    pub fn null(mut self) -> Self {
        self.batch.push_cells(CellType::Null);
        self
    }

    pub fn varint(mut self, value: i64) -> Self {
        self.batch.push_cells(CellType::Varint);
        self.batch.varint_cells.push(value);
        self
    }

    pub fn float64(mut self, value: f64) -> Self {
        self.batch.push_cells(CellType::Float64);
        self.batch.float64_cells.push(value);
        self
    }

    /// Appends a string cell. Values are joined by the delimiter, so the blob
    /// never ends with one unless the last value is empty.
    pub fn string(mut self, value: &str) -> Self {
        self.batch.push_cells(CellType::String);
        if self.string_count != 0 {
            self.batch.string_cells.push(STRING_CELL_DELIMITER);
        }
        self.batch.string_cells.extend_from_slice(value.as_bytes());
        self.string_count += 1;
        self
    }

    pub fn blob(mut self, value: &[u8]) -> Self {
        self.batch.push_cells(CellType::Blob);
        self.batch.blob_cells.push(value.to_vec());
        self
    }

    /// Appends a raw type tag with no value, including tags outside of
    /// the known `CellType` range.
    pub fn raw_tag(mut self, tag: i32) -> Self {
        self.batch.cells.push(tag);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = CellType>) -> Self {
        self.batch
            .cells
            .extend(tags.into_iter().map(|tag| tag as i32));
        self
    }

    pub fn varint_values(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.batch.varint_cells.extend(values);
        self
    }

    pub fn float64_values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.batch.float64_cells.extend(values);
        self
    }

    /// Sets `string_cells` to the given strings joined by the delimiter, with no
    /// trailing delimiter.
    pub fn joined_strings(mut self, values: &[&str]) -> Self {
        self.batch.string_cells = values.join("\0").into_bytes();
        self
    }

    pub fn raw_string_cells(mut self, bytes: &[u8]) -> Self {
        self.batch.string_cells = bytes.to_vec();
        self
    }

    /// Marks the batch as the terminal batch of the sequence.
    pub fn last(mut self) -> Self {
        self.batch.is_last_batch = true;
        self
    }

    pub fn build(self) -> CellsBatch {
        self.batch
    }
}
