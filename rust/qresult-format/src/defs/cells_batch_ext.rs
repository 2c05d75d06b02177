//! Additional methods for `CellsBatch` and `CellType`.

use crate::defs::{CellType, proto::CellsBatch};

impl CellsBatch {
    /// Returns the number of cells (type tags) in this batch.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the raw type tag of the cell at `index`, or `None` past the end.
    ///
    /// The tag is returned as stored on the wire, so values outside of the
    /// known `CellType` range are preserved for the caller to report.
    #[inline]
    pub fn tag_at(&self, index: usize) -> Option<i32> {
        self.cells.get(index).copied()
    }
}

impl CellType {
    /// Short, human-readable name of the value kind a cell of this type holds.
    pub fn value_kind(&self) -> &'static str {
        match self {
            CellType::Invalid => "invalid",
            CellType::Null => "null",
            CellType::Varint => "varint",
            CellType::Float64 => "float64",
            CellType::String => "string",
            CellType::Blob => "blob",
        }
    }
}
