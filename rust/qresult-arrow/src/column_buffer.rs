//! Per-column accumulation of decoded values and their conversion into
//! Arrow arrays.

use std::sync::Arc;

use arrow_array::{ArrayRef, BinaryArray, Float64Array, Int64Array, NullArray, StringArray};
use arrow_schema::{DataType, Field};
use qresult_decode::CellValue;

/// Arrow-facing type of a column, refined as values are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// No value seen yet, or only nulls.
    Null,
    Int,
    /// Floats, possibly mixed with integers.
    Float,
    String,
    Bytes,
    /// Incompatible value types; exported as their display form.
    Mixed,
}

impl ColumnKind {
    /// Combines the current column kind with the kind of one more value.
    pub fn merge(self, value: &CellValue) -> ColumnKind {
        let other = match value {
            CellValue::Null => return self,
            CellValue::Int(_) => ColumnKind::Int,
            CellValue::Float(_) => ColumnKind::Float,
            CellValue::String(_) => ColumnKind::String,
            CellValue::Bytes(_) => ColumnKind::Bytes,
        };
        match (self, other) {
            (ColumnKind::Null, kind) => kind,
            (a, b) if a == b => a,
            (ColumnKind::Int, ColumnKind::Float) | (ColumnKind::Float, ColumnKind::Int) => {
                ColumnKind::Float
            }
            _ => ColumnKind::Mixed,
        }
    }

    pub fn data_type(self) -> DataType {
        match self {
            ColumnKind::Null => DataType::Null,
            ColumnKind::Int => DataType::Int64,
            ColumnKind::Float => DataType::Float64,
            ColumnKind::String | ColumnKind::Mixed => DataType::Utf8,
            ColumnKind::Bytes => DataType::Binary,
        }
    }
}

/// Values of one column, buffered until the whole result has been decoded.
#[derive(Debug, Clone)]
pub struct ColumnBuffer {
    name: String,
    kind: ColumnKind,
    values: Vec<CellValue>,
}

impl ColumnBuffer {
    pub fn new(name: impl Into<String>) -> ColumnBuffer {
        ColumnBuffer {
            name: name.into(),
            kind: ColumnKind::Null,
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, value: CellValue) {
        self.kind = self.kind.merge(&value);
        self.values.push(value);
    }

    #[inline]
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The nullable Arrow field describing this column.
    pub fn field(&self) -> Field {
        Field::new(&self.name, self.kind.data_type(), true)
    }

    /// Builds the Arrow array for the buffered values.
    ///
    /// Nulls become Arrow nulls regardless of the column type.
    pub fn finish(self) -> ArrayRef {
        let values = self.values;
        match self.kind {
            ColumnKind::Null => Arc::new(NullArray::new(values.len())),
            ColumnKind::Int => Arc::new(
                values
                    .iter()
                    .map(CellValue::as_i64)
                    .collect::<Int64Array>(),
            ),
            ColumnKind::Float => Arc::new(
                values
                    .iter()
                    .map(|v| match v {
                        CellValue::Int(i) => Some(*i as f64),
                        v => v.as_f64(),
                    })
                    .collect::<Float64Array>(),
            ),
            ColumnKind::String => Arc::new(
                values
                    .iter()
                    .map(CellValue::as_str)
                    .collect::<StringArray>(),
            ),
            ColumnKind::Bytes => Arc::new(
                values
                    .iter()
                    .map(CellValue::as_bytes)
                    .collect::<BinaryArray>(),
            ),
            ColumnKind::Mixed => Arc::new(
                values
                    .iter()
                    .map(|v| (!v.is_null()).then(|| v.to_string()))
                    .collect::<StringArray>(),
            ),
        }
    }
}
