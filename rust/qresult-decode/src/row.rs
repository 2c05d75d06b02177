//! Decoded rows.

use std::fmt;

use qresult_common::{Result, verify_arg};

use crate::{schema::ColumnSchema, value::CellValue};

/// One decoded record: a value per schema column, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    schema: ColumnSchema,
    values: Vec<CellValue>,
}

impl Row {
    /// Creates a row from values listed in schema order.
    ///
    /// # Errors
    /// Returns `ErrorKind::InvalidArgument` if the number of values differs
    /// from the number of columns.
    pub fn try_new(schema: ColumnSchema, values: Vec<CellValue>) -> Result<Row> {
        verify_arg!(values, values.len() == schema.len());
        Ok(Row { schema, values })
    }

    /// Row assembled by the decoder, one value per column.
    pub(crate) fn new(schema: ColumnSchema, values: Vec<CellValue>) -> Row {
        debug_assert_eq!(schema.len(), values.len());
        Row { schema, values }
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Value of the column called `name`, or `None` if the schema has no such column.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.schema.index_of(name).map(|i| &self.values[i])
    }

    pub fn get_at(&self, index: usize) -> Option<&CellValue> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn into_values(self) -> Vec<CellValue> {
        self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(column name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.schema
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}
