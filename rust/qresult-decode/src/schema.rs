//! Ordered column-name schema of a query result.

use std::sync::Arc;

use ahash::AHashMap;
use itertools::Itertools;
use qresult_common::{Result, error::Error};

/// Ordered list of unique column names.
///
/// The schema defines the fields of every decoded [`Row`](crate::Row) and the
/// modulus that maps flat cell positions to columns. Cloning is cheap: rows of
/// one decode pass share a single instance.
#[derive(Debug, Clone)]
pub struct ColumnSchema(Arc<SchemaInner>);

#[derive(Debug)]
struct SchemaInner {
    names: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl ColumnSchema {
    /// Creates a schema from column names.
    ///
    /// # Errors
    /// Returns `ErrorKind::InvalidArgument` if a name occurs more than once.
    pub fn try_new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<ColumnSchema> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let Some(dup) = names.iter().duplicates().next() {
            return Err(Error::invalid_arg(
                "column_names",
                format!("duplicate column name '{dup}'"),
            ));
        }
        let positions = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Ok(ColumnSchema(Arc::new(SchemaInner { names, positions })))
    }

    /// A schema with no columns.
    pub fn empty() -> ColumnSchema {
        ColumnSchema(Arc::new(SchemaInner {
            names: Vec::new(),
            positions: AHashMap::new(),
        }))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.names.is_empty()
    }

    /// Name of the column at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn name(&self, index: usize) -> &str {
        &self.0.names[index]
    }

    pub fn names(&self) -> &[String] {
        &self.0.names
    }

    /// Position of the column called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.positions.get(name).copied()
    }
}

impl PartialEq for ColumnSchema {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.names == other.0.names
    }
}

impl Eq for ColumnSchema {}
