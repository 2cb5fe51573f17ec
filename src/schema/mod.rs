//! # Table Schema
//!
//! A `Schema` is the ordered list of columns shared by every record. It is
//! built once when the table is created and never changes afterwards; the
//! only way to get a different schema is to drop the table and create a new
//! one.
//!
//! ## Validation
//!
//! | Rule | Error |
//! |------|-------|
//! | at least one column | `InvalidValue` |
//! | at most 255 columns (snapshot stores the count in one byte) | `InvalidValue` |
//! | each name 1..=31 bytes, no NUL | `InvalidValue` |
//!
//! ## Name Resolution
//!
//! Column names are not required to be unique. Lookups resolve to the first
//! column whose name matches, in declaration order.

use crate::config::MAX_COLUMNS;
use crate::error::StoreError;
use crate::types::{Column, ColumnType};
use eyre::{bail, ensure, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Validates `columns` and copies them into a new schema.
    pub fn new(columns: &[Column]) -> Result<Self> {
        ensure!(
            !columns.is_empty() && columns.len() <= MAX_COLUMNS,
            StoreError::InvalidValue
        );
        for column in columns {
            column.validate()?;
        }

        let mut owned = Vec::new();
        if owned.try_reserve_exact(columns.len()).is_err() {
            bail!(StoreError::OutOfMemory);
        }
        owned.extend_from_slice(columns);
        Ok(Self { columns: owned })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Returns the position of the first column named `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Like [`find`](Self::find) but fails with `ColumnNotFound`.
    pub fn resolve(&self, name: &str) -> Result<(usize, ColumnType)> {
        match self.find(name) {
            Some(idx) => Ok((idx, self.columns[idx].column_type())),
            None => bail!(StoreError::ColumnNotFound),
        }
    }

    /// Approximate bytes held by the schema.
    pub fn memory_usage(&self) -> usize {
        self.columns.capacity() * std::mem::size_of::<Column>()
            + self.columns.iter().map(|c| c.name().len()).sum::<usize>()
    }
}
