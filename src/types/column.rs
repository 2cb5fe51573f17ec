//! # Column Definitions
//!
//! A column pairs a name with a [`ColumnType`]. Names are limited to
//! `MAX_COLUMN_NAME_LEN` bytes so they fit the fixed 32-byte, NUL-padded name
//! field of the snapshot format.
//!
//! ## Usage
//!
//! ```ignore
//! use emberdb::types::{Column, ColumnType};
//!
//! let columns = [
//!     Column::new("id", ColumnType::Int32),
//!     Column::new("mac", ColumnType::MacAddress),
//!     Column::new("last_seen", ColumnType::Epoch),
//! ];
//! ```

use super::ColumnType;
use crate::config::MAX_COLUMN_NAME_LEN;
use crate::error::StoreError;
use eyre::{bail, Result};

/// Column definition: name plus type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
}

impl Column {
    /// Creates a new column definition with the given name and type.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Checks that the name is non-empty, short enough for the snapshot name
    /// field, and free of NUL bytes (which would truncate it on disk).
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty()
            || self.name.len() > MAX_COLUMN_NAME_LEN
            || self.name.as_bytes().contains(&0)
        {
            bail!(StoreError::InvalidValue);
        }
        Ok(())
    }
}
