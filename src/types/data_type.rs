//! # Column Data Types
//!
//! This module provides the `ColumnType` enum, the single discriminant used by
//! schema definitions, stored fields and the snapshot format.
//!
//! ## Type Table
//!
//! | Type | Rust storage | Snapshot width | Ordering ops |
//! |------|--------------|----------------|--------------|
//! | Int32 | `i32` | 4 bytes | yes |
//! | MacAddress | `[u8; 6]` | 6 bytes | no |
//! | String | `Box<str>` (≤255 bytes) | 1 + len | no |
//! | Epoch | `u32` (unsigned) | 4 bytes | yes |
//! | Bool | `bool` | 1 byte | no |
//! | Float32 | `f32` | 4 bytes | yes |
//!
//! ## Storage Encoding
//!
//! The `#[repr(u8)]` discriminant is written verbatim as the column type byte
//! in snapshots, so the numeric values below are part of the file format and
//! must never be reordered.

/// Data type of a column.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int32 = 0,
    MacAddress = 1,
    String = 2,
    Epoch = 3,
    Bool = 4,
    Float32 = 5,
}

impl ColumnType {
    /// Returns the fixed snapshot width for this type, or None for String.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            ColumnType::Int32 | ColumnType::Epoch | ColumnType::Float32 => Some(4),
            ColumnType::MacAddress => Some(6),
            ColumnType::Bool => Some(1),
            ColumnType::String => None,
        }
    }

    /// Returns true for the types that support arithmetic and min/max.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::Int32 | ColumnType::Epoch | ColumnType::Float32
        )
    }

    /// Returns true if `>`, `<`, `>=`, `<=` are defined for this type.
    pub fn is_ordered(&self) -> bool {
        self.is_numeric()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Int32 => "INT32",
            ColumnType::MacAddress => "MAC",
            ColumnType::String => "STRING",
            ColumnType::Epoch => "EPOCH",
            ColumnType::Bool => "BOOL",
            ColumnType::Float32 => "FLOAT32",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for ColumnType {
    type Error = eyre::Report;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColumnType::Int32),
            1 => Ok(ColumnType::MacAddress),
            2 => Ok(ColumnType::String),
            3 => Ok(ColumnType::Epoch),
            4 => Ok(ColumnType::Bool),
            5 => Ok(ColumnType::Float32),
            _ => eyre::bail!("invalid ColumnType discriminant: {}", value),
        }
    }
}
