//! # Stored Field Values
//!
//! `FieldValue` is the owned, type-tagged value held in every record slot.
//! Exactly one variant exists per [`ColumnType`], so a field can never hold a
//! value of the wrong type for its column.
//!
//! ## Memory Layout
//!
//! Every variant except `Text` is an inline scalar. `Text` owns a `Box<str>`
//! sized exactly to the string length: no spare capacity is ever kept, which
//! matters on devices where every heap byte counts.
//!
//! ## Conversion
//!
//! ```ignore
//! // Input literal -> stored field (validated, may allocate)
//! let field = codec::encode(ColumnType::String, &Value::text("hello"))?;
//!
//! // Stored field -> borrowed literal (for re-insertion or comparison)
//! let literal: Value<'_> = field.to_value();
//! ```

use super::{ColumnType, Value};
use std::borrow::Cow;

/// Owned value of one field in one record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int32(i32),
    MacAddress([u8; 6]),
    Text(Box<str>),
    Epoch(u32),
    Bool(bool),
    Float32(f32),
}

impl FieldValue {
    /// Returns the column type this field belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            FieldValue::Int32(_) => ColumnType::Int32,
            FieldValue::MacAddress(_) => ColumnType::MacAddress,
            FieldValue::Text(_) => ColumnType::String,
            FieldValue::Epoch(_) => ColumnType::Epoch,
            FieldValue::Bool(_) => ColumnType::Bool,
            FieldValue::Float32(_) => ColumnType::Float32,
        }
    }

    /// Converts to a borrowed literal.
    pub fn to_value(&self) -> Value<'_> {
        match self {
            FieldValue::Int32(v) => Value::Int32(*v),
            FieldValue::MacAddress(m) => Value::MacAddress(*m),
            FieldValue::Text(s) => Value::Text(Cow::Borrowed(s)),
            FieldValue::Epoch(v) => Value::Epoch(*v),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Float32(f) => Value::Float32(*f),
        }
    }

    /// Number of heap bytes owned by this field beyond its inline size.
    /// Strings are accounted as `len + 1` to match the on-device footprint.
    pub fn heap_size(&self) -> usize {
        match self {
            FieldValue::Text(s) => s.len() + 1,
            _ => 0,
        }
    }

    pub fn as_int32(&self) -> Option<i32> {
        match self {
            FieldValue::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_epoch(&self) -> Option<u32> {
        match self {
            FieldValue::Epoch(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float32(&self) -> Option<f32> {
        match self {
            FieldValue::Float32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mac_address(&self) -> Option<[u8; 6]> {
        match self {
            FieldValue::MacAddress(m) => Some(*m),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Int32(v) => write!(f, "{}", v),
            FieldValue::MacAddress(m) => {
                f.write_str(&crate::parsing::format_mac_address(m))
            }
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Epoch(v) => write!(f, "{}", v),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Float32(v) => write!(f, "{}", v),
        }
    }
}
