//! # Input Value Representation
//!
//! This module provides `Value<'a>`, the borrowed literal callers hand to the
//! store for inserts, updates and where-clauses. Text borrows from the caller
//! via `Cow` so building a predicate never allocates; the store copies into
//! its own [`FieldValue`](super::FieldValue) only when a value is actually
//! kept.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Column type |
//! |---------|-----------|-------------|
//! | Null | - | none (always rejected) |
//! | Int32 | i32 | Int32 |
//! | MacAddress | [u8; 6] | MacAddress |
//! | Text | Cow<str> | String |
//! | Epoch | u32 | Epoch |
//! | Bool | bool | Bool |
//! | Float32 | f32 | Float32 |
//!
//! `Null` exists so that a missing argument is representable and can be
//! rejected with `InvalidValue` instead of being silently coerced.

use super::ColumnType;
use std::borrow::Cow;

/// Literal supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Null,
    Int32(i32),
    MacAddress([u8; 6]),
    Text(Cow<'a, str>),
    Epoch(u32),
    Bool(bool),
    Float32(f32),
}

impl<'a> Value<'a> {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the column type this literal can be stored in, None for NULL.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Value::Null => None,
            Value::Int32(_) => Some(ColumnType::Int32),
            Value::MacAddress(_) => Some(ColumnType::MacAddress),
            Value::Text(_) => Some(ColumnType::String),
            Value::Epoch(_) => Some(ColumnType::Epoch),
            Value::Bool(_) => Some(ColumnType::Bool),
            Value::Float32(_) => Some(ColumnType::Float32),
        }
    }

    /// Creates a text literal borrowing from `s`.
    pub fn text(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<u32> for Value<'_> {
    fn from(v: u32) -> Self {
        Value::Epoch(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value<'_> {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<[u8; 6]> for Value<'_> {
    fn from(v: [u8; 6]) -> Self {
        Value::MacAddress(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Text(Cow::Borrowed(v))
    }
}

impl From<String> for Value<'_> {
    fn from(v: String) -> Self {
        Value::Text(Cow::Owned(v))
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
