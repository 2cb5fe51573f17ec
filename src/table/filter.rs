//! # Where-Clauses
//!
//! A `Filter` names a column, an operator and a literal. Before a scan it is
//! bound against the schema, which resolves the column and rejects bad
//! literals or unsupported operators up front, so a scan never fails halfway
//! through because of a malformed predicate.
//!
//! ```ignore
//! let adults = Filter::new("age", CompareOp::GreaterEqual, 18);
//! let alice = Filter::eq("name", "alice");
//! ```

use super::Record;
use crate::error::StoreError;
use crate::schema::Schema;
use crate::types::{codec, CompareOp, Value};
use eyre::{ensure, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Filter<'a> {
    column: &'a str,
    op: CompareOp,
    value: Value<'a>,
}

impl<'a> Filter<'a> {
    pub fn new(column: &'a str, op: CompareOp, value: impl Into<Value<'a>>) -> Self {
        Self {
            column,
            op,
            value: value.into(),
        }
    }

    /// Equality filter, the form used by every positional where-clause.
    pub fn eq(column: &'a str, value: impl Into<Value<'a>>) -> Self {
        Self::new(column, CompareOp::Equal, value)
    }

    pub fn column(&self) -> &str {
        self.column
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    /// Resolves the filter against `schema`.
    ///
    /// Fails with `InvalidValue` for a NULL literal, `ColumnNotFound` for an
    /// unknown column, `InvalidType` when the literal does not match the
    /// column type and `InvalidOperation` for an ordering operator on a
    /// column that only supports equality.
    pub fn bind(&self, schema: &Schema) -> Result<BoundFilter<'_>> {
        ensure!(!self.value.is_null(), StoreError::InvalidValue);
        let (index, column_type) = schema.resolve(self.column)?;
        codec::check_literal(column_type, &self.value)?;
        codec::check_operator(column_type, self.op)?;
        Ok(BoundFilter {
            index,
            op: self.op,
            value: &self.value,
        })
    }
}

/// Filter resolved to a column position.
#[derive(Debug, Clone, Copy)]
pub struct BoundFilter<'f> {
    index: usize,
    op: CompareOp,
    value: &'f Value<'f>,
}

impl BoundFilter<'_> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn matches(&self, record: &Record) -> Result<bool> {
        codec::compare(record.field(self.index), self.value, self.op)
    }
}
