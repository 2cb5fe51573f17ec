//! Inserts, updates and deletes.
//!
//! The positional forms take a single equality where-clause, which is what
//! most callers need. `delete_filtered` accepts any [`Filter`].

use super::Database;
use crate::table::Filter;
use crate::types::{MathOp, Value};
use eyre::Result;
use tracing::debug;

impl Database {
    /// Appends a record. `values` must line up with the schema columns.
    /// A `ttl_ms` of zero means the record never expires; the maximum is
    /// `MAX_TTL_MS`.
    pub fn insert(&self, values: &[Value<'_>], ttl_ms: u32) -> Result<()> {
        self.with_table_mut(|table, now| table.insert(values, ttl_ms, now, &self.heap))
    }

    /// Sets `set_column` on every live record whose `where_column` equals
    /// `where_value`. Returns the number of records changed, or `NoRecords`.
    ///
    /// Each record is tested once, before it is written, so using the same
    /// column for the predicate and the assignment is well defined.
    pub fn update<'a>(
        &self,
        where_column: &'a str,
        where_value: impl Into<Value<'a>>,
        set_column: &str,
        set_value: impl Into<Value<'a>>,
    ) -> Result<usize> {
        let filter = Filter::eq(where_column, where_value);
        let set_value = set_value.into();
        self.with_table_mut(|table, now| {
            table.update(&filter, set_column, &set_value, now, &self.heap)
        })
    }

    /// Applies `set_column = set_column <op> operand` to every live matching
    /// record. Only numeric columns are accepted, and a zero operand for
    /// `Divide` or `Modulo` is rejected before any record changes.
    pub fn update_with_math<'a>(
        &self,
        where_column: &'a str,
        where_value: impl Into<Value<'a>>,
        set_column: &str,
        op: MathOp,
        operand: i32,
    ) -> Result<usize> {
        let filter = Filter::eq(where_column, where_value);
        self.with_table_mut(|table, now| {
            table.update_with_math(&filter, set_column, op, operand, now)
        })
    }

    /// Deletes every live record whose `where_column` equals `where_value`.
    pub fn delete<'a>(
        &self,
        where_column: &'a str,
        where_value: impl Into<Value<'a>>,
    ) -> Result<usize> {
        self.delete_filtered(&Filter::eq(where_column, where_value))
    }

    pub fn delete_filtered(&self, filter: &Filter<'_>) -> Result<usize> {
        self.with_table_mut(|table, now| table.delete(filter, now))
    }

    /// Releases every expired record now instead of waiting for a save.
    /// Returns the number of records removed.
    pub fn purge_expired(&self) -> Result<usize> {
        self.with_table_mut(|table, now| {
            let purged = table.purge_expired(now);
            if purged > 0 {
                debug!(purged, remaining = table.record_count(), "expired records purged");
            }
            Ok(purged)
        })
    }
}
