//! Read-only operations. Results are copies owned by the caller.

use super::{Database, Row};
use crate::table::Filter;
use crate::types::{FieldValue, Value};
use eyre::Result;

impl Database {
    /// Value of `column` in the first live record whose `where_column`
    /// equals `where_value`.
    pub fn select_one<'a>(
        &self,
        column: &str,
        where_column: &'a str,
        where_value: impl Into<Value<'a>>,
    ) -> Result<FieldValue> {
        let filter = Filter::eq(where_column, where_value);
        self.with_table(|table, now| table.select_one(column, &filter, now, &self.heap))
    }

    /// Every live record whose `where_column` equals `where_value`, in
    /// insertion order. Fails with `NoRecords` when nothing matches.
    pub fn select_all<'a>(
        &self,
        where_column: &'a str,
        where_value: impl Into<Value<'a>>,
    ) -> Result<Vec<Row>> {
        self.select_all_filtered(&Filter::eq(where_column, where_value))
    }

    pub fn select_all_filtered(&self, filter: &Filter<'_>) -> Result<Vec<Row>> {
        self.with_table(|table, now| table.select_all(filter, now, &self.heap))
    }

    /// Number of live records.
    pub fn count(&self) -> Result<usize> {
        self.with_table(|table, now| Ok(table.count(now)))
    }

    pub fn count_where<'a>(
        &self,
        where_column: &'a str,
        where_value: impl Into<Value<'a>>,
    ) -> Result<usize> {
        self.count_filtered(&Filter::eq(where_column, where_value))
    }

    pub fn count_filtered(&self, filter: &Filter<'_>) -> Result<usize> {
        self.with_table(|table, now| table.count_where(filter, now))
    }

    /// Smallest value of a numeric column across live records. Ties keep the
    /// earliest record.
    pub fn min(&self, column: &str) -> Result<FieldValue> {
        self.with_table(|table, now| table.min(column, now))
    }

    pub fn max(&self, column: &str) -> Result<FieldValue> {
        self.with_table(|table, now| table.max(column, now))
    }

    /// The first `n` live records in insertion order. This does not sort by
    /// any column.
    pub fn top(&self, n: usize) -> Result<Vec<Row>> {
        self.with_table(|table, now| table.top(n, now, &self.heap))
    }
}
