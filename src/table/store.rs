//! # Record Store
//!
//! `RecordStore` owns every record of the table in insertion order. Deletes
//! are logical first (the record is cleared and flagged invalid) and then
//! physical, via [`compact`](RecordStore::compact), which drops invalid slots
//! in one forward pass while keeping survivors in their relative order.
//!
//! ## Growth
//!
//! Capacity doubles whenever the store is full. Growth uses fallible
//! reservation, so running out of memory surfaces as `OutOfMemory` instead of
//! aborting the process, and a failed growth leaves existing records intact.
//!
//! ```text
//!   capacity 10 ──full──► 20 ──full──► 40 ...
//! ```

use super::{BoundFilter, Record};
use crate::error::StoreError;
use crate::schema::Schema;
use crate::types::{codec, FieldValue, MathOp, Value};
use eyre::{bail, ensure, Result};
use tracing::debug;

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut records = Vec::new();
        if records.try_reserve_exact(capacity).is_err() {
            bail!(StoreError::OutOfMemory);
        }
        Ok(Self { records })
    }

    /// Number of slots in use, including expired records not yet purged.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates records that are valid and not expired at `now`.
    pub fn live(&self, now: u32) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.is_live(now))
    }

    /// Makes room for one more record, doubling capacity when full.
    fn reserve_slot(&mut self) -> Result<()> {
        let len = self.records.len();
        let current = self.records.capacity();
        if len < current {
            return Ok(());
        }
        let Some(target) = current.checked_mul(2) else {
            bail!(StoreError::OutOfMemory);
        };
        let target = target.max(1);
        if self.records.try_reserve_exact(target - len).is_err() {
            bail!(StoreError::OutOfMemory);
        }
        debug!(from = current, to = self.records.capacity(), "record store grown");
        Ok(())
    }

    pub fn push(&mut self, record: Record) -> Result<()> {
        self.reserve_slot()?;
        self.records.push(record);
        Ok(())
    }

    /// Encodes `values` against `schema` and appends the resulting record.
    ///
    /// Nothing is appended if any value fails to encode; fields encoded so
    /// far are dropped with the partially built record.
    pub fn insert(&mut self, schema: &Schema, values: &[Value<'_>], expiry: u32) -> Result<()> {
        ensure!(values.len() == schema.len(), StoreError::ColumnCountMismatch);
        self.reserve_slot()?;

        let mut fields = Vec::new();
        if fields.try_reserve_exact(values.len()).is_err() {
            bail!(StoreError::OutOfMemory);
        }
        for (column, value) in schema.columns().iter().zip(values) {
            fields.push(codec::encode(column.column_type(), value)?);
        }

        self.records.push(Record::new(fields, expiry));
        Ok(())
    }

    /// Overwrites column `set_index` with `value` on every live match.
    /// Each row is tested once, against its value before the write.
    pub fn update(
        &mut self,
        filter: &BoundFilter<'_>,
        set_index: usize,
        value: &FieldValue,
        now: u32,
    ) -> Result<usize> {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| r.is_live(now)) {
            if filter.matches(record)? {
                record.set_field(set_index, value.clone());
                updated += 1;
            }
        }
        Ok(updated)
    }

    /// Applies `op operand` to column `set_index` on every live match.
    pub fn update_with_math(
        &mut self,
        filter: &BoundFilter<'_>,
        set_index: usize,
        op: MathOp,
        operand: i32,
        now: u32,
    ) -> Result<usize> {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| r.is_live(now)) {
            if filter.matches(record)? {
                codec::apply_math(record.field_mut(set_index), op, operand)?;
                updated += 1;
            }
        }
        Ok(updated)
    }

    /// Deletes every live match, then compacts.
    pub fn delete(&mut self, filter: &BoundFilter<'_>, now: u32) -> Result<usize> {
        let mut deleted = 0;
        for record in self.records.iter_mut().filter(|r| r.is_live(now)) {
            if filter.matches(record)? {
                record.invalidate();
                deleted += 1;
            }
        }
        if deleted > 0 {
            self.compact();
        }
        Ok(deleted)
    }

    /// Clears every record expired at `now`, then compacts.
    pub fn purge_expired(&mut self, now: u32) -> usize {
        let mut purged = 0;
        for record in self.records.iter_mut() {
            if record.is_valid() && record.is_expired(now) {
                record.invalidate();
                purged += 1;
            }
        }
        if purged > 0 {
            self.compact();
        }
        purged
    }

    /// Removes invalid slots, preserving the order of survivors.
    /// Returns the number of slots removed.
    pub fn compact(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(Record::is_valid);
        before - self.records.len()
    }

    /// Approximate heap bytes held by the record array and all fields.
    pub fn memory_usage(&self) -> usize {
        self.records.capacity() * std::mem::size_of::<Record>()
            + self.records.iter().map(Record::memory_usage).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NO_EXPIRY;
    use crate::table::Filter;
    use crate::types::{Column, ColumnType};

    fn schema() -> Schema {
        Schema::new(&[
            Column::new("id", ColumnType::Int32),
            Column::new("name", ColumnType::String),
        ])
        .unwrap()
    }

    fn ids(store: &RecordStore) -> Vec<i32> {
        store
            .records()
            .iter()
            .map(|r| r.field(0).as_int32().unwrap())
            .collect()
    }

    fn filled(schema: &Schema, n: i32) -> RecordStore {
        let mut store = RecordStore::with_capacity(2).unwrap();
        for i in 0..n {
            store
                .insert(schema, &[Value::Int32(i), Value::text("x")], NO_EXPIRY)
                .unwrap();
        }
        store
    }

    #[test]
    fn test_growth_doubles_and_keeps_order() {
        let schema = schema();
        let store = filled(&schema, 9);
        assert_eq!(store.len(), 9);
        assert!(store.capacity() >= 9);
        assert_eq!(ids(&store), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_growth_from_zero_capacity() {
        let schema = schema();
        let mut store = RecordStore::with_capacity(0).unwrap();
        store
            .insert(&schema, &[Value::Int32(1), Value::text("a")], NO_EXPIRY)
            .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_insert_appends_nothing() {
        let schema = schema();
        let mut store = filled(&schema, 1);

        let err = store
            .insert(&schema, &[Value::Int32(2), Value::Int32(3)], NO_EXPIRY)
            .unwrap_err();
        assert_eq!(StoreError::of(&err), Some(StoreError::InvalidType));

        let err = store
            .insert(&schema, &[Value::Int32(2)], NO_EXPIRY)
            .unwrap_err();
        assert_eq!(StoreError::of(&err), Some(StoreError::ColumnCountMismatch));

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_preserves_order() {
        let schema = schema();
        let mut store = filled(&schema, 5);
        let filter = Filter::eq("id", 2);
        let bound = filter.bind(&schema).unwrap();

        assert_eq!(store.delete(&bound, 0).unwrap(), 1);
        assert_eq!(ids(&store), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_delete_skips_expired_rows() {
        let schema = schema();
        let mut store = RecordStore::default();
        store
            .insert(&schema, &[Value::Int32(1), Value::text("a")], 10)
            .unwrap();
        let filter = Filter::eq("id", 1);
        let bound = filter.bind(&schema).unwrap();

        assert_eq!(store.delete(&bound, 20).unwrap(), 0);
        assert_eq!(store.len(), 1);

        assert_eq!(store.delete(&bound, 5).unwrap(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_purge_expired() {
        let schema = schema();
        let mut store = RecordStore::default();
        store
            .insert(&schema, &[Value::Int32(1), Value::text("a")], NO_EXPIRY)
            .unwrap();
        store
            .insert(&schema, &[Value::Int32(2), Value::text("b")], 100)
            .unwrap();
        store
            .insert(&schema, &[Value::Int32(3), Value::text("c")], 200)
            .unwrap();

        assert_eq!(store.purge_expired(50), 0);
        assert_eq!(store.purge_expired(150), 1);
        assert_eq!(ids(&store), vec![1, 3]);
        assert_eq!(store.live(250).count(), 1);
    }

    #[test]
    fn test_update_skips_expired() {
        let schema = schema();
        let mut store = RecordStore::default();
        store
            .insert(&schema, &[Value::Int32(1), Value::text("a")], 100)
            .unwrap();
        store
            .insert(&schema, &[Value::Int32(1), Value::text("b")], NO_EXPIRY)
            .unwrap();

        let filter = Filter::eq("id", 1);
        let bound = filter.bind(&schema).unwrap();
        let n = store
            .update(&bound, 1, &FieldValue::Text("z".into()), 150)
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(store.records()[0].field(1).as_text(), Some("a"));
        assert_eq!(store.records()[1].field(1).as_text(), Some("z"));
    }

    #[test]
    fn test_self_referential_math_visits_each_row_once() {
        let schema = schema();
        let mut store = filled(&schema, 3);
        let filter = Filter::new("id", crate::types::CompareOp::GreaterEqual, 0);
        let bound = filter.bind(&schema).unwrap();

        let n = store
            .update_with_math(&bound, 0, MathOp::Add, 10, 0)
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(ids(&store), vec![10, 11, 12]);
    }

    #[test]
    fn test_compact_counts_removed() {
        let schema = schema();
        let mut store = filled(&schema, 4);
        store.records[1].invalidate();
        store.records[3].invalidate();
        assert_eq!(store.compact(), 2);
        assert_eq!(ids(&store), vec![0, 2]);
    }
}
