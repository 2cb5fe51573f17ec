//! # Table
//!
//! The table is the single schema together with its record store. This module
//! implements every data operation against an unlocked `Table`; the
//! [`Database`](crate::Database) wraps one in its mutex and supplies the
//! clock reading and heap guard.
//!
//! ## Module Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | `record` | `Record`: fields, deadline, validity flag |
//! | `store` | `RecordStore`: growth, update, delete, compaction |
//! | `expiry` | deadline arithmetic on a wrapping millisecond clock |
//! | `filter` | `Filter` where-clauses and their schema binding |
//! | `query` | selects and aggregates |
//!
//! ## Check Order
//!
//! Mutating operations validate everything they can before touching a
//! record, so a failed call leaves the table unchanged:
//!
//! ```text
//! insert:            column count ─► heap ─► ttl ─► growth ─► encode each field
//! update:            filter ─► set column ─► heap (String only) ─► encode ─► scan
//! update_with_math:  filter ─► set column ─► type + operand ─► scan
//! delete:            filter ─► scan ─► compact
//! ```

pub mod expiry;
mod filter;
mod query;
mod record;
mod store;

pub use filter::{BoundFilter, Filter};
pub use record::Record;
pub use store::RecordStore;

use crate::config::MAX_TTL_MS;
use crate::error::StoreError;
use crate::memory::HeapGuard;
use crate::schema::Schema;
use crate::types::{codec, Column, ColumnType, MathOp, Value};
use eyre::{bail, ensure, Result};

#[derive(Debug)]
pub struct Table {
    schema: Schema,
    store: RecordStore,
}

impl Table {
    /// Creates an empty table with room for `capacity` records.
    pub fn create(columns: &[Column], capacity: usize) -> Result<Self> {
        let schema = Schema::new(columns)?;
        let store = RecordStore::with_capacity(capacity)?;
        Ok(Self { schema, store })
    }

    pub(crate) fn from_parts(schema: Schema, store: RecordStore) -> Self {
        Self { schema, store }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn insert(
        &mut self,
        values: &[Value<'_>],
        ttl_ms: u32,
        now: u32,
        heap: &HeapGuard,
    ) -> Result<()> {
        ensure!(
            values.len() == self.schema.len(),
            StoreError::ColumnCountMismatch
        );
        heap.check()?;
        ensure!(ttl_ms <= MAX_TTL_MS, StoreError::InvalidValue);

        self.store
            .insert(&self.schema, values, expiry::deadline(now, ttl_ms))
    }

    /// Sets `set_column` to `set_value` on every live record matching
    /// `filter`. Returns the number of records changed.
    pub fn update(
        &mut self,
        filter: &Filter<'_>,
        set_column: &str,
        set_value: &Value<'_>,
        now: u32,
        heap: &HeapGuard,
    ) -> Result<usize> {
        let bound = filter.bind(&self.schema)?;
        ensure!(!set_value.is_null(), StoreError::InvalidValue);
        let (set_index, set_type) = self.schema.resolve(set_column)?;
        if set_type == ColumnType::String {
            heap.check()?;
        }
        let field = codec::encode(set_type, set_value)?;

        let updated = self.store.update(&bound, set_index, &field, now)?;
        ensure!(updated > 0, StoreError::NoRecords);
        Ok(updated)
    }

    /// Applies `op operand` to `set_column` on every live record matching
    /// `filter`. Returns the number of records changed.
    pub fn update_with_math(
        &mut self,
        filter: &Filter<'_>,
        set_column: &str,
        op: MathOp,
        operand: i32,
        now: u32,
    ) -> Result<usize> {
        let bound = filter.bind(&self.schema)?;
        let (set_index, set_type) = self.schema.resolve(set_column)?;
        codec::check_math(set_type, op, operand)?;

        let updated = self
            .store
            .update_with_math(&bound, set_index, op, operand, now)?;
        ensure!(updated > 0, StoreError::NoRecords);
        Ok(updated)
    }

    /// Deletes every live record matching `filter`. Expired records are
    /// left for the next purge.
    pub fn delete(&mut self, filter: &Filter<'_>, now: u32) -> Result<usize> {
        let bound = filter.bind(&self.schema)?;
        let deleted = self.store.delete(&bound, now)?;
        if deleted == 0 {
            bail!(StoreError::NoRecords);
        }
        Ok(deleted)
    }

    pub fn purge_expired(&mut self, now: u32) -> usize {
        self.store.purge_expired(now)
    }

    /// Physical slots in use, including expired records not yet purged.
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.schema.memory_usage() + self.store.memory_usage()
    }
}
