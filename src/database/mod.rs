//! # Database Module
//!
//! `Database` is the public entry point. It owns at most one [`Table`] behind
//! a single mutex, together with the collaborators every operation needs: a
//! clock for expiry, a heap guard for allocation headroom and a storage
//! backend for snapshots.
//!
//! ## Operation Flow
//!
//! ```text
//! caller
//!   │
//!   ▼
//! lock table ──► table present? ──no──► Err(NoTable)
//!   │                 │yes
//!   │                 ▼
//!   │          read clock, run operation on Table
//!   │                 │
//!   ▼                 ▼
//! unlock ◄──── Result<T> (query results are owned copies)
//! ```
//!
//! ## Thread Safety
//!
//! `Database` is `Send + Sync`. Every public method takes the one
//! `parking_lot::Mutex` for its whole duration, so calls are fully
//! serialised: there is no reader/writer split and no timeout. The lock is
//! not reentrant, and nothing inside the store calls back into caller code
//! while holding it.
//!
//! ## Module Structure
//!
//! | File | Operations |
//! |------|-----------|
//! | `builder.rs` | `DatabaseBuilder` |
//! | `ddl.rs` | `create_table`, `drop_table` |
//! | `dml.rs` | `insert`, `update`, `update_with_math`, `delete`, `purge_expired` |
//! | `query.rs` | `select_one`, `select_all`, `count`, `count_where`, `min`, `max`, `top` |
//! | `persistence.rs` | `save_to_file`, `load_from_file` |
//! | `row.rs` | `Row` result type |

mod builder;
mod ddl;
mod dml;
mod persistence;
mod query;
mod row;

pub use builder::DatabaseBuilder;
pub use row::Row;

use crate::clock::Clock;
use crate::error::StoreError;
use crate::memory::HeapGuard;
use crate::schema::Schema;
use crate::storage::Storage;
use crate::table::Table;
use eyre::{bail, Result};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

pub struct Database {
    table: Mutex<Option<Table>>,
    heap: HeapGuard,
    clock: Arc<dyn Clock>,
    storage: Arc<dyn Storage>,
    initial_capacity: usize,
}

impl Database {
    /// Opens an empty database with default collaborators.
    pub fn new() -> Self {
        DatabaseBuilder::new().open()
    }

    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    fn now(&self) -> u32 {
        self.clock.now_millis()
    }

    /// Runs `f` against the table under the lock.
    fn with_table<T>(&self, f: impl FnOnce(&Table, u32) -> Result<T>) -> Result<T> {
        let guard = self.table.lock();
        let Some(table) = guard.as_ref() else {
            bail!(StoreError::NoTable);
        };
        f(table, self.now())
    }

    /// Runs `f` against the table under the lock, with mutable access.
    fn with_table_mut<T>(&self, f: impl FnOnce(&mut Table, u32) -> Result<T>) -> Result<T> {
        let mut guard = self.table.lock();
        let Some(table) = guard.as_mut() else {
            bail!(StoreError::NoTable);
        };
        let now = self.now();
        f(table, now)
    }

    pub fn has_table(&self) -> bool {
        self.table.lock().is_some()
    }

    /// Copy of the current schema.
    pub fn schema(&self) -> Result<Schema> {
        self.with_table(|table, _| Ok(table.schema().clone()))
    }

    /// Physical record slots in use, including expired records that have not
    /// been purged. Zero when no table exists.
    pub fn record_count(&self) -> usize {
        self.table.lock().as_ref().map_or(0, Table::record_count)
    }

    /// Estimated bytes held by the table. Zero when no table exists.
    pub fn memory_usage(&self) -> usize {
        self.table.lock().as_ref().map_or(0, Table::memory_usage)
    }

    /// Always true: every operation is serialised by a real mutex.
    pub fn is_thread_safe(&self) -> bool {
        true
    }

    /// Free heap bytes as reported by the configured probe.
    pub fn free_heap(&self) -> usize {
        self.heap.free_bytes()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("has_table", &self.has_table())
            .field("heap", &self.heap)
            .field("initial_capacity", &self.initial_capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[test]
    fn test_empty_database() {
        let db = Database::builder().heap_probe(|| usize::MAX).open();
        assert!(!db.has_table());
        assert_eq!(db.record_count(), 0);
        assert_eq!(db.memory_usage(), 0);
        assert!(db.is_thread_safe());

        let err = db.schema().unwrap_err();
        assert_eq!(StoreError::of(&err), Some(StoreError::NoTable));
    }
}
