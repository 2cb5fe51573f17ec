//! # Database Builder
//!
//! `DatabaseBuilder` configures the collaborators a `Database` runs against.
//! Every setting is optional.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | min_free_heap | 30,000 bytes | Headroom that must remain free before any allocation |
//! | heap_probe | `SystemHeap` | Source of the free-heap reading |
//! | clock | `SystemClock` | Millisecond clock used for expiry |
//! | storage | `FsStorage` | File backend for snapshots |
//! | initial_capacity | 10 | Record slots reserved when a table is created |
//!
//! ## Usage
//!
//! ```ignore
//! let clock = ManualClock::new(0);
//! let db = Database::builder()
//!     .clock(clock.clone())
//!     .heap_probe(|| 1 << 20)
//!     .min_free_heap(4 * 1024)
//!     .initial_capacity(64)
//!     .open();
//! ```

use super::Database;
use crate::clock::{Clock, SystemClock};
use crate::config::{DEFAULT_MIN_FREE_HEAP, INITIAL_RECORD_CAPACITY};
use crate::memory::{HeapGuard, HeapProbe, SystemHeap};
use crate::storage::{FsStorage, Storage};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
pub struct DatabaseBuilder {
    min_free_heap: Option<usize>,
    heap_probe: Option<Arc<dyn HeapProbe>>,
    clock: Option<Arc<dyn Clock>>,
    storage: Option<Arc<dyn Storage>>,
    initial_capacity: Option<usize>,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of bytes that must stay free. Operations that would
    /// allocate fail with `HeapLimit` once free heap is at or below this.
    pub fn min_free_heap(mut self, bytes: usize) -> Self {
        self.min_free_heap = Some(bytes);
        self
    }

    /// Replaces the free-heap source. Any `Fn() -> usize` closure works.
    pub fn heap_probe(mut self, probe: impl HeapProbe + 'static) -> Self {
        self.heap_probe = Some(Arc::new(probe));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Arc::new(storage));
        self
    }

    /// Record slots reserved up front. The store doubles from here.
    pub fn initial_capacity(mut self, records: usize) -> Self {
        self.initial_capacity = Some(records);
        self
    }

    pub fn open(self) -> Database {
        let probe = self
            .heap_probe
            .unwrap_or_else(|| Arc::new(SystemHeap::new()));
        Database {
            table: Mutex::new(None),
            heap: HeapGuard::new(probe, self.min_free_heap.unwrap_or(DEFAULT_MIN_FREE_HEAP)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            storage: self.storage.unwrap_or_else(|| Arc::new(FsStorage)),
            initial_capacity: self.initial_capacity.unwrap_or(INITIAL_RECORD_CAPACITY),
        }
    }
}
