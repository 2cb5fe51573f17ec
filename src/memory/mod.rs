//! # Heap Headroom Guard
//!
//! This module keeps the store from pushing the host into memory exhaustion.
//! Before any operation that allocates, the store asks a [`HeapProbe`] how
//! many bytes are free and refuses to proceed if that number is not above a
//! configured floor.
//!
//! ## Enforcement Model
//!
//! ```text
//!   operation ──► HeapGuard::check() ──► probe.free_bytes() > min_free ?
//!                        │                        │
//!                        │ no                     │ yes
//!                        ▼                        ▼
//!               Err(HeapLimit)            allocation proceeds
//! ```
//!
//! The check is a hard limit: failing it aborts the operation before anything
//! is allocated, so a refused insert never leaves partial state behind.
//!
//! ## Probes
//!
//! - `SystemHeap`: reads available system memory through `sysinfo`
//! - any `Fn() -> usize + Send + Sync` closure, which makes tests trivial:
//!
//! ```ignore
//! let db = Database::builder()
//!     .heap_probe(|| 10_000)       // pretend only 10 KB are free
//!     .min_free_heap(30_000)
//!     .open();
//! ```

mod heap;

pub use heap::{HeapGuard, HeapProbe, SystemHeap};
