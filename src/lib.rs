//! # EmberDB - Embedded Single-Table Record Store
//!
//! EmberDB keeps one typed table in memory for devices where RAM is scarce.
//! A schema is fixed once at creation; records can carry a time-to-live and
//! the whole table can be written to and restored from a compact binary
//! snapshot.
//!
//! - **Typed columns**: Int32, MacAddress, String, Epoch, Bool, Float32
//! - **Per-record expiry**: lazily skipped by every scan, purged on demand
//! - **Heap headroom guard**: refuses work before free memory runs out
//! - **Atomic snapshots**: write to a temporary file, then rename
//!
//! ## Quick Start
//!
//! ```ignore
//! use emberdb::{Column, ColumnType, Database, Value};
//!
//! let db = Database::new();
//! db.create_table(&[
//!     Column::new("id", ColumnType::Int32),
//!     Column::new("name", ColumnType::String),
//! ])?;
//!
//! db.insert(&[Value::Int32(1), Value::text("a")], 0)?;
//! db.insert(&[Value::Int32(2), Value::text("b")], 100)?; // expires in 100 ms
//!
//! let name = db.select_one("name", "id", 1)?;
//! db.save_to_file("table.imdb")?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Database (mutex, clock, heap)     │
//! ├─────────────────────────────────────┤
//! │  Table: query engine │ expiry       │
//! ├──────────────────────┴──────────────┤
//! │  RecordStore │ Schema               │
//! ├─────────────────────────────────────┤
//! │  Field codec (encode/compare/math)  │
//! ├─────────────────────────────────────┤
//! │  Snapshot codec │ Storage backend   │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`database`]: public `Database` API and builder
//! - [`table`]: record store, expiry, filters and queries
//! - [`types`]: column types, literals, stored fields, codec
//! - [`schema`]: ordered column definitions
//! - [`snapshot`]: binary snapshot format
//! - [`storage`]: file backend used by snapshots
//! - [`memory`]: heap headroom guard
//! - [`clock`]: millisecond clock
//! - [`parsing`]: MAC address text helpers

#[macro_use]
mod macros;

pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod memory;
pub mod parsing;
pub mod schema;
pub mod snapshot;
pub mod storage;
pub mod table;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use database::{Database, DatabaseBuilder, Row};
pub use error::{describe_error, StoreError};
pub use memory::{HeapProbe, SystemHeap};
pub use parsing::{format_mac_address, parse_mac_address};
pub use schema::Schema;
pub use storage::{FsStorage, Storage};
pub use table::Filter;
pub use types::{Column, ColumnType, CompareOp, FieldValue, MathOp, Value};
