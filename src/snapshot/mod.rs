//! # Snapshot Format
//!
//! A snapshot is the whole table (schema plus every live record) written as a
//! single little-endian byte stream. Saving first purges expired records, so
//! a snapshot never contains anything already dead.
//!
//! ## Layout
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----------------------------------------------
//!      0     4  magic "IMDB"
//!      4     1  version (1)
//!      5     1  column count
//!      6     2  record count (u16, at most 65,535)
//!      8     4  save timestamp (u32 ms on the saving clock)
//!     12    33  column entry × column count
//!                 name: 32 bytes, NUL padded
//!                 type: 1 byte (ColumnType discriminant)
//!      …     …  record × record count
//!                 valid:  1 byte (0 or 1)
//!                 expiry: 4 bytes (u32, 0 = never)
//!                 fields, one per column:
//!                   Int32 / Epoch / Float32   4 bytes
//!                   Bool                      1 byte
//!                   MacAddress                6 bytes
//!                   String                    1 length byte + bytes
//! ```
//!
//! ## Expiry Across Save and Load
//!
//! Deadlines are stored as absolute times on the saving clock, alongside the
//! save timestamp. On load each deadline is moved onto the loading clock so
//! the remaining lifetime is unchanged. This assumes the clock kept running
//! between save and load; after a reboot the millisecond counter restarts and
//! remaining lifetimes are only approximate.
//!
//! ## Failure Classification
//!
//! | Condition | Error |
//! |-----------|-------|
//! | header shorter than 12 bytes, wrong magic or version | `CorruptFile` |
//! | zero columns, unknown type byte, bad name or string bytes | `CorruptFile` |
//! | schema or record data ends early | `FileRead` |
//! | headroom check fails while loading | `HeapLimit` |
//!
//! Decoding builds a complete table before handing it back. Any failure drops
//! everything decoded so far, so a caller never observes a partial table.

mod codec;
mod header;

pub use codec::{read_table, write_table};
pub use header::{ColumnEntry, SnapshotHeader};
