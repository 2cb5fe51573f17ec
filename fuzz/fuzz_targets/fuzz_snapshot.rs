//! Fuzz testing for the snapshot decoder.
//!
//! Feeds arbitrary bytes, optionally behind a well-formed header, to
//! `read_table`. Malformed input must come back as an error, never a panic,
//! and any table that does load must have one field per column in every
//! record.

#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zerocopy::IntoBytes;

use emberdb::memory::HeapGuard;
use emberdb::snapshot::{read_table, SnapshotHeader};

#[derive(Debug, Arbitrary)]
struct SnapshotInput {
    with_valid_header: bool,
    column_count: u8,
    record_count: u16,
    save_timestamp: u32,
    now: u32,
    body: Vec<u8>,
}

fuzz_target!(|input: SnapshotInput| {
    let mut bytes = Vec::new();
    if input.with_valid_header {
        let header =
            SnapshotHeader::new(input.column_count, input.record_count, input.save_timestamp);
        bytes.extend_from_slice(header.as_bytes());
    }
    bytes.extend_from_slice(&input.body);

    let heap = HeapGuard::new(Arc::new(|| usize::MAX), 0);
    if let Ok(table) = read_table(&mut bytes.as_slice(), input.now, &heap, 10) {
        let columns = table.schema().len();
        for record in table.store().records() {
            assert_eq!(record.fields().len(), columns);
        }
    }
});
