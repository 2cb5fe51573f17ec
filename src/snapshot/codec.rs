//! Stream encoder and decoder for whole-table snapshots.

use super::{ColumnEntry, SnapshotHeader};
use crate::config::{COLUMN_ENTRY_SIZE, SNAPSHOT_HEADER_SIZE};
use crate::error::StoreError;
use crate::memory::HeapGuard;
use crate::schema::Schema;
use crate::table::{expiry, Record, RecordStore, Table};
use crate::types::{ColumnType, FieldValue};
use eyre::{bail, Result, WrapErr};
use std::io::{Read, Write};
use zerocopy::IntoBytes;

/// Writes `table` to `w` under `header`.
///
/// Every I/O failure is reported as `FileWrite` with the OS error as its
/// cause.
pub fn write_table<W: Write + ?Sized>(
    w: &mut W,
    header: &SnapshotHeader,
    table: &Table,
) -> Result<()> {
    w.write_all(header.as_bytes())
        .wrap_err(StoreError::FileWrite)?;

    for column in table.schema().columns() {
        w.write_all(ColumnEntry::for_column(column).as_bytes())
            .wrap_err(StoreError::FileWrite)?;
    }

    let mut buf = Vec::with_capacity(64);
    for record in table.store().records() {
        buf.clear();
        encode_record(&mut buf, record);
        w.write_all(&buf).wrap_err(StoreError::FileWrite)?;
    }

    w.flush().wrap_err(StoreError::FileWrite)
}

fn encode_record(buf: &mut Vec<u8>, record: &Record) {
    buf.push(record.is_valid() as u8);
    buf.extend_from_slice(&record.expiry().to_le_bytes());
    for field in record.fields() {
        match field {
            FieldValue::Int32(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Epoch(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Float32(v) => buf.extend_from_slice(&v.to_le_bytes()),
            FieldValue::Bool(b) => buf.push(*b as u8),
            FieldValue::MacAddress(m) => buf.extend_from_slice(m),
            FieldValue::Text(s) => {
                // stored strings never exceed 255 bytes
                buf.push(s.len() as u8);
                buf.extend_from_slice(s.as_bytes());
            }
        }
    }
}

/// Decodes a snapshot from `r` into a new table.
///
/// Deadlines are moved from the saving clock onto `now`. Records stored as
/// invalid are skipped. The record store is sized for
/// `max(record count, initial_capacity)`.
pub fn read_table<R: Read + ?Sized>(
    r: &mut R,
    now: u32,
    heap: &HeapGuard,
    initial_capacity: usize,
) -> Result<Table> {
    let mut header_bytes = [0u8; SNAPSHOT_HEADER_SIZE];
    r.read_exact(&mut header_bytes)
        .wrap_err(StoreError::CorruptFile)?;
    let header = *SnapshotHeader::from_bytes(&header_bytes)?;

    heap.check()?;
    let schema = read_schema(r, header.column_count())?;

    heap.check()?;
    let record_count = header.record_count() as usize;
    let mut store = RecordStore::with_capacity(record_count.max(initial_capacity))?;

    for _ in 0..record_count {
        let mut prefix = [0u8; 5];
        read_body(r, &mut prefix)?;
        let valid = prefix[0] != 0;
        let saved_expiry = u32::from_le_bytes([prefix[1], prefix[2], prefix[3], prefix[4]]);

        heap.check()?;
        let fields = read_fields(r, &schema)?;
        if valid {
            let deadline = expiry::rebase(saved_expiry, header.save_timestamp(), now);
            store.push(Record::new(fields, deadline))?;
        }
    }

    Ok(Table::from_parts(schema, store))
}

fn read_body<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> Result<()> {
    r.read_exact(buf).wrap_err(StoreError::FileRead)
}

fn read_schema<R: Read + ?Sized>(r: &mut R, column_count: u8) -> Result<Schema> {
    let mut columns = Vec::new();
    if columns.try_reserve_exact(column_count as usize).is_err() {
        bail!(StoreError::OutOfMemory);
    }
    let mut entry = [0u8; COLUMN_ENTRY_SIZE];
    for _ in 0..column_count {
        read_body(r, &mut entry)?;
        columns.push(ColumnEntry::from_bytes(&entry)?.to_column()?);
    }
    Schema::new(&columns)
}

fn read_fields<R: Read + ?Sized>(r: &mut R, schema: &Schema) -> Result<Vec<FieldValue>> {
    let mut fields = Vec::new();
    if fields.try_reserve_exact(schema.len()).is_err() {
        bail!(StoreError::OutOfMemory);
    }

    for column in schema.columns() {
        let field = match column.column_type() {
            ColumnType::Int32 => FieldValue::Int32(i32::from_le_bytes(read_array(r)?)),
            ColumnType::Epoch => FieldValue::Epoch(u32::from_le_bytes(read_array(r)?)),
            ColumnType::Float32 => FieldValue::Float32(f32::from_le_bytes(read_array(r)?)),
            ColumnType::Bool => FieldValue::Bool(read_array::<_, 1>(r)?[0] != 0),
            ColumnType::MacAddress => FieldValue::MacAddress(read_array(r)?),
            ColumnType::String => FieldValue::Text(read_text(r)?),
        };
        fields.push(field);
    }
    Ok(fields)
}

fn read_array<R: Read + ?Sized, const N: usize>(r: &mut R) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    read_body(r, &mut buf)?;
    Ok(buf)
}

fn read_text<R: Read + ?Sized>(r: &mut R) -> Result<Box<str>> {
    let [len] = read_array::<_, 1>(r)?;
    let mut bytes = Vec::new();
    if bytes.try_reserve_exact(len as usize).is_err() {
        bail!(StoreError::OutOfMemory);
    }
    bytes.resize(len as usize, 0);
    read_body(r, &mut bytes)?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s.into_boxed_str()),
        Err(_) => bail!(StoreError::CorruptFile),
    }
}
