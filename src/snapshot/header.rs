use crate::config::{
    COLUMN_ENTRY_SIZE, COLUMN_NAME_FIELD_LEN, MAX_SNAPSHOT_RECORDS, SNAPSHOT_HEADER_SIZE,
    SNAPSHOT_MAGIC, SNAPSHOT_VERSION,
};
use crate::error::StoreError;
use crate::table::Table;
use crate::types::{Column, ColumnType};
use eyre::{ensure, Result};
use zerocopy::little_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct SnapshotHeader {
    magic: [u8; 4],
    version: u8,
    column_count: u8,
    record_count: U16,
    save_timestamp: U32,
}

const _: () = assert!(std::mem::size_of::<SnapshotHeader>() == SNAPSHOT_HEADER_SIZE);

impl SnapshotHeader {
    pub fn new(column_count: u8, record_count: u16, save_timestamp: u32) -> Self {
        Self {
            magic: *SNAPSHOT_MAGIC,
            version: SNAPSHOT_VERSION,
            column_count,
            record_count: U16::new(record_count),
            save_timestamp: U32::new(save_timestamp),
        }
    }

    /// Header describing `table`. Fails with `InvalidOperation` when the
    /// table holds more records than the format can count.
    pub fn for_table(table: &Table, save_timestamp: u32) -> Result<Self> {
        let records = table.record_count();
        ensure!(
            records <= MAX_SNAPSHOT_RECORDS,
            StoreError::InvalidOperation
        );
        let columns = u8::try_from(table.schema().len()).map_err(|_| StoreError::InvalidOperation)?;
        Ok(Self::new(columns, records as u16, save_timestamp))
    }

    /// Parses and validates a header. Any mismatch is `CorruptFile`.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        ensure!(bytes.len() >= SNAPSHOT_HEADER_SIZE, StoreError::CorruptFile);

        let header = Self::ref_from_bytes(&bytes[..SNAPSHOT_HEADER_SIZE])
            .map_err(|_| StoreError::CorruptFile)?;

        ensure!(&header.magic == SNAPSHOT_MAGIC, StoreError::CorruptFile);
        ensure!(header.version == SNAPSHOT_VERSION, StoreError::CorruptFile);
        ensure!(header.column_count > 0, StoreError::CorruptFile);

        Ok(header)
    }

    pub fn column_count(&self) -> u8 {
        self.column_count
    }

    le_getters! {
        record_count: u16,
        save_timestamp: u32,
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct ColumnEntry {
    name: [u8; COLUMN_NAME_FIELD_LEN],
    column_type: u8,
}

const _: () = assert!(std::mem::size_of::<ColumnEntry>() == COLUMN_ENTRY_SIZE);

impl ColumnEntry {
    /// Entry for a validated column. Names are at most 31 bytes, so the
    /// field always keeps a terminating NUL.
    pub fn for_column(column: &Column) -> Self {
        let mut name = [0u8; COLUMN_NAME_FIELD_LEN];
        let bytes = column.name().as_bytes();
        let len = bytes.len().min(COLUMN_NAME_FIELD_LEN - 1);
        name[..len].copy_from_slice(&bytes[..len]);
        Self {
            name,
            column_type: column.column_type() as u8,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        Self::ref_from_bytes(bytes).map_err(|_| StoreError::FileRead.into())
    }

    /// Decodes the entry. Unknown types and unusable names are `CorruptFile`.
    pub fn to_column(&self) -> Result<Column> {
        let end = self
            .name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(COLUMN_NAME_FIELD_LEN);
        let name = std::str::from_utf8(&self.name[..end]).map_err(|_| StoreError::CorruptFile)?;
        let column_type =
            ColumnType::try_from(self.column_type).map_err(|_| StoreError::CorruptFile)?;

        let column = Column::new(name, column_type);
        column.validate().map_err(|_| StoreError::CorruptFile)?;
        Ok(column)
    }
}
