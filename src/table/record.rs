//! # Records
//!
//! A record is one row of the table: a field per schema column, an optional
//! expiry deadline and a validity flag. Deleting a record clears its fields
//! immediately and marks it invalid; the slot itself is reclaimed later by
//! [`RecordStore::compact`](super::RecordStore::compact).

use super::expiry;
use crate::types::FieldValue;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<FieldValue>,
    expiry: u32,
    valid: bool,
}

impl Record {
    /// Creates a live record. `expiry` is an absolute deadline or
    /// `NO_EXPIRY`.
    pub fn new(fields: Vec<FieldValue>, expiry: u32) -> Self {
        Self {
            fields,
            expiry,
            valid: true,
        }
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> &FieldValue {
        &self.fields[index]
    }

    pub(crate) fn field_mut(&mut self, index: usize) -> &mut FieldValue {
        &mut self.fields[index]
    }

    /// Replaces a field, dropping the previous value first.
    pub(crate) fn set_field(&mut self, index: usize, value: FieldValue) {
        self.fields[index] = value;
    }

    pub fn expiry(&self) -> u32 {
        self.expiry
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_expired(&self, now: u32) -> bool {
        expiry::is_expired(self.expiry, now)
    }

    /// Valid and not past its deadline.
    pub fn is_live(&self, now: u32) -> bool {
        self.valid && !self.is_expired(now)
    }

    /// Marks the record deleted and releases its field memory.
    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
        self.fields = Vec::new();
    }

    /// Approximate heap bytes held by this record's fields.
    pub fn memory_usage(&self) -> usize {
        self.fields.capacity() * std::mem::size_of::<FieldValue>()
            + self.fields.iter().map(FieldValue::heap_size).sum::<usize>()
    }
}
