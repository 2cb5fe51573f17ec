//! Selects and aggregates over live records.
//!
//! Every query skips records that are invalid or expired at `now`. Results
//! are copied into freshly allocated buffers owned by the caller; nothing
//! returned borrows from the table.

use super::{Filter, Table};
use crate::database::Row;
use crate::error::StoreError;
use crate::memory::HeapGuard;
use crate::types::{ColumnType, FieldValue};
use eyre::{bail, ensure, Result};
use std::cmp::Ordering;

impl Table {
    /// Value of `column` in the first live record matching `filter`.
    pub fn select_one(
        &self,
        column: &str,
        filter: &Filter<'_>,
        now: u32,
        heap: &HeapGuard,
    ) -> Result<FieldValue> {
        let (index, column_type) = self.schema.resolve(column)?;
        let bound = filter.bind(&self.schema)?;

        for record in self.store.live(now) {
            if bound.matches(record)? {
                if column_type == ColumnType::String {
                    heap.check()?;
                }
                return Ok(record.field(index).clone());
            }
        }
        bail!(StoreError::NoRecords)
    }

    /// Every live record matching `filter`, all columns, in store order.
    pub fn select_all(&self, filter: &Filter<'_>, now: u32, heap: &HeapGuard) -> Result<Vec<Row>> {
        let bound = filter.bind(&self.schema)?;

        let mut matched = 0;
        for record in self.store.live(now) {
            if bound.matches(record)? {
                matched += 1;
            }
        }
        ensure!(matched > 0, StoreError::NoRecords);
        heap.check()?;

        let mut rows = Vec::new();
        if rows.try_reserve_exact(matched).is_err() {
            bail!(StoreError::OutOfMemory);
        }
        for record in self.store.live(now) {
            if bound.matches(record)? {
                rows.push(Row::try_from_fields(record.fields())?);
            }
        }
        Ok(rows)
    }

    pub fn count(&self, now: u32) -> usize {
        self.store.live(now).count()
    }

    pub fn count_where(&self, filter: &Filter<'_>, now: u32) -> Result<usize> {
        let bound = filter.bind(&self.schema)?;
        let mut count = 0;
        for record in self.store.live(now) {
            if bound.matches(record)? {
                count += 1;
            }
        }
        Ok(count)
    }

    pub fn min(&self, column: &str, now: u32) -> Result<FieldValue> {
        self.extremum(column, now, Ordering::Less)
    }

    pub fn max(&self, column: &str, now: u32) -> Result<FieldValue> {
        self.extremum(column, now, Ordering::Greater)
    }

    /// The first live value seeds the result and a later value replaces it
    /// only when it compares strictly better, so ties keep the first one.
    /// Comparisons against NaN are never better: a NaN is skipped after the
    /// first row and kept if it is the first.
    fn extremum(&self, column: &str, now: u32, wanted: Ordering) -> Result<FieldValue> {
        let (index, column_type) = self.schema.resolve(column)?;
        ensure!(column_type.is_numeric(), StoreError::InvalidType);

        let mut best: Option<&FieldValue> = None;
        for record in self.store.live(now) {
            let field = record.field(index);
            match best {
                Some(current) if numeric_cmp(field, current) != Some(wanted) => {}
                _ => best = Some(field),
            }
        }
        match best {
            Some(field) => Ok(field.clone()),
            None => bail!(StoreError::NoRecords),
        }
    }

    /// First `n` live records in store order.
    pub fn top(&self, n: usize, now: u32, heap: &HeapGuard) -> Result<Vec<Row>> {
        let available = self.count(now);
        ensure!(available > 0, StoreError::NoRecords);
        let take = n.min(available);
        heap.check()?;

        let mut rows = Vec::new();
        if rows.try_reserve_exact(take).is_err() {
            bail!(StoreError::OutOfMemory);
        }
        for record in self.store.live(now).take(take) {
            rows.push(Row::try_from_fields(record.fields())?);
        }
        Ok(rows)
    }
}

fn numeric_cmp(a: &FieldValue, b: &FieldValue) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Int32(x), FieldValue::Int32(y)) => Some(x.cmp(y)),
        (FieldValue::Epoch(x), FieldValue::Epoch(y)) => Some(x.cmp(y)),
        (FieldValue::Float32(x), FieldValue::Float32(y)) => x.partial_cmp(y),
        _ => None,
    }
}
