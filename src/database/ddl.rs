//! Table creation and removal.

use super::Database;
use crate::error::StoreError;
use crate::table::Table;
use crate::types::Column;
use eyre::{bail, Result};
use tracing::{debug, info};

impl Database {
    /// Creates the table. Fails with `TableExists` if one is already present,
    /// `InvalidValue` for an empty or oversized column list or a bad column
    /// name, and `HeapLimit` when headroom is exhausted.
    pub fn create_table(&self, columns: &[Column]) -> Result<()> {
        let mut guard = self.table.lock();
        if guard.is_some() {
            bail!(StoreError::TableExists);
        }
        self.heap.check()?;

        let table = Table::create(columns, self.initial_capacity)?;
        info!(
            columns = columns.len(),
            capacity = self.initial_capacity,
            "table created"
        );
        *guard = Some(table);
        Ok(())
    }

    /// Drops the table, releasing every record and the schema.
    pub fn drop_table(&self) -> Result<()> {
        let mut guard = self.table.lock();
        let Some(table) = guard.take() else {
            bail!(StoreError::NoTable);
        };
        debug!(records = table.record_count(), "table dropped");
        Ok(())
    }
}
