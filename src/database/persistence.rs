//! Snapshot save and load.
//!
//! ## Save
//!
//! 1. Purge expired records.
//! 2. Build the header; more than 65,535 records is `InvalidOperation`.
//! 3. Write everything to `<path>.tmp` and flush.
//! 4. Remove the previous snapshot, then rename the temporary file into place.
//!
//! A failure in step 3 or 4 removes the temporary file and leaves any
//! previous snapshot as it was.
//!
//! ## Load
//!
//! Loading requires an empty database and builds the whole table before
//! installing it, so a corrupt or truncated file never leaves a partial table
//! behind.
//!
//! Remaining lifetimes are carried over by moving each deadline from the
//! saving clock to the loading clock. This is exact while the clock keeps
//! running between save and load. After a restart the clock begins again
//! from zero and the carried-over lifetimes drift by however long the device
//! was off.

use super::Database;
use crate::config::TEMP_SUFFIX;
use crate::error::StoreError;
use crate::snapshot::{self, SnapshotHeader};
use eyre::{bail, Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

impl Database {
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut guard = self.table.lock();
        let Some(table) = guard.as_mut() else {
            bail!(StoreError::NoTable);
        };

        let now = self.now();
        let purged = table.purge_expired(now);
        let header = SnapshotHeader::for_table(table, now)?;

        let tmp = temp_path(path);
        let mut writer = self
            .storage
            .create(&tmp)
            .wrap_err(StoreError::FileOpen)?;
        let written = snapshot::write_table(&mut writer, &header, table);
        drop(writer);
        if let Err(e) = written {
            warn!(path = %tmp.display(), error = %e, "snapshot write failed");
            let _ = self.storage.remove(&tmp);
            return Err(e);
        }

        if self.storage.exists(path) {
            if let Err(e) = self.storage.remove(path) {
                let _ = self.storage.remove(&tmp);
                return Err(e).wrap_err(StoreError::FileWrite);
            }
        }
        if let Err(e) = self.storage.rename(&tmp, path) {
            let _ = self.storage.remove(&tmp);
            return Err(e).wrap_err(StoreError::FileWrite);
        }

        info!(
            path = %path.display(),
            records = header.record_count(),
            purged,
            "snapshot saved"
        );
        Ok(())
    }

    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut guard = self.table.lock();
        if guard.is_some() {
            bail!(StoreError::TableExists);
        }
        if !self.storage.exists(path) {
            bail!(StoreError::FileOpen);
        }

        let mut reader = self.storage.open(path).wrap_err(StoreError::FileOpen)?;
        let table = snapshot::read_table(
            &mut reader,
            self.now(),
            &self.heap,
            self.initial_capacity,
        )
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "snapshot rejected"))?;

        info!(
            path = %path.display(),
            columns = table.schema().len(),
            records = table.record_count(),
            "snapshot loaded"
        );
        *guard = Some(table);
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}
