use crate::error::StoreError;
use eyre::{bail, Result};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use sysinfo::System;
use tracing::warn;

/// Reports how many heap bytes are currently free.
pub trait HeapProbe: Send + Sync {
    fn free_bytes(&self) -> usize;
}

impl<F> HeapProbe for F
where
    F: Fn() -> usize + Send + Sync,
{
    fn free_bytes(&self) -> usize {
        self()
    }
}

/// Probe reading available system memory.
pub struct SystemHeap {
    sys: Mutex<System>,
}

impl SystemHeap {
    pub fn new() -> Self {
        Self {
            sys: Mutex::new(System::new()),
        }
    }
}

impl Default for SystemHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapProbe for SystemHeap {
    fn free_bytes(&self) -> usize {
        let mut sys = self.sys.lock();
        sys.refresh_memory();
        usize::try_from(sys.available_memory()).unwrap_or(usize::MAX)
    }
}

/// Refuses allocation when free heap is at or below `min_free` bytes.
#[derive(Clone)]
pub struct HeapGuard {
    probe: Arc<dyn HeapProbe>,
    min_free: usize,
}

impl HeapGuard {
    pub fn new(probe: Arc<dyn HeapProbe>, min_free: usize) -> Self {
        Self { probe, min_free }
    }

    pub fn min_free(&self) -> usize {
        self.min_free
    }

    pub fn free_bytes(&self) -> usize {
        self.probe.free_bytes()
    }

    pub fn check(&self) -> Result<()> {
        let free = self.probe.free_bytes();
        if free <= self.min_free {
            warn!(free, min_free = self.min_free, "heap headroom exhausted");
            bail!(StoreError::HeapLimit);
        }
        Ok(())
    }
}

impl fmt::Debug for HeapGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapGuard")
            .field("min_free", &self.min_free)
            .finish_non_exhaustive()
    }
}
