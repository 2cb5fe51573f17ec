//! # File Storage
//!
//! The snapshot code reaches the file system only through the [`Storage`]
//! trait: open for write, open for read, existence check, remove and rename.
//! That is exactly what an atomic save needs:
//!
//! ```text
//!   create("data.imdb.tmp") ─► write snapshot ─► flush
//!        │ failure: remove("data.imdb.tmp"), previous snapshot untouched
//!        ▼
//!   remove("data.imdb") ─► rename("data.imdb.tmp", "data.imdb")
//! ```
//!
//! `FsStorage` is the default and talks to `std::fs` with buffered handles.
//! Tests substitute their own implementation to inject write or rename
//! failures.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub trait Storage: Send + Sync {
    /// Creates or truncates `path` for writing.
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>>;

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;

    fn exists(&self, path: &Path) -> bool;

    fn remove(&self, path: &Path) -> io::Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Storage on the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}
