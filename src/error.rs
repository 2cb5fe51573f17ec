//! # Error Kinds
//!
//! Every fallible EmberDB operation returns `eyre::Result<T>`. The report
//! always carries exactly one [`StoreError`] describing *what kind* of
//! failure occurred, either as the root error (`bail!(StoreError::NoTable)`)
//! or as context wrapped around an underlying I/O error
//! (`wrap_err(StoreError::FileWrite)`).
//!
//! Callers that need to branch on the kind recover it with
//! [`StoreError::of`]:
//!
//! ```ignore
//! match db.select_one("name", "id", Value::Int32(7)) {
//!     Ok(value) => println!("{value}"),
//!     Err(e) if StoreError::of(&e) == Some(StoreError::NoRecords) => {}
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! ## Taxonomy
//!
//! | Category | Kinds |
//! |----------|-------|
//! | Resource exhaustion | `OutOfMemory`, `HeapLimit` |
//! | Schema / precondition | `TableExists`, `NoTable`, `ColumnNotFound`, `InvalidType`, `ColumnCountMismatch` |
//! | Invalid input | `InvalidValue`, `InvalidOperation`, `InvalidMacFormat` |
//! | Not found | `NoRecords` |
//! | Persistence | `FileOpen`, `FileWrite`, `FileRead`, `CorruptFile` |

/// Fixed set of failure kinds reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreError {
    OutOfMemory,
    HeapLimit,
    TableExists,
    NoTable,
    InvalidType,
    InvalidValue,
    ColumnCountMismatch,
    ColumnNotFound,
    InvalidOperation,
    NoRecords,
    InvalidMacFormat,
    FileOpen,
    FileWrite,
    FileRead,
    CorruptFile,
}

impl StoreError {
    /// Extracts the kind carried by a report, if it came from this crate.
    pub fn of(report: &eyre::Report) -> Option<StoreError> {
        report.downcast_ref::<StoreError>().copied()
    }

    /// Human-readable description of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreError::OutOfMemory => "Out of memory",
            StoreError::HeapLimit => "Heap limit exceeded",
            StoreError::TableExists => "Table already exists",
            StoreError::NoTable => "No table exists",
            StoreError::InvalidType => "Invalid data type",
            StoreError::InvalidValue => "Invalid value",
            StoreError::ColumnCountMismatch => "Column count mismatch",
            StoreError::ColumnNotFound => "Column not found",
            StoreError::InvalidOperation => "Invalid operation",
            StoreError::NoRecords => "No records found",
            StoreError::InvalidMacFormat => "Invalid MAC address format",
            StoreError::FileOpen => "Failed to open file",
            StoreError::FileWrite => "Failed to write to file",
            StoreError::FileRead => "Failed to read from file",
            StoreError::CorruptFile => "Corrupt or invalid file format",
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for StoreError {}

/// Describes the outcome of an operation: `"OK"` on success, otherwise the
/// description of the carried [`StoreError`].
pub fn describe_error<T>(result: &eyre::Result<T>) -> &'static str {
    match result {
        Ok(_) => "OK",
        Err(report) => StoreError::of(report)
            .map(|kind| kind.as_str())
            .unwrap_or("Unknown error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::{bail, WrapErr};

    fn fails_with(kind: StoreError) -> eyre::Result<()> {
        bail!(kind)
    }

    #[test]
    fn test_kind_survives_bail() {
        let err = fails_with(StoreError::NoTable).unwrap_err();
        assert_eq!(StoreError::of(&err), Some(StoreError::NoTable));
    }

    #[test]
    fn test_kind_survives_wrap_err_over_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let result: eyre::Result<()> = Err(io).wrap_err(StoreError::FileWrite);
        let err = result.unwrap_err();
        assert_eq!(StoreError::of(&err), Some(StoreError::FileWrite));
        assert!(err.root_cause().to_string().contains("disk full"));
    }

    #[test]
    fn test_foreign_report_has_no_kind() {
        let err = eyre::eyre!("something else");
        assert_eq!(StoreError::of(&err), None);
    }

    #[test]
    fn test_describe_error() {
        assert_eq!(describe_error(&Ok::<_, eyre::Report>(1)), "OK");
        assert_eq!(
            describe_error(&fails_with(StoreError::HeapLimit)),
            "Heap limit exceeded"
        );
        assert_eq!(
            describe_error::<()>(&Err(eyre::eyre!("x"))),
            "Unknown error"
        );
    }

    #[test]
    fn test_display_matches_description() {
        assert_eq!(StoreError::CorruptFile.to_string(), "Corrupt or invalid file format");
    }
}
