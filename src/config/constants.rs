//! # EmberDB Configuration Constants
//!
//! This module centralizes all configuration constants, grouping interdependent
//! values together and documenting their relationships. Constants that depend
//! on each other are co-located to prevent mismatch bugs.
//!
//! ## Dependency Graph
//!
//! ```text
//! MAX_STRING_LEN (255)
//!       │
//!       └─> snapshot string length prefix is a single u8 (must fit)
//!
//! MAX_COLUMN_NAME_LEN (31)
//!       │
//!       └─> COLUMN_NAME_FIELD_LEN (32, NUL padded on disk)
//!             └─> COLUMN_ENTRY_SIZE (33 = name field + type byte)
//!
//! MAX_COLUMNS (255)
//!       │
//!       └─> snapshot column count is a single u8
//!
//! MAX_SNAPSHOT_RECORDS (65,535)
//!       │
//!       └─> snapshot record count is a little-endian u16
//! ```
//!
//! ## Critical Invariants
//!
//! These invariants are enforced by compile-time assertions:
//!
//! 1. `MAX_STRING_LEN <= u8::MAX` (length prefix fits one byte)
//! 2. `MAX_COLUMN_NAME_LEN < COLUMN_NAME_FIELD_LEN` (room for the NUL terminator)
//! 3. `MAX_SNAPSHOT_RECORDS == u16::MAX` (record count fits the header field)

// ============================================================================
// VALUE LIMITS
// ============================================================================

/// Maximum stored length of a String field in bytes. Longer input is truncated.
pub const MAX_STRING_LEN: usize = 255;

/// Maximum length of a column name in bytes.
pub const MAX_COLUMN_NAME_LEN: usize = 31;

/// Maximum number of columns in a schema.
pub const MAX_COLUMNS: usize = u8::MAX as usize;

/// Maximum time-to-live accepted by insert (30 days in milliseconds).
pub const MAX_TTL_MS: u32 = 30 * 24 * 60 * 60 * 1000;

/// Expiry value meaning "never expires".
pub const NO_EXPIRY: u32 = 0;

const _: () = assert!(
    MAX_STRING_LEN <= u8::MAX as usize,
    "MAX_STRING_LEN must fit the one-byte snapshot length prefix"
);

// ============================================================================
// RECORD STORE CONFIGURATION
// ============================================================================

/// Number of record slots allocated when a table is created.
/// The backing array doubles from here when it fills up.
pub const INITIAL_RECORD_CAPACITY: usize = 10;

// ============================================================================
// HEAP GUARD CONFIGURATION
// ============================================================================

/// Minimum free heap (bytes) that must remain for an allocating operation
/// to proceed.
pub const DEFAULT_MIN_FREE_HEAP: usize = 30_000;

// ============================================================================
// SNAPSHOT FORMAT
// These constants are tightly coupled to the on-disk layout
// ============================================================================

/// Magic bytes at the start of every snapshot.
pub const SNAPSHOT_MAGIC: &[u8; 4] = b"IMDB";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Size of the fixed snapshot header in bytes.
/// magic(4) + version(1) + column_count(1) + record_count(2) + save_timestamp(4)
pub const SNAPSHOT_HEADER_SIZE: usize = 12;

/// Width of the NUL-padded column name field.
pub const COLUMN_NAME_FIELD_LEN: usize = 32;

/// Size of one schema entry: name field plus type byte.
pub const COLUMN_ENTRY_SIZE: usize = COLUMN_NAME_FIELD_LEN + 1;

/// Maximum record count representable in a snapshot.
pub const MAX_SNAPSHOT_RECORDS: usize = 65_535;

/// Suffix appended to the target path while a snapshot is being written.
pub const TEMP_SUFFIX: &str = ".tmp";

const _: () = assert!(
    MAX_COLUMN_NAME_LEN < COLUMN_NAME_FIELD_LEN,
    "column names need a NUL terminator inside the fixed name field"
);

const _: () = assert!(
    MAX_SNAPSHOT_RECORDS == u16::MAX as usize,
    "MAX_SNAPSHOT_RECORDS must match the u16 record count field"
);

const _: () = assert!(
    COLUMN_ENTRY_SIZE == COLUMN_NAME_FIELD_LEN + 1,
    "COLUMN_ENTRY_SIZE derivation mismatch"
);
