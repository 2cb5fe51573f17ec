//! # Internal Macros
//!
//! ## le_getters!
//!
//! Snapshot headers are zerocopy structs read straight out of the file
//! buffer, so every multi-byte field is a `zerocopy::little_endian` wrapper
//! rather than a plain integer. `le_getters!` emits one read-only accessor
//! per wrapped field that returns the native value. Headers are built whole
//! through their constructor and never patched in place, so no setters are
//! generated.
//!
//! ```ignore
//! impl SnapshotHeader {
//!     le_getters! {
//!         record_count: u16,
//!         save_timestamp: u32,
//!     }
//! }
//!
//! assert_eq!(header.record_count(), 3);
//! ```

/// Generates native-integer getters for little-endian zerocopy fields.
macro_rules! le_getters {
    ($($field:ident : $ty:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $field(&self) -> $ty {
                self.$field.get()
            }
        )*
    };
}
