//! # Text Parsing Helpers
//!
//! Stateless conversions between human-readable text and stored values.
//!
//! ## MAC Addresses
//!
//! ```ignore
//! use emberdb::parsing::{format_mac_address, parse_mac_address};
//!
//! let mac = parse_mac_address("AA-BB-CC-00-11-22")?;
//! assert_eq!(format_mac_address(&mac), "aa:bb:cc:00:11:22");
//! ```

mod mac;

pub use mac::{format_mac_address, parse_mac_address};
