//! # EmberDB Configuration Module
//!
//! This module centralizes all configuration constants for EmberDB. Constants
//! are grouped by their functional area and interdependencies are documented
//! and enforced through compile-time assertions.
//!
//! Runtime knobs (heap threshold, clock, storage backend, initial capacity)
//! live on `DatabaseBuilder`; everything here is fixed at compile time.
//!
//! ## Module Organization
//!
//! - [`constants`]: All numeric configuration values with dependency documentation

pub mod constants;
pub use constants::*;
