//! # Type System for EmberDB
//!
//! This module holds everything that describes or manipulates a single field:
//! column definitions, the caller-facing literal, the stored value and the
//! codec that moves between them.
//!
//! ## Module Structure
//!
//! - `data_type`: `ColumnType` discriminant (also the snapshot type byte)
//! - `column`: `Column` definition (name + type)
//! - `value`: borrowed input literal `Value<'a>`
//! - `field`: owned stored value `FieldValue`
//! - `operator`: `CompareOp` and `MathOp`
//! - `codec`: encode, compare and arithmetic
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `ColumnType` | One of six scalar types |
//! | `Column` | Named, typed slot common to every record |
//! | `Value<'a>` | Literal passed into inserts, updates and filters |
//! | `FieldValue` | Value stored in a record, one variant per type |
//!
//! ## Usage
//!
//! ```ignore
//! use emberdb::types::{codec, ColumnType, CompareOp, Value};
//!
//! let field = codec::encode(ColumnType::Int32, &Value::Int32(42))?;
//! assert!(codec::compare(&field, &Value::Int32(40), CompareOp::Greater)?);
//! ```

pub mod codec;
mod column;
mod data_type;
mod field;
mod operator;
mod value;

pub use column::Column;
pub use data_type::ColumnType;
pub use field::FieldValue;
pub use operator::{CompareOp, MathOp};
pub use value::Value;
