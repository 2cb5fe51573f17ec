//! # Field Codec
//!
//! Pure, stateless functions that turn caller literals into stored fields,
//! evaluate predicates against stored fields and apply in-place arithmetic.
//!
//! ## Encoding Rules
//!
//! | Column type | Accepted literal | Notes |
//! |-------------|------------------|-------|
//! | Int32 | `Value::Int32` | |
//! | MacAddress | `Value::MacAddress` | |
//! | String | `Value::Text` | truncated to 255 bytes on a char boundary |
//! | Epoch | `Value::Epoch` | |
//! | Bool | `Value::Bool` | |
//! | Float32 | `Value::Float32` | |
//!
//! `Value::Null` is always rejected with `InvalidValue`. Any other mismatch
//! between literal and column type is rejected with `InvalidType`.
//!
//! ## Operator Support
//!
//! ```text
//!              =  !=  >  <  >=  <=    + - * / %
//! Int32        x  x   x  x  x   x     x x x x x   (wrapping)
//! Epoch        x  x   x  x  x   x     x x x x x   (unsigned compare, i32 math)
//! Float32      x  x   x  x  x   x     x x x x x   (IEEE-754)
//! MacAddress   x  x
//! String       x  x
//! Bool         x  x
//! ```
//!
//! Unsupported ordering operators fail with `InvalidOperation`, unsupported
//! arithmetic fails with `InvalidType`, and a zero operand for `/` or `%`
//! fails with `InvalidOperation` without touching the field.

use super::{ColumnType, CompareOp, FieldValue, MathOp, Value};
use crate::config::MAX_STRING_LEN;
use crate::error::StoreError;
use eyre::{bail, ensure, Result};

/// Converts a literal into an owned field for a column of `column_type`.
pub fn encode(column_type: ColumnType, value: &Value<'_>) -> Result<FieldValue> {
    let field = match (column_type, value) {
        (_, Value::Null) => bail!(StoreError::InvalidValue),
        (ColumnType::Int32, Value::Int32(v)) => FieldValue::Int32(*v),
        (ColumnType::MacAddress, Value::MacAddress(m)) => FieldValue::MacAddress(*m),
        (ColumnType::String, Value::Text(s)) => FieldValue::Text(copy_text(s)?),
        (ColumnType::Epoch, Value::Epoch(v)) => FieldValue::Epoch(*v),
        (ColumnType::Bool, Value::Bool(b)) => FieldValue::Bool(*b),
        (ColumnType::Float32, Value::Float32(f)) => FieldValue::Float32(*f),
        _ => bail!(StoreError::InvalidType),
    };
    Ok(field)
}

/// Returns the longest prefix of `s` that is at most `MAX_STRING_LEN` bytes
/// and ends on a char boundary.
pub fn truncate_text(s: &str) -> &str {
    if s.len() <= MAX_STRING_LEN {
        return s;
    }
    let mut end = MAX_STRING_LEN;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn copy_text(s: &str) -> Result<Box<str>> {
    let s = truncate_text(s);
    let mut buf = String::new();
    if buf.try_reserve_exact(s.len()).is_err() {
        bail!(StoreError::OutOfMemory);
    }
    buf.push_str(s);
    Ok(buf.into_boxed_str())
}

/// Checks that `op` is defined for `column_type`.
pub fn check_operator(column_type: ColumnType, op: CompareOp) -> Result<()> {
    ensure!(
        op.is_equality() || column_type.is_ordered(),
        StoreError::InvalidOperation
    );
    Ok(())
}

/// Checks that `value` can be compared against a column of `column_type`.
pub fn check_literal(column_type: ColumnType, value: &Value<'_>) -> Result<()> {
    match value.column_type() {
        None => bail!(StoreError::InvalidValue),
        Some(t) if t != column_type => bail!(StoreError::InvalidType),
        Some(_) => Ok(()),
    }
}

/// Evaluates `field <op> literal`.
pub fn compare(field: &FieldValue, literal: &Value<'_>, op: CompareOp) -> Result<bool> {
    let column_type = field.column_type();
    check_literal(column_type, literal)?;
    check_operator(column_type, op)?;

    let result = match (field, literal) {
        (FieldValue::Int32(a), Value::Int32(b)) => apply_ordering(a, b, op),
        (FieldValue::Epoch(a), Value::Epoch(b)) => apply_ordering(a, b, op),
        (FieldValue::Float32(a), Value::Float32(b)) => apply_ordering(a, b, op),
        (FieldValue::MacAddress(a), Value::MacAddress(b)) => apply_equality(a == b, op),
        (FieldValue::Text(a), Value::Text(b)) => apply_equality(**a == **b, op),
        (FieldValue::Bool(a), Value::Bool(b)) => apply_equality(a == b, op),
        _ => bail!(StoreError::InvalidType),
    };
    Ok(result)
}

fn apply_ordering<T: PartialOrd>(a: &T, b: &T, op: CompareOp) -> bool {
    match op {
        CompareOp::Equal => a == b,
        CompareOp::NotEqual => a != b,
        CompareOp::Greater => a > b,
        CompareOp::Less => a < b,
        CompareOp::GreaterEqual => a >= b,
        CompareOp::LessEqual => a <= b,
    }
}

fn apply_equality(equal: bool, op: CompareOp) -> bool {
    match op {
        CompareOp::NotEqual => !equal,
        _ => equal,
    }
}

/// Checks that `op` with `operand` can be applied to a column of
/// `column_type` without touching any data.
pub fn check_math(column_type: ColumnType, op: MathOp, operand: i32) -> Result<()> {
    ensure!(column_type.is_numeric(), StoreError::InvalidType);
    ensure!(
        !(op.rejects_zero() && operand == 0),
        StoreError::InvalidOperation
    );
    Ok(())
}

/// Applies `field = field <op> operand` in place.
pub fn apply_math(field: &mut FieldValue, op: MathOp, operand: i32) -> Result<()> {
    check_math(field.column_type(), op, operand)?;

    match field {
        FieldValue::Int32(v) => *v = int_math(*v, op, operand),
        FieldValue::Epoch(v) => *v = int_math(*v as i32, op, operand) as u32,
        FieldValue::Float32(v) => *v = float_math(*v, op, operand as f32),
        _ => bail!(StoreError::InvalidType),
    }
    Ok(())
}

fn int_math(a: i32, op: MathOp, b: i32) -> i32 {
    match op {
        MathOp::Add => a.wrapping_add(b),
        MathOp::Subtract => a.wrapping_sub(b),
        MathOp::Multiply => a.wrapping_mul(b),
        MathOp::Divide => a.wrapping_div(b),
        MathOp::Modulo => a.wrapping_rem(b),
    }
}

fn float_math(a: f32, op: MathOp, b: f32) -> f32 {
    match op {
        MathOp::Add => a + b,
        MathOp::Subtract => a - b,
        MathOp::Multiply => a * b,
        MathOp::Divide => a / b,
        MathOp::Modulo => a - (a / b).trunc() * b,
    }
}
