use crate::error::StoreError;
use crate::types::FieldValue;
use eyre::{bail, Result};

/// One record copied out of the table. Ownership passes to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub values: Vec<FieldValue>,
}

impl Row {
    pub fn new(values: Vec<FieldValue>) -> Self {
        Self { values }
    }

    /// Copies `fields` into a new row, failing with `OutOfMemory` if the
    /// row buffer cannot be allocated.
    pub(crate) fn try_from_fields(fields: &[FieldValue]) -> Result<Self> {
        let mut values = Vec::new();
        if values.try_reserve_exact(fields.len()).is_err() {
            bail!(StoreError::OutOfMemory);
        }
        values.extend_from_slice(fields);
        Ok(Self { values })
    }

    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }

    pub fn get_int32(&self, index: usize) -> Result<i32> {
        match self.get(index) {
            Some(FieldValue::Int32(v)) => Ok(*v),
            Some(other) => bail!("expected INT32, got {:?}", other),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn get_epoch(&self, index: usize) -> Result<u32> {
        match self.get(index) {
            Some(FieldValue::Epoch(v)) => Ok(*v),
            Some(other) => bail!("expected EPOCH, got {:?}", other),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn get_float32(&self, index: usize) -> Result<f32> {
        match self.get(index) {
            Some(FieldValue::Float32(v)) => Ok(*v),
            Some(other) => bail!("expected FLOAT32, got {:?}", other),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn get_bool(&self, index: usize) -> Result<bool> {
        match self.get(index) {
            Some(FieldValue::Bool(v)) => Ok(*v),
            Some(other) => bail!("expected BOOL, got {:?}", other),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn get_text(&self, index: usize) -> Result<&str> {
        match self.get(index) {
            Some(FieldValue::Text(v)) => Ok(v),
            Some(other) => bail!("expected STRING, got {:?}", other),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn get_mac_address(&self, index: usize) -> Result<[u8; 6]> {
        match self.get(index) {
            Some(FieldValue::MacAddress(v)) => Ok(*v),
            Some(other) => bail!("expected MAC, got {:?}", other),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn column_count(&self) -> usize {
        self.values.len()
    }
}
