use super::Value;

use std::ops;

/// A positional record of values, such as a fetched row.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> ValueRecord {
        ValueRecord { fields }
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.fields
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Self {
        Value::Record(value)
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type IntoIter = std::slice::Iter<'a, Value>;
    type Item = &'a Value;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
