use super::ValueRecord;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A value bound to a statement parameter or returned in a row.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Double precision float
    F64(f64),

    /// Fixed-point number
    Decimal(Decimal),

    /// String value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// Timestamp without time zone
    DateTime(NaiveDateTime),

    /// Timestamp in UTC
    Timestamp(DateTime<Utc>),

    /// Signed duration
    Duration(TimeDelta),

    Uuid(Uuid),

    /// Semi-structured value
    Json(serde_json::Value),

    /// Null value
    #[default]
    Null,

    /// Record value
    Record(ValueRecord),

    /// A list of values of the same type
    List(Vec<Value>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    /// The number of microseconds in a duration value.
    pub fn duration_micros(&self) -> Option<i64> {
        match self {
            Self::Duration(delta) => delta.num_microseconds(),
            _ => None,
        }
    }

    /// Name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::Decimal(_) => "Decimal",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::DateTime(_) => "DateTime",
            Self::Timestamp(_) => "Timestamp",
            Self::Duration(_) => "Duration",
            Self::Uuid(_) => "Uuid",
            Self::Json(_) => "Json",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::List(_) => "List",
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<Decimal> for Value {
    fn from(src: Decimal) -> Self {
        Self::Decimal(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl From<NaiveTime> for Value {
    fn from(src: NaiveTime) -> Self {
        Self::Time(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::DateTime(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::Timestamp(src)
    }
}

impl From<TimeDelta> for Value {
    fn from(src: TimeDelta) -> Self {
        Self::Duration(src)
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Self {
        Self::Json(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
