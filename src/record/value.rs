use arrow::datatypes::{DataType, TimeUnit};

/// A dynamically-typed cell value carried by a [`DynRecord`](super::DynRecord).
///
/// Covers the primitive column types the declared-schema type strings can
/// name. Values pass through projection untouched; no coercion between the
/// declared type and the value's own type is attempted.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or unresolved cell.
    Null,
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Binary(Vec<u8>),
    /// Days since the UNIX epoch.
    Date32(i32),
    /// Milliseconds since the UNIX epoch.
    Timestamp(i64),
}

impl Value {
    /// Get the arrow data type of the value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Null,
            Value::Boolean(_) => DataType::Boolean,
            Value::Int8(_) => DataType::Int8,
            Value::Int16(_) => DataType::Int16,
            Value::Int32(_) => DataType::Int32,
            Value::Int64(_) => DataType::Int64,
            Value::Float32(_) => DataType::Float32,
            Value::Float64(_) => DataType::Float64,
            Value::String(_) => DataType::Utf8,
            Value::Binary(_) => DataType::Binary,
            Value::Date32(_) => DataType::Date32,
            Value::Timestamp(_) => DataType::Timestamp(TimeUnit::Millisecond, None),
        }
    }

    /// Check if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
