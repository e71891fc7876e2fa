mod value;

use arrow::datatypes::SchemaRef;
use thiserror::Error;
pub use value::*;

/// Positional access into a structured record together with its runtime
/// schema.
///
/// This is the seam between the projector and whatever codec actually reads
/// records: a projector only needs the ordered field list (names and
/// positions, via [`Record::schema`]) and position-based value access. Any
/// record container can participate by implementing these two operations.
pub trait Record {
    /// The record's own schema, as discovered at read time. Field positions
    /// follow schema order.
    fn schema(&self) -> &SchemaRef;

    /// Value at `position` in schema order, `None` when the position is out
    /// of bounds.
    fn get(&self, position: usize) -> Option<&Value>;
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("schema declares {fields} fields but record carries {values} values")]
    ArityMismatch { fields: usize, values: usize },
}

/// A schema-carrying record of dynamically-typed values.
#[derive(Debug, Clone)]
pub struct DynRecord {
    schema: SchemaRef,
    values: Vec<Value>,
}

impl DynRecord {
    /// Create a new `DynRecord` without validation.
    pub fn new(schema: SchemaRef, values: Vec<Value>) -> Self {
        Self { schema, values }
    }

    /// Create a new `DynRecord` with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the value count does not match the schema's field
    /// count.
    pub fn try_new(schema: SchemaRef, values: Vec<Value>) -> Result<Self, RecordError> {
        if schema.fields().len() != values.len() {
            return Err(RecordError::ArityMismatch {
                fields: schema.fields().len(),
                values: values.len(),
            });
        }
        Ok(Self { schema, values })
    }

    /// All values in schema order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Record for DynRecord {
    fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    fn get(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::datatypes::{DataType, Field, Schema};

    use super::{DynRecord, Record, RecordError, Value};

    fn two_field_schema() -> Arc<Schema> {
        Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, true),
        ]))
    }

    #[test]
    fn try_new_rejects_arity_mismatch() {
        let err = DynRecord::try_new(two_field_schema(), vec![Value::Int64(1)])
            .expect_err("one value against two fields");
        assert!(matches!(
            err,
            RecordError::ArityMismatch {
                fields: 2,
                values: 1
            }
        ));
    }

    #[test]
    fn positional_access() {
        let record = DynRecord::try_new(
            two_field_schema(),
            vec![Value::Int64(7), Value::from("seven")],
        )
        .unwrap();

        assert_eq!(record.get(0), Some(&Value::Int64(7)));
        assert_eq!(record.get(1), Some(&Value::from("seven")));
        assert_eq!(record.get(2), None);
    }
}
