use once_cell::unsync::OnceCell;
use thiserror::Error;

use crate::{
    logging::duckrow_log,
    record::{Record, Value},
    resolve::ColumnMapping,
    schema::DeclaredSchema,
};

#[derive(Debug, Error)]
pub enum ProjectError {
    /// The cached mapping references a position beyond the record's field
    /// count. The record schema must have drifted since the first record;
    /// one projector instance serves records of one schema only.
    #[error("mapping references record position {position} but the record has {fields} fields")]
    SchemaMismatch { position: usize, fields: usize },
}

/// Projects incoming records into rows laid out in declared column order.
///
/// The column mapping is resolved from the first record's schema and cached
/// for the life of the instance; later records are assumed to share that
/// schema. The row buffer is allocated once, pre-sized to the declared
/// column count, and rewritten in place on every [`project`](Self::project)
/// call, so values must be copied out before the next call.
///
/// A projector serves exactly one sequential caller; neither the mapping
/// cache nor the row buffer is synchronized.
#[derive(Debug)]
pub struct RowProjector {
    schema: DeclaredSchema,
    mapping: OnceCell<ColumnMapping>,
    row: Vec<Value>,
}

impl RowProjector {
    /// Create a projector for the declared column schema.
    pub fn new(schema: DeclaredSchema) -> Self {
        let row = vec![Value::Null; schema.len()];
        Self {
            schema,
            mapping: OnceCell::new(),
            row,
        }
    }

    /// The declared column schema this projector was configured with.
    pub fn schema(&self) -> &DeclaredSchema {
        &self.schema
    }

    /// Declared column names, in output slot order.
    pub fn columns(&self) -> &[String] {
        self.schema.columns()
    }

    /// The cached column mapping, once the first record has been seen.
    pub fn mapping(&self) -> Option<&ColumnMapping> {
        self.mapping.get()
    }

    /// Project `record` into the reusable row buffer.
    ///
    /// Slots whose column is absent from the record schema are set to
    /// [`Value::Null`]; everything else is a raw pass-through of the
    /// record's value at the mapped position.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::SchemaMismatch`] when a mapped position falls
    /// outside the record, which can only happen if the record schema
    /// changed after the mapping was cached.
    pub fn project<R: Record>(&mut self, record: &R) -> Result<RowView<'_>, ProjectError> {
        let mapping = self
            .mapping
            .get_or_init(|| ColumnMapping::resolve(record.schema(), self.schema.columns()));

        for (slot, entry) in mapping.entries().iter().enumerate() {
            self.row[slot] = match entry {
                None => Value::Null,
                Some(position) => match record.get(*position) {
                    Some(value) => value.clone(),
                    None => {
                        let fields = record.schema().fields().len();
                        duckrow_log!(
                            log::Level::Error,
                            "project",
                            "record schema drift: position {} out of {} fields",
                            position,
                            fields,
                        );
                        return Err(ProjectError::SchemaMismatch {
                            position: *position,
                            fields,
                        });
                    }
                },
            };
        }

        Ok(RowView {
            schema: &self.schema,
            values: &self.row,
        })
    }
}

/// A projected row in declared column order.
///
/// Borrows the projector's reusable buffer; the values are only valid until
/// the next projection call.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    schema: &'a DeclaredSchema,
    values: &'a [Value],
}

impl<'a> RowView<'a> {
    /// Value of the declared column `name`, matched case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&'a Value> {
        self.schema.index_of(name).map(|slot| &self.values[slot])
    }

    /// Value at the declared slot `position`.
    pub fn by_position(&self, position: usize) -> Option<&'a Value> {
        self.values.get(position)
    }

    /// All values, in declared column order.
    pub fn as_slice(&self) -> &'a [Value] {
        self.values
    }

    /// Number of slots in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no slots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
