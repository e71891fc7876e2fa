use std::{collections::HashMap, sync::Arc};

use arrow::datatypes::{DataType, Field, Schema as ArrowSchema, SchemaRef, TimeUnit};
use thiserror::Error;

use crate::logging::duckrow_log;

/// Well-known property key holding the comma-separated column name list.
pub const COLUMNS_PROPERTY: &str = "columns";

/// Well-known property key holding the comma-separated column type list.
pub const COLUMN_TYPES_PROPERTY: &str = "columns.types";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("column list has {names} names but type list has {types} types")]
    MismatchedLengths { names: usize, types: usize },
    #[error("unknown column type: {0:?}")]
    UnknownType(String),
    #[error("empty column name at position {0}")]
    EmptyColumnName(usize),
    #[error("missing property: {0:?}")]
    MissingProperty(&'static str),
}

/// The caller-declared, ordered column schema.
///
/// Column order here defines the slot order of every projected row. The
/// declared types are descriptive only; projection passes record values
/// through without coercing them to these types.
#[derive(Debug, Clone)]
pub struct DeclaredSchema {
    columns: Vec<String>,
    arrow_schema: SchemaRef,
}

impl DeclaredSchema {
    /// Build a schema from order-aligned column names and types.
    ///
    /// # Errors
    ///
    /// Returns an error if the two lists differ in length or a name is
    /// empty. No partially-built schema escapes on failure.
    pub fn try_new(columns: Vec<String>, types: Vec<DataType>) -> Result<Self, ConfigError> {
        if columns.len() != types.len() {
            return Err(ConfigError::MismatchedLengths {
                names: columns.len(),
                types: types.len(),
            });
        }
        if let Some(position) = columns.iter().position(|name| name.is_empty()) {
            return Err(ConfigError::EmptyColumnName(position));
        }

        // Every slot is nullable: an absent column always projects as null.
        let fields = columns
            .iter()
            .zip(types)
            .map(|(name, data_type)| Field::new(name, data_type, true))
            .collect::<Vec<_>>();
        let arrow_schema = Arc::new(ArrowSchema::new(fields));

        duckrow_log!(
            log::Level::Debug,
            "init",
            "declared {} columns: {:?}",
            columns.len(),
            columns,
        );

        Ok(Self {
            columns,
            arrow_schema,
        })
    }

    /// Parse a schema from two comma-separated lists, e.g.
    /// `("boolean1,long1,int1", "boolean,bigint,int")`.
    ///
    /// Recognized type names are the usual SQL-flavored primitives:
    /// `boolean`, `tinyint`, `smallint`, `int`, `bigint`, `float`, `double`,
    /// `string`, `binary`, `date` and `timestamp` (case-insensitive).
    pub fn parse(names: &str, types: &str) -> Result<Self, ConfigError> {
        let columns = names
            .split(',')
            .map(|name| name.trim().to_string())
            .collect::<Vec<_>>();
        let types = types
            .split(',')
            .map(|ty| parse_type(ty.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(columns, types)
    }

    /// Parse a schema from a property bag carrying [`COLUMNS_PROPERTY`] and
    /// [`COLUMN_TYPES_PROPERTY`].
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let names = properties
            .get(COLUMNS_PROPERTY)
            .ok_or(ConfigError::MissingProperty(COLUMNS_PROPERTY))?;
        let types = properties
            .get(COLUMN_TYPES_PROPERTY)
            .ok_or(ConfigError::MissingProperty(COLUMN_TYPES_PROPERTY))?;
        Self::parse(names, types)
    }

    /// Declared column names, in slot order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no columns were declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The [`arrow::datatypes::Schema`] describing the projected row layout.
    pub fn arrow_schema(&self) -> &SchemaRef {
        &self.arrow_schema
    }

    /// Slot position of the column `name`, matched case-insensitively.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let folded = name.to_lowercase();
        self.columns
            .iter()
            .position(|column| column.to_lowercase() == folded)
    }
}

fn parse_type(name: &str) -> Result<DataType, ConfigError> {
    match name.to_lowercase().as_str() {
        "boolean" => Ok(DataType::Boolean),
        "tinyint" => Ok(DataType::Int8),
        "smallint" => Ok(DataType::Int16),
        "int" => Ok(DataType::Int32),
        "bigint" => Ok(DataType::Int64),
        "float" => Ok(DataType::Float32),
        "double" => Ok(DataType::Float64),
        "string" => Ok(DataType::Utf8),
        "binary" => Ok(DataType::Binary),
        "date" => Ok(DataType::Date32),
        "timestamp" => Ok(DataType::Timestamp(TimeUnit::Millisecond, None)),
        _ => Err(ConfigError::UnknownType(name.to_string())),
    }
}
