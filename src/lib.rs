//! Duck-typed row projection for dynamically-typed records.
//!
//! A caller declares an ordered column schema up front (names and types) and
//! feeds in structured records whose own schema is only discovered when the
//! first record arrives. [`RowProjector`] resolves the declared column names
//! against the record schema once, case-insensitively, caches that mapping
//! for the life of the instance, and rewrites every record into a reusable
//! row buffer laid out in declared column order. Columns absent from the
//! record schema project as [`Value::Null`] rather than erroring.
//!
//! ```
//! use std::sync::Arc;
//!
//! use arrow::datatypes::{DataType, Field, Schema};
//! use duckrow::{DeclaredSchema, DynRecord, RowProjector, Value};
//!
//! let declared = DeclaredSchema::parse("boolean1,long1,fake1,int1", "boolean,bigint,string,int")?;
//! let mut projector = RowProjector::new(declared);
//!
//! let record = DynRecord::new(
//!     Arc::new(Schema::new(vec![
//!         Field::new("int1", DataType::Int32, false),
//!         Field::new("boolean1", DataType::Boolean, false),
//!         Field::new("long1", DataType::Int64, false),
//!     ])),
//!     vec![Value::Int32(42), Value::Boolean(true), Value::Int64(42432234234)],
//! );
//!
//! let row = projector.project(&record)?;
//! assert_eq!(
//!     row.as_slice(),
//!     &[
//!         Value::Boolean(true),
//!         Value::Int64(42432234234),
//!         Value::Null,
//!         Value::Int32(42),
//!     ],
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! One projector instance serves exactly one sequential stream of records of
//! one schema; there is no thread-safety contract and the row buffer is
//! shared across calls.

mod logging;

/// Record capability trait, dynamic values, and the `DynRecord` container.
pub mod record;

/// Row projection against the cached column mapping.
pub mod project;

/// Case-insensitive resolution of declared columns against a record schema.
pub mod resolve;

/// Declared column schema and its configuration parsing.
pub mod schema;

pub use crate::{
    project::{ProjectError, RowProjector, RowView},
    record::{DynRecord, Record, RecordError, Value},
    resolve::ColumnMapping,
    schema::{ConfigError, DeclaredSchema},
};
