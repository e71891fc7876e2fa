use std::collections::HashMap;

use arrow::datatypes::Schema as ArrowSchema;

use crate::logging::duckrow_log;

/// Translation from declared column slots to actual record positions.
///
/// One entry per declared column, in slot order: `Some(position)` when the
/// record schema carries a case-insensitive name match, `None` when the
/// column is absent. Absence is a normal outcome that projects as null, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    entries: Vec<Option<usize>>,
}

impl ColumnMapping {
    /// Build the mapping for `requested` column names against the record
    /// schema discovered at read time.
    ///
    /// Actual field names are folded to lower case before lookup. If two
    /// actual fields collide after folding, the later position silently wins
    /// the lookup slot.
    pub fn resolve(actual: &ArrowSchema, requested: &[String]) -> Self {
        let mut by_folded_name = HashMap::with_capacity(actual.fields().len());
        for (position, field) in actual.fields().iter().enumerate() {
            by_folded_name.insert(field.name().to_lowercase(), position);
        }

        let mut entries = Vec::with_capacity(requested.len());
        for name in requested {
            let position = by_folded_name.get(&name.to_lowercase()).copied();
            if position.is_none() {
                duckrow_log!(
                    log::Level::Warn,
                    "resolve",
                    "column {:?} not found in record schema, will project as null",
                    name,
                );
            }
            entries.push(position);
        }

        duckrow_log!(
            log::Level::Debug,
            "resolve",
            "mapped {} of {} declared columns against {} record fields",
            entries.iter().filter(|entry| entry.is_some()).count(),
            requested.len(),
            actual.fields().len(),
        );

        Self { entries }
    }

    /// Entries in declared slot order.
    pub fn entries(&self) -> &[Option<usize>] {
        &self.entries
    }

    /// Number of declared slots covered by the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping covers no slots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use arrow::datatypes::{DataType, Field, Schema};

    use super::ColumnMapping;

    fn record_schema() -> Schema {
        Schema::new(vec![
            Field::new("int1", DataType::Int32, false),
            Field::new("boolean1", DataType::Boolean, false),
            Field::new("long1", DataType::Int64, false),
        ])
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn maps_declared_order_to_record_positions() {
        let mapping = ColumnMapping::resolve(
            &record_schema(),
            &names(&["boolean1", "long1", "fake1", "int1"]),
        );
        assert_eq!(mapping.entries(), [Some(1), Some(2), None, Some(0)]);
    }

    #[test]
    fn matching_folds_case_both_ways() {
        let schema = Schema::new(vec![
            Field::new("UserId", DataType::Int64, false),
            Field::new("NAME", DataType::Utf8, false),
        ]);

        let mapping = ColumnMapping::resolve(&schema, &names(&["userid", "Name"]));
        assert_eq!(mapping.entries(), [Some(0), Some(1)]);
    }

    #[test]
    fn folded_duplicates_take_the_later_position() {
        let schema = Schema::new(vec![
            Field::new("Value", DataType::Int32, false),
            Field::new("value", DataType::Int64, false),
        ]);

        let mapping = ColumnMapping::resolve(&schema, &names(&["value"]));
        assert_eq!(mapping.entries(), [Some(1)]);
    }

    #[test]
    fn empty_request_yields_empty_mapping() {
        let mapping = ColumnMapping::resolve(&record_schema(), &[]);
        assert!(mapping.is_empty());
    }
}
