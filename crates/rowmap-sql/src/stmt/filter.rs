use rowmap_core::{Record, Result, Schema, Value};

/// Conjunction of `column = value` conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Match the record's current primary key.
    ///
    /// `operation` names the calling statement in the error returned when the
    /// schema has no primary key.
    pub fn primary_key<R: Record>(schema: &Schema, record: &R, operation: &str) -> Result<Self> {
        schema.require_primary_key(operation)?;

        let mut conditions = Vec::with_capacity(schema.primary_key.len());
        for column in schema.primary_key_columns() {
            conditions.push((column.name.clone(), record.get(column.field)?));
        }

        Ok(Self { conditions })
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
