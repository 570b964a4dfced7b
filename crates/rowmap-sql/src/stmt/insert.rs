use super::Statement;

use chrono::{DateTime, Utc};
use rowmap_core::{Config, Record, Result, Schema, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub into: String,

    /// Column names, in schema order
    pub columns: Vec<String>,

    /// One value per column
    pub values: Vec<Value>,
}

impl Insert {
    /// Insert every mapped column of `record`.
    ///
    /// The created and updated timestamp columns are set to `now` on the
    /// record first, so the caller sees the stored values.
    pub fn new<R: Record>(
        schema: &Schema,
        record: &mut R,
        config: &Config,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let mut columns = Vec::with_capacity(schema.columns.len());
        let mut values = Vec::with_capacity(schema.columns.len());

        for column in &schema.columns {
            if config.is_created_at(&column.name) || config.is_updated_at(&column.name) {
                record.set(column.field, Value::DateTime(now))?;
            }

            columns.push(column.name.clone());
            values.push(record.get(column.field)?);
        }

        Ok(Self {
            into: schema.table.clone(),
            columns,
            values,
        })
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
