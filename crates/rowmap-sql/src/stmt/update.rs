use super::{Filter, Statement};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rowmap_core::{Config, Error, Record, Result, Schema, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table to update
    pub table: String,

    /// `SET` list, in schema column order
    pub assignments: Vec<Assignment>,

    pub filter: Filter,
}

/// `column = value` within a `SET` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Update {
    /// Write every non-key column of `record`, keyed by its primary key.
    ///
    /// The updated timestamp column is set to `now` on the record first.
    pub fn new<R: Record>(
        schema: &Schema,
        record: &mut R,
        config: &Config,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        Self::build(schema, record, config, now, None)
    }

    /// Write only the columns named in `fields`, plus the updated timestamp
    /// column.
    ///
    /// Values come from `fields`, not from the record. Names that match no
    /// column, or match a key column, are skipped with a warning.
    pub fn with_fields<R: Record>(
        schema: &Schema,
        record: &mut R,
        config: &Config,
        now: DateTime<Utc>,
        fields: &IndexMap<String, Value>,
    ) -> Result<Self> {
        for name in fields.keys() {
            match schema.column(name) {
                None => log::warn!(
                    "update {}: ignoring field {name:?}; no such column",
                    schema.table
                ),
                Some(column) if column.primary_key => log::warn!(
                    "update {}: ignoring field {name:?}; primary key columns are not updated",
                    schema.table
                ),
                Some(_) => {}
            }
        }

        Self::build(schema, record, config, now, Some(fields))
    }

    fn build<R: Record>(
        schema: &Schema,
        record: &mut R,
        config: &Config,
        now: DateTime<Utc>,
        fields: Option<&IndexMap<String, Value>>,
    ) -> Result<Self> {
        schema.require_primary_key("update")?;

        let mut assignments = vec![];

        for column in &schema.columns {
            if column.primary_key {
                continue;
            }

            let value = if config.is_updated_at(&column.name) {
                record.set(column.field, Value::DateTime(now))?;
                record.get(column.field)?
            } else {
                match fields {
                    None => record.get(column.field)?,
                    Some(fields) => match fields.get(&column.name) {
                        Some(value) => value.clone(),
                        None => continue,
                    },
                }
            };

            assignments.push(Assignment {
                column: column.name.clone(),
                value,
            });
        }

        if assignments.is_empty() {
            return Err(Error::usage(format!(
                "update of table {:?} has no columns to set",
                schema.table
            )));
        }

        Ok(Self {
            table: schema.table.clone(),
            assignments,
            filter: Filter::primary_key(schema, record, "update")?,
        })
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
