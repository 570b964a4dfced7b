use super::{Filter, Statement};

use rowmap_core::{Record, Result, Schema};

/// `SELECT *` over one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub from: String,

    pub filter: Filter,
}

impl Select {
    /// Select the row holding the record's primary key.
    pub fn by_primary_key<R: Record>(schema: &Schema, record: &R) -> Result<Self> {
        Ok(Self {
            from: schema.table.clone(),
            filter: Filter::primary_key(schema, record, "select")?,
        })
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
