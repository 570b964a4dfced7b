use super::{Filter, Statement};

use rowmap_core::{Record, Result, Schema};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete from
    pub from: String,

    pub filter: Filter,
}

impl Delete {
    /// Delete the row holding the record's primary key.
    pub fn by_primary_key<R: Record>(schema: &Schema, record: &R) -> Result<Self> {
        Ok(Self {
            from: schema.table.clone(),
            filter: Filter::primary_key(schema, record, "delete")?,
        })
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
