use super::{ColumnDef, Statement};

use rowmap_core::schema::{ForeignKey, Schema};

/// `CREATE TABLE IF NOT EXISTS`, with the primary key and foreign keys as
/// trailing table constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key column names. No constraint is emitted when empty.
    pub primary_key: Vec<String>,

    pub foreign_keys: Vec<ForeignKey>,
}

impl CreateTable {
    pub fn from_schema(schema: &Schema) -> Self {
        Self {
            name: schema.table.clone(),
            columns: schema.columns.iter().map(ColumnDef::from_column).collect(),
            primary_key: schema
                .primary_key_columns()
                .map(|column| column.name.clone())
                .collect(),
            foreign_keys: schema.foreign_keys.clone(),
        }
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
