use super::Statement;

use rowmap_core::schema::{Index, Schema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndex {
    /// Name of the index
    pub name: String,

    /// Table the index is created on
    pub on: String,

    /// Indexed column names
    pub columns: Vec<String>,
}

impl CreateIndex {
    pub fn new(table: &str, index: &Index) -> Self {
        Self {
            name: index.name.clone(),
            on: table.to_string(),
            columns: index.columns.clone(),
        }
    }

    /// One statement per index of the schema, in schema order.
    pub fn for_schema(schema: &Schema) -> Vec<Self> {
        schema
            .indexes
            .iter()
            .map(|index| Self::new(&schema.table, index))
            .collect()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
