use rowmap_core::schema::{Column, Constraints};

/// A column definition within a CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Name of the column
    pub name: String,

    /// Raw type text
    pub ty: String,

    pub constraints: Constraints,
}

impl ColumnDef {
    pub fn from_column(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            ty: column.data_type.clone(),
            constraints: column.constraints,
        }
    }
}
