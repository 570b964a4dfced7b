mod builder;
pub use builder::{derive_schema, derive_schema_from};

mod cache;
pub use cache::SchemaCache;

mod column;
pub use column::{Column, Constraints};

mod fk;
pub use fk::ForeignKey;

mod index;
pub use index::Index;

pub mod tag;
pub use tag::Tag;

use crate::{Error, Result};

/// Table layout derived from a record type's field annotations.
///
/// Built once per record type and shared behind an `Arc`. Nothing mutates a
/// schema after derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Name of the table
    pub table: String,

    /// Mapped columns in field declaration order. This is also the INSERT
    /// column order.
    pub columns: Vec<Column>,

    /// Secondary indexes, in order of first appearance
    pub indexes: Vec<Index>,

    /// Foreign keys, in order of first appearance
    pub foreign_keys: Vec<ForeignKey>,

    /// Positions in `columns` of the primary key columns
    pub primary_key: Vec<usize>,
}

impl Schema {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key.iter().map(|index| &self.columns[*index])
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    /// Fails with a usage error if the table has no primary key. `operation`
    /// names the statement that needed one.
    pub fn require_primary_key(&self, operation: &str) -> Result<()> {
        if self.has_primary_key() {
            Ok(())
        } else {
            Err(Error::usage(format!(
                "{operation} requires a primary key; table {:?} has none",
                self.table
            )))
        }
    }
}
