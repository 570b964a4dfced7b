use super::{Column, Constraints, ForeignKey, Index, Schema, Tag};
use crate::{Error, FieldDef, FieldId, Record, Result};

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Column directive: `name,type[,pk|unique|null|not_null|fragment...]`
const SQL: &str = "sql";

/// Index directive: `name` or `name:identifier`
const SQL_INDEX: &str = "sqlindex";

/// Foreign key directive: `table(column)`
const SQL_FOREIGN_KEY: &str = "sqlforeignkey";

/// Marks a field that has no column.
const IGNORE: &str = "-";

const PRIMARY_KEY: &str = "pk";

// ASCII word characters only.
static FOREIGN_KEY_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:(\w+)\((\w+)\))").expect("foreign key pattern is valid")
});

/// Derive the table schema of a record type from its field annotations.
pub fn derive_schema<R: Record>() -> Result<Schema> {
    derive_schema_from(R::NAME, R::TABLE, R::FIELDS)
}

/// Derive a schema from a raw descriptor table.
///
/// `type_name` is lower-cased into the table name unless `table` is given.
pub fn derive_schema_from(
    type_name: &str,
    table: Option<&str>,
    fields: &[FieldDef],
) -> Result<Schema> {
    let mut builder = BuildSchema {
        type_name,
        columns: vec![],
        primary_key: vec![],
        indexes: IndexMap::new(),
        foreign_keys: IndexMap::new(),
    };

    for (index, def) in fields.iter().enumerate() {
        builder.build_field(FieldId(index), def)?;
    }

    let schema = Schema {
        table: match table {
            Some(table) => table.to_string(),
            None => type_name.to_lowercase(),
        },
        columns: builder.columns,
        indexes: builder.indexes.into_values().collect(),
        foreign_keys: builder.foreign_keys.into_values().collect(),
        primary_key: builder.primary_key,
    };

    log::debug!(
        "derived schema for {type_name}; table={} columns={} indexes={} foreign_keys={}",
        schema.table,
        schema.columns.len(),
        schema.indexes.len(),
        schema.foreign_keys.len()
    );

    Ok(schema)
}

/// Tracks state while walking the field descriptors
struct BuildSchema<'a> {
    type_name: &'a str,

    columns: Vec<Column>,

    primary_key: Vec<usize>,

    /// Keyed by index identifier
    indexes: IndexMap<String, Index>,

    /// Keyed by reference table
    foreign_keys: IndexMap<String, ForeignKey>,
}

impl BuildSchema<'_> {
    fn build_field(&mut self, field: FieldId, def: &FieldDef) -> Result<()> {
        let tag = Tag::new(def.tag);

        let directive = tag.get(SQL).into_iter().next().unwrap_or_default();

        if directive == IGNORE {
            return Ok(());
        }

        if directive.is_empty() {
            return Err(Error::invalid_schema(format!(
                "type {:?}: missing tag for field {:?}",
                self.type_name, def.name
            )));
        }

        let column = self.build_column(field, def, &directive)?;

        for value in tag.get(SQL_INDEX) {
            self.build_index(&column.name, &value);
        }

        for value in tag.get(SQL_FOREIGN_KEY) {
            self.build_foreign_key(&column.name, &value);
        }

        if column.primary_key {
            self.primary_key.push(self.columns.len());
        }

        self.columns.push(column);
        Ok(())
    }

    fn build_column(&self, field: FieldId, def: &FieldDef, directive: &str) -> Result<Column> {
        let mut column = Column {
            name: String::new(),
            field,
            data_type: String::new(),
            constraints: Constraints::NONE,
            primary_key: false,
        };

        for (position, token) in directive.split(',').map(str::trim).enumerate() {
            if token == PRIMARY_KEY {
                column.primary_key = true;
                continue;
            }

            match position {
                0 => column.name = token.to_string(),
                1 => column.data_type = token.to_string(),
                _ => match Constraints::from_token(token) {
                    Some(constraint) => column.constraints |= constraint,
                    None if token.is_empty() => {}
                    // Dialect specific type text, e.g. `DEFAULT 0`
                    None => {
                        if !column.data_type.is_empty() {
                            column.data_type.push(' ');
                        }
                        column.data_type.push_str(token);
                    }
                },
            }
        }

        if column.name.is_empty() {
            return Err(Error::invalid_schema(format!(
                "type {:?}: empty column name for field {:?}",
                self.type_name, def.name
            )));
        }

        Ok(column)
    }

    fn build_index(&mut self, column: &str, value: &str) {
        let (name, identifier) = match value.split_once(':') {
            Some((name, identifier)) => (name, identifier),
            None => (value, ""),
        };

        let key = match (identifier, name) {
            ("", "") => format!("{column}_idx"),
            ("", name) => name.to_string(),
            (identifier, _) => identifier.to_string(),
        };

        self.indexes
            .entry(key.clone())
            .or_insert_with(|| Index {
                name: key,
                columns: vec![],
            })
            .columns
            .push(column.to_string());
    }

    fn build_foreign_key(&mut self, column: &str, value: &str) {
        let Some(captures) = FOREIGN_KEY_TARGET.captures(value) else {
            log::warn!(
                "type {}: skipping foreign key {value:?} on column {column}; expected `table(column)`",
                self.type_name
            );
            return;
        };

        let reference_table = &captures[1];
        let foreign_key = self
            .foreign_keys
            .entry(reference_table.to_string())
            .or_insert_with(|| ForeignKey {
                columns: vec![],
                reference_table: reference_table.to_string(),
                reference_columns: vec![],
            });

        foreign_key.columns.push(column.to_string());
        foreign_key.reference_columns.push(captures[2].to_string());
    }
}
