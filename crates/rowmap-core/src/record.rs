use crate::{Error, Result, Value};

/// Position of a field within its record type's descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(pub usize);

/// Static description of one record field: its Rust name and the raw
/// annotation string the schema is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Field identifier as written in the Rust struct
    pub name: &'static str,

    /// Raw `key:"value"` directives attached to the field
    pub tag: &'static str,
}

impl FieldDef {
    pub const fn new(name: &'static str, tag: &'static str) -> Self {
        Self { name, tag }
    }
}

/// An in-memory type whose fields map to the columns of one table.
///
/// Usually implemented with `#[derive(Record)]`. The descriptor table is
/// read once when the schema is derived; afterwards every access goes through
/// [`Record::get`] and [`Record::set`] with the [`FieldId`] stored in the
/// schema's columns.
pub trait Record: Sized + 'static {
    /// Rust type name. Lower-cased, it becomes the default table name.
    const NAME: &'static str;

    /// Table name override.
    const TABLE: Option<&'static str> = None;

    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldDef];

    /// Read the current value of a field.
    fn get(&self, field: FieldId) -> Result<Value>;

    /// Overwrite a field, converting from the given value.
    fn set(&mut self, field: FieldId, value: Value) -> Result<()>;
}

/// Error for a [`FieldId`] the record does not map.
pub fn unknown_field<R: Record>(field: FieldId) -> Error {
    let name = R::FIELDS.get(field.0).map_or("?", |def| def.name);
    Error::usage(format!(
        "type {:?} has no accessor for field #{} ({name})",
        R::NAME,
        field.0
    ))
}
