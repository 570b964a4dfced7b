use chrono::SecondsFormat;
use rowmap_core::Value as CoreValue;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// Bridges rowmap values to and from SQLite storage classes.
#[derive(Debug)]
pub struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl Value<'_> {
    /// Converts a cell read from SQLite into a rowmap value.
    ///
    /// SQLite has no boolean or timestamp storage class, so those come back
    /// as integers and text; the record field's `Primitive::load` converts
    /// them further. Text that is not valid UTF-8 comes back as bytes.
    pub fn from_sql(value: ValueRef<'_>) -> CoreValue {
        match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::I64(value),
            ValueRef::Real(value) => CoreValue::F64(value),
            ValueRef::Text(value) => match std::str::from_utf8(value) {
                Ok(text) => CoreValue::String(text.to_string()),
                Err(_) => CoreValue::Bytes(value.to_vec()),
            },
            ValueRef::Blob(value) => CoreValue::Bytes(value.to_vec()),
        }
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            CoreValue::DateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ))),
        }
    }
}
