use super::{value_chrono::parse_datetime, Value};
use crate::{Error, Result};

use chrono::{DateTime, NaiveDateTime, Utc};

/// A Rust type that can live in a record field mapped to a column.
///
/// `load` is deliberately forgiving about the representation a driver hands
/// back (SQLite has no boolean or timestamp storage class, for instance) but
/// never silently truncates: out-of-range integers and floats an `f32` cannot
/// hold exactly are conversion errors.
pub trait Primitive: Sized {
    /// Read the current field value as a bindable parameter.
    fn to_value(&self) -> Value;

    /// Convert a scanned or overlay value into the field type.
    fn load(value: Value) -> Result<Self>;
}

impl Primitive for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I64(v) => Ok(v != 0),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl Primitive for i64 {
    fn to_value(&self) -> Value {
        Value::I64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }
}

macro_rules! impl_narrow_int {
    ( $( $ty:ident ),* ) => {
        $(
            impl Primitive for $ty {
                fn to_value(&self) -> Value {
                    Value::I64(i64::from(*self))
                }

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => match $ty::try_from(v) {
                            Ok(v) => Ok(v),
                            Err(_) => Err(Error::type_conversion(Value::I64(v), stringify!($ty))),
                        },
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_narrow_int!(i16, i32, u32);

impl Primitive for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl Primitive for f32 {
    fn to_value(&self) -> Value {
        Value::F64(f64::from(*self))
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            // Only values an f32 holds exactly are accepted.
            Value::F64(v) => {
                let narrowed = v as f32;
                if f64::from(narrowed) == v || v.is_nan() {
                    Ok(narrowed)
                } else {
                    Err(Error::type_conversion(Value::F64(v), "f32"))
                }
            }
            Value::I64(v) => {
                let narrowed = v as f32;
                if narrowed as i128 == i128::from(v) {
                    Ok(narrowed)
                } else {
                    Err(Error::type_conversion(Value::I64(v), "f32"))
                }
            }
            value => Err(Error::type_conversion(value, "f32")),
        }
    }
}

impl Primitive for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => String::from_utf8(v)
                .map_err(|err| Error::type_conversion(Value::Bytes(err.into_bytes()), "String")),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Primitive for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl Primitive for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            Value::String(text) => match parse_datetime(&text) {
                Some(v) => Ok(v),
                None => Err(Error::type_conversion(Value::String(text), "DateTime<Utc>")),
            },
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}

impl Primitive for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(self.and_utc())
    }

    fn load(value: Value) -> Result<Self> {
        match DateTime::<Utc>::load(value) {
            Ok(v) => Ok(v.naive_utc()),
            Err(err) => Err(err),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std_util::prelude::*;

    #[test]
    fn bool_loads_from_integer() {
        assert!(assert_ok!(bool::load(Value::I64(1))));
        assert!(!assert_ok!(bool::load(Value::I64(0))));
    }

    #[test]
    fn narrow_int_rejects_out_of_range() {
        let err = assert_err!(i16::load(Value::I64(i64::from(i16::MAX) + 1)));
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert I64 to i16");
    }

    #[test]
    fn f32_rejects_lossy_values() {
        assert_eq!(assert_ok!(f32::load(Value::F64(0.5))), 0.5);
        assert_eq!(assert_ok!(f32::load(Value::I64(1 << 24))), 16_777_216.0);
        assert_eq!(assert_ok!(f32::load(1.1_f32.to_value())), 1.1);

        let err = assert_err!(f32::load(Value::F64(0.1)));
        assert_eq!(err.to_string(), "cannot convert F64 to f32");
        assert_err!(f32::load(Value::F64(1e300)));
        assert_err!(f32::load(Value::I64((1 << 24) + 1)));
        assert_err!(f32::load(Value::I64(i64::MAX)));
    }

    #[test]
    fn null_only_loads_into_option() {
        assert_none!(assert_ok!(Option::<String>::load(Value::Null)));
        let err = assert_err!(String::load(Value::Null));
        assert_eq!(err.to_string(), "cannot convert Null to String");
    }

    #[test]
    fn datetime_loads_from_text() {
        let loaded = assert_ok!(DateTime::<Utc>::load(Value::from("2023-01-02 03:04:05")));
        assert_eq!(loaded, Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn option_binds_null() {
        let field: Option<i32> = None;
        assert_eq!(field.to_value(), Value::Null);
        assert_eq!(Some(7_i32).to_value(), Value::I64(7));
    }
}
