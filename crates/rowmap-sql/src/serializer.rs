#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{And, Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod statement;
mod value;

use crate::stmt::Statement;

/// Serialize a statement to SQL text.
///
/// Values are never inlined. Each one is pushed to the caller's [`Params`]
/// at the point its placeholder is written, so parameters come out in the
/// same order as their placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer;

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}
