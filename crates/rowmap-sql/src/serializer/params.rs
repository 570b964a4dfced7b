use super::{Formatter, ToSql};

use rowmap_core::Value;

/// Collects bound values during serialization.
pub trait Params {
    fn push(&mut self, param: &Value) -> Placeholder;
}

/// Position (1-based) of a bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}
