use rowmap_core::Value;

use indexmap::IndexMap;

/// Column values for a partial update, keyed by column name.
///
/// Several overlays can be passed to one update; they are merged in order
/// and a later value for the same column replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    values: IndexMap<String, Value>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style [`Fields::insert`].
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column's value, returning the value it replaces.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Merge overlays left to right. Columns keep the position of their
    /// first appearance.
    pub(crate) fn merge(overlays: &[Fields]) -> IndexMap<String, Value> {
        let mut merged = IndexMap::new();

        for overlay in overlays {
            for (column, value) in overlay {
                merged.insert(column.clone(), value.clone());
            }
        }

        merged
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut fields = Self::new();
        fields.extend(iter);
        fields
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Fields {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (column, value) in iter {
            self.insert(column, value);
        }
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Fields;
    use rowmap_core::Value;

    #[test]
    fn later_overlays_win() {
        let first = Fields::new().set("name", "Jack").set("grade", 3_i64);
        let second = Fields::new().set("name", "John");

        let merged = Fields::merge(&[first, second]);
        let entries: Vec<_> = merged.iter().map(|(k, v)| (k.as_str(), v)).collect();

        assert_eq!(
            entries,
            [("name", &Value::from("John")), ("grade", &Value::I64(3))]
        );
    }

    #[test]
    fn collects_from_pairs() {
        let fields: Fields = [("a", 1_i64), ("b", 2_i64)].into_iter().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("b"), Some(&Value::I64(2)));
        assert!(Fields::new().is_empty());
    }
}
