use super::ValueRow;
use crate::Value;

use std::{sync::Arc, vec};

/// Buffered result of a multi-row query.
#[derive(Debug)]
pub struct Rows {
    columns: Arc<[String]>,
    rows: vec::IntoIter<Vec<Value>>,
}

impl Rows {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns: columns.into(),
            rows: rows.into_iter(),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }
}

impl Iterator for Rows {
    type Item = ValueRow;

    fn next(&mut self) -> Option<ValueRow> {
        let values = self.rows.next()?;
        Some(ValueRow::new(self.columns.clone(), values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Rows {}
