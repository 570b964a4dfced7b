//! Copies result rows into record fields.

use crate::{
    driver::{Destinations, Row},
    FieldId, Record, Result, Schema, Value,
};

/// Scan one row into `record`.
///
/// Each column the row reports is matched by name to a schema column; cells
/// for unmapped columns are read and dropped. A row that reports no column
/// names is taken to hold every schema column, in schema order.
pub fn scan<R: Record>(schema: &Schema, row: &mut dyn Row, record: &mut R) -> Result<()> {
    let targets = destinations_for(schema, row.column_names());
    row.scan_into(&mut Fields { record, targets })
}

fn destinations_for(schema: &Schema, columns: &[String]) -> Vec<Option<FieldId>> {
    if columns.is_empty() {
        return schema.columns.iter().map(|column| Some(column.field)).collect();
    }

    columns
        .iter()
        .map(|name| schema.column(name).map(|column| column.field))
        .collect()
}

/// Destination list over a record; `None` discards the cell.
struct Fields<'a, R> {
    record: &'a mut R,
    targets: Vec<Option<FieldId>>,
}

impl<R: Record> Destinations for Fields<'_, R> {
    fn len(&self) -> usize {
        self.targets.len()
    }

    fn assign(&mut self, index: usize, value: Value) -> Result<()> {
        match self.targets.get(index) {
            Some(Some(field)) => self.record.set(*field, value),
            _ => Ok(()),
        }
    }
}
