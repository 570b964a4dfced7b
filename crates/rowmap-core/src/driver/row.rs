use crate::{Error, Result, Value};

use std::sync::Arc;

/// A result row that can be scanned into an ordered list of destinations.
pub trait Row {
    /// Column names as reported by the driver. Empty when the driver does
    /// not report them, in which case columns are assumed to follow the
    /// schema's column order.
    fn column_names(&self) -> &[String];

    /// Hand each cell to the destination at the same position.
    ///
    /// Fails with an invalid-result error if the number of destinations
    /// differs from the row width.
    fn scan_into(&mut self, destinations: &mut dyn Destinations) -> Result<()>;
}

/// Receives the cells of one row, by position.
pub trait Destinations {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn assign(&mut self, index: usize, value: Value) -> Result<()>;
}

/// A fully buffered row along with the names of its columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRow {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl ValueRow {
    pub fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value of the named column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.values.get(index)
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl Row for ValueRow {
    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn scan_into(&mut self, destinations: &mut dyn Destinations) -> Result<()> {
        scan_values(&self.values, destinations)
    }
}

/// The row of a single-row lookup.
///
/// Reports no column names, so the cells are matched to the schema columns
/// by position.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleRow {
    values: Vec<Value>,
}

impl SingleRow {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl From<ValueRow> for SingleRow {
    fn from(row: ValueRow) -> Self {
        Self::new(row.into_values())
    }
}

impl Row for SingleRow {
    fn column_names(&self) -> &[String] {
        &[]
    }

    fn scan_into(&mut self, destinations: &mut dyn Destinations) -> Result<()> {
        scan_values(&self.values, destinations)
    }
}

fn scan_values(values: &[Value], destinations: &mut dyn Destinations) -> Result<()> {
    if values.len() != destinations.len() {
        return Err(Error::invalid_result(format!(
            "row has {} columns but {} destinations were given",
            values.len(),
            destinations.len()
        )));
    }

    for (index, value) in values.iter().enumerate() {
        destinations.assign(index, value.clone())?;
    }

    Ok(())
}
