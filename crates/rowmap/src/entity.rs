use crate::{Fields, Mapper};

use chrono::Utc;
use rowmap_core::{
    driver::{Executor, Row, SingleRow},
    scan, Error, Record, Result, Schema, Value,
};
use rowmap_sql::{
    stmt::{CreateIndex, CreateTable, Delete, Insert, Select, Update},
    Serializer, Statement,
};

use std::sync::Arc;

/// One record bound to its table schema.
///
/// Obtained from [`Mapper::entity`]. Each operation synthesizes a statement
/// from the record's current field values and runs it on the executor passed
/// in.
#[derive(Debug)]
pub struct Entity<'a, R> {
    mapper: &'a Mapper,
    schema: Arc<Schema>,
    record: &'a mut R,
}

impl<'a, R: Record> Entity<'a, R> {
    pub(crate) fn new(mapper: &'a Mapper, schema: Arc<Schema>, record: &'a mut R) -> Self {
        Self {
            mapper,
            schema,
            record,
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn record(&self) -> &R {
        &*self.record
    }

    pub fn record_mut(&mut self) -> &mut R {
        &mut *self.record
    }

    /// Create the record's table, then each of its indexes.
    ///
    /// Stops at the first failing statement. Indexes created before the
    /// failure are left in place.
    pub async fn create_table<E: Executor + ?Sized>(&self, exec: &mut E) -> Result<()> {
        create_table(exec, &self.schema).await
    }

    /// Insert the record. Timestamp columns are stamped on the record.
    pub async fn insert<E: Executor + ?Sized>(&mut self, exec: &mut E) -> Result<u64> {
        let stmt = Insert::new(&self.schema, self.record, self.mapper.config(), Utc::now())?;
        execute(exec, stmt.into()).await
    }

    /// Write all non-key columns of the record.
    pub async fn update<E: Executor + ?Sized>(&mut self, exec: &mut E) -> Result<u64> {
        let stmt = Update::new(&self.schema, self.record, self.mapper.config(), Utc::now())?;
        execute(exec, stmt.into()).await
    }

    /// Write only the columns named by the merged overlays, along with the
    /// updated timestamp column.
    pub async fn update_with<E: Executor + ?Sized>(
        &mut self,
        exec: &mut E,
        overlays: &[Fields],
    ) -> Result<u64> {
        let stmt = Update::with_fields(
            &self.schema,
            self.record,
            self.mapper.config(),
            Utc::now(),
            &Fields::merge(overlays),
        )?;
        execute(exec, stmt.into()).await
    }

    /// Delete the row matching the record's primary key.
    pub async fn delete<E: Executor + ?Sized>(&mut self, exec: &mut E) -> Result<u64> {
        let stmt = Delete::by_primary_key(&self.schema, self.record)?;
        execute(exec, stmt.into()).await
    }

    /// Reload the record from the row matching its primary key.
    pub async fn query_row<E: Executor + ?Sized>(&mut self, exec: &mut E) -> Result<()> {
        let stmt: Statement = Select::by_primary_key(&self.schema, self.record)?.into();
        let (sql, params) = serialize(&stmt);

        let Some(row) = exec.query_one(&sql, &params).await? else {
            return Err(Error::record_not_found(format!("table={}", self.schema.table)));
        };

        self.scan(&mut SingleRow::from(row))
    }

    /// Copy a result row into the record.
    pub fn scan(&mut self, row: &mut dyn Row) -> Result<()> {
        scan::scan(&self.schema, row, self.record)
    }
}

pub(crate) async fn create_table<E: Executor + ?Sized>(exec: &mut E, schema: &Schema) -> Result<()> {
    execute(exec, CreateTable::from_schema(schema).into()).await?;

    for stmt in CreateIndex::for_schema(schema) {
        execute(exec, stmt.into()).await?;
    }

    Ok(())
}

fn serialize(stmt: &Statement) -> (String, Vec<Value>) {
    let mut params = vec![];
    let sql = Serializer::new().serialize(stmt, &mut params);

    log::debug!("{}: {sql}; params={}", stmt.kind(), params.len());

    (sql, params)
}

async fn execute<E: Executor + ?Sized>(exec: &mut E, stmt: Statement) -> Result<u64> {
    let (sql, params) = serialize(&stmt);
    exec.execute(&sql, &params).await
}
