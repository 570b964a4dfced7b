mod builder;
pub use builder::Builder;

use crate::{entity, Entity, Fields};

use rowmap_core::{
    driver::{Executor, Row},
    scan, Config, Record, Result, Schema, SchemaCache, Value,
};

use std::sync::Arc;

/// Maps records to table rows.
///
/// Holds the schema cache and the timestamp column configuration. Clones
/// share the cache.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    schemas: Arc<SchemaCache>,
    config: Config,
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn schemas(&self) -> &Arc<SchemaCache> {
        &self.schemas
    }

    /// The table schema of `R`, derived on first use.
    pub fn schema_for<R: Record>(&self) -> Result<Arc<Schema>> {
        self.schemas.schema_for::<R>()
    }

    /// Bind `record` to its schema for repeated operations.
    pub fn entity<'a, R: Record>(&'a self, record: &'a mut R) -> Result<Entity<'a, R>> {
        let schema = self.schema_for::<R>()?;
        Ok(Entity::new(self, schema, record))
    }

    pub async fn create_table<R: Record, E: Executor + ?Sized>(&self, exec: &mut E) -> Result<()> {
        let schema = self.schema_for::<R>()?;
        entity::create_table(exec, &schema).await
    }

    pub async fn insert<R: Record, E: Executor + ?Sized>(
        &self,
        exec: &mut E,
        record: &mut R,
    ) -> Result<u64> {
        self.entity(record)?.insert(exec).await
    }

    pub async fn update<R: Record, E: Executor + ?Sized>(
        &self,
        exec: &mut E,
        record: &mut R,
    ) -> Result<u64> {
        self.entity(record)?.update(exec).await
    }

    pub async fn update_with<R: Record, E: Executor + ?Sized>(
        &self,
        exec: &mut E,
        record: &mut R,
        overlays: &[Fields],
    ) -> Result<u64> {
        self.entity(record)?.update_with(exec, overlays).await
    }

    pub async fn delete<R: Record, E: Executor + ?Sized>(
        &self,
        exec: &mut E,
        record: &mut R,
    ) -> Result<u64> {
        self.entity(record)?.delete(exec).await
    }

    /// Reload `record` by primary key. Fails with a record-not-found error if
    /// no row matches.
    pub async fn query_row<R: Record, E: Executor + ?Sized>(
        &self,
        exec: &mut E,
        record: &mut R,
    ) -> Result<()> {
        self.entity(record)?.query_row(exec).await
    }

    pub fn scan<R: Record>(&self, row: &mut dyn Row, record: &mut R) -> Result<()> {
        let schema = self.schema_for::<R>()?;
        scan::scan(&schema, row, record)
    }

    /// Run an arbitrary query and load every row into a fresh `R`.
    ///
    /// Result columns are matched to fields by name; columns with no
    /// matching field are ignored.
    pub async fn query_all<R: Record + Default, E: Executor + ?Sized>(
        &self,
        exec: &mut E,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<R>> {
        let schema = self.schema_for::<R>()?;

        log::debug!("query_all {}: {sql}; params={}", schema.table, params.len());
        let rows = exec.query_many(sql, params).await?;

        let mut records = Vec::with_capacity(rows.len());
        for mut row in rows {
            let mut record = R::default();
            scan::scan(&schema, &mut row, &mut record)?;
            records.push(record);
        }

        Ok(records)
    }
}
