use super::{derive_schema, Schema};
use crate::{Record, Result};

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Derived schemas, keyed by record type.
///
/// Lookups take a read lock. A miss takes the write lock and checks again
/// before deriving, so each type is derived at most once and every caller
/// gets the same `Arc`. A failed derivation is not stored; the next call
/// derives again.
#[derive(Debug, Default)]
pub struct SchemaCache {
    schemas: RwLock<HashMap<TypeId, Arc<Schema>>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schema for `R`, deriving it on first use.
    pub fn schema_for<R: Record>(&self) -> Result<Arc<Schema>> {
        let key = TypeId::of::<R>();

        // Entries are only inserted fully built, so a poisoned lock still
        // guards a consistent map.
        if let Some(schema) = self
            .schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(schema.clone());
        }

        let mut schemas = self.schemas.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(schema) = schemas.get(&key) {
            return Ok(schema.clone());
        }

        let schema = Arc::new(derive_schema::<R>()?);
        schemas.insert(key, schema.clone());
        Ok(schema)
    }

    pub fn contains<R: Record>(&self) -> bool {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
