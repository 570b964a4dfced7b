use super::Mapper;

use rowmap_core::{Config, SchemaCache};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,

    /// Cache to share with other mappers. A new one is created if unset.
    schemas: Option<Arc<SchemaCache>>,
}

impl Builder {
    /// Name of the column stamped on insert.
    pub fn created_at_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.config.created_at_column = name.into();
        self
    }

    /// Name of the column stamped on insert and update.
    pub fn updated_at_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.config.updated_at_column = name.into();
        self
    }

    /// Replace the whole configuration.
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub fn schema_cache(&mut self, schemas: Arc<SchemaCache>) -> &mut Self {
        self.schemas = Some(schemas);
        self
    }

    pub fn build(&self) -> Mapper {
        Mapper {
            schemas: self.schemas.clone().unwrap_or_default(),
            config: self.config.clone(),
        }
    }
}
