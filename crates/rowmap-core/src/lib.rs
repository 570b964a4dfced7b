pub mod config;
pub use config::Config;

pub mod driver;
pub use driver::Executor;

mod error;
pub use error::Error;

pub mod record;
pub use record::{FieldDef, FieldId, Record};

pub mod scan;

pub mod schema;
pub use schema::{Schema, SchemaCache};

pub mod value;
pub use value::{Primitive, Value};

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
