mod entity;
pub use entity::Entity;

mod fields;
pub use fields::Fields;

pub mod mapper;
pub use mapper::Mapper;

pub use rowmap_core::{
    driver::{self, Executor},
    schema::{self, Schema, SchemaCache},
    Config, Error, FieldDef, FieldId, Primitive, Record, Result, Value,
};

pub use rowmap_macros::Record;

pub use rowmap_core::async_trait;

#[doc(hidden)]
pub mod codegen_support {
    pub use rowmap_core::{
        record::unknown_field, FieldDef, FieldId, Primitive, Record, Result, Value,
    };
    pub use std::option::Option;
}
