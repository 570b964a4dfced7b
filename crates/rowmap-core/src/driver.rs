mod row;
pub use row::{Destinations, Row, SingleRow, ValueRow};

mod rows;
pub use rows::Rows;

use crate::{async_trait, Result, Value};

use std::fmt::Debug;

/// Runs parameterized SQL against a database.
///
/// Statements use `?` placeholders; `params` are bound positionally. Calls
/// take `&mut self` so a single connection can back an executor without
/// interior locking. Dropping a returned future abandons the call.
#[async_trait]
pub trait Executor: Debug + Send {
    /// Execute a statement, returning the number of affected rows.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64>;

    /// Run a query and return its first row, if any.
    async fn query_one(&mut self, sql: &str, params: &[Value]) -> Result<Option<ValueRow>>;

    /// Run a query and return all of its rows.
    async fn query_many(&mut self, sql: &str, params: &[Value]) -> Result<Rows>;
}

#[async_trait]
impl<E: Executor + ?Sized> Executor for &mut E {
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        (**self).execute(sql, params).await
    }

    async fn query_one(&mut self, sql: &str, params: &[Value]) -> Result<Option<ValueRow>> {
        (**self).query_one(sql, params).await
    }

    async fn query_many(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        (**self).query_many(sql, params).await
    }
}
