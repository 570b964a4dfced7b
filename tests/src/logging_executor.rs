use crate::ExecLog;
use async_trait::async_trait;
use rowmap::{
    driver::{Executor, Rows, ValueRow},
    Result, Value,
};
use std::sync::{Arc, Mutex};

/// One statement as it reached the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedSql {
    pub sql: String,
    pub params: Vec<Value>,
}

/// An executor wrapper that logs every statement for testing purposes
#[derive(Debug)]
pub struct LoggingExecutor<E> {
    /// The underlying executor that actually runs statements
    inner: E,

    /// Shared with every [`ExecLog`] handed out by [`LoggingExecutor::log`]
    log: Arc<Mutex<Vec<ExecutedSql>>>,
}

impl<E: Executor> LoggingExecutor<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to the statement log
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.log.clone())
    }

    fn push(&self, sql: &str, params: &[Value]) {
        self.log.lock().unwrap().push(ExecutedSql {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
    }
}

#[async_trait]
impl<E: Executor> Executor for LoggingExecutor<E> {
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        self.push(sql, params);
        self.inner.execute(sql, params).await
    }

    async fn query_one(&mut self, sql: &str, params: &[Value]) -> Result<Option<ValueRow>> {
        self.push(sql, params);
        self.inner.query_one(sql, params).await
    }

    async fn query_many(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.push(sql, params);
        self.inner.query_many(sql, params).await
    }
}
