mod value;
pub use value::Value;

use rowmap_core::{
    async_trait,
    driver::{Executor, Rows, ValueRow},
    Error, Result,
};
use rusqlite::{params_from_iter, Connection as RusqliteConnection};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

/// Where a SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Parse a `sqlite:` connection URL. `sqlite::memory:` opens an in-memory
    /// database, anything else is a file path.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={}",
                url_str
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Open a connection. Every in-memory connection is a fresh database.
    pub fn connect(&self) -> Result<Connection> {
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

/// A single SQLite connection usable as an [`Executor`].
#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    fn query(
        &mut self,
        sql: &str,
        params: &[rowmap_core::Value],
        limit: Option<usize>,
    ) -> Result<Rows> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = stmt
            .query(params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver_operation_failed)?;

        let mut values = vec![];

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let mut cells = Vec::with_capacity(width);

            for index in 0..width {
                let cell = row.get_ref(index).map_err(Error::driver_operation_failed)?;
                cells.push(Value::from_sql(cell));
            }

            values.push(cells);

            if limit == Some(values.len()) {
                break;
            }
        }

        Ok(Rows::new(columns, values))
    }
}

#[async_trait]
impl Executor for Connection {
    async fn execute(&mut self, sql: &str, params: &[rowmap_core::Value]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let count = stmt
            .execute(params_from_iter(params.iter().map(Value::from)))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    async fn query_one(
        &mut self,
        sql: &str,
        params: &[rowmap_core::Value],
    ) -> Result<Option<ValueRow>> {
        Ok(self.query(sql, params, Some(1))?.next())
    }

    async fn query_many(&mut self, sql: &str, params: &[rowmap_core::Value]) -> Result<Rows> {
        self.query(sql, params, None)
    }
}
