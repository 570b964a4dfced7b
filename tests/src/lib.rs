mod exec_log;
pub use exec_log::ExecLog;

mod logging_executor;
pub use logging_executor::{ExecutedSql, LoggingExecutor};

use rowmap_driver_sqlite::{Connection, Sqlite};

pub use std_util::*;

/// A fresh in-memory SQLite database behind a logging executor.
pub fn setup() -> (LoggingExecutor<Connection>, ExecLog) {
    let _ = env_logger::builder().is_test(true).try_init();

    let connection = Sqlite::in_memory()
        .connect()
        .expect("failed to open in-memory database");
    let exec = LoggingExecutor::new(connection);
    let log = exec.log();
    (exec, log)
}
