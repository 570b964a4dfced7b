use crate::ExecutedSql;
use std::sync::{Arc, Mutex};

/// A wrapper around the statement log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    entries: Arc<Mutex<Vec<ExecutedSql>>>,
}

impl ExecLog {
    pub(crate) fn new(entries: Arc<Mutex<Vec<ExecutedSql>>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Remove and return the oldest logged statement
    #[track_caller]
    pub fn pop(&self) -> ExecutedSql {
        let mut entries = self.entries.lock().unwrap();
        assert!(!entries.is_empty(), "statement log is empty");
        entries.remove(0)
    }

    /// SQL text of every logged statement, oldest first
    pub fn statements(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.sql.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
