use serde::Deserialize;

/// Names of the reserved timestamp columns.
///
/// A column whose name equals `created_at_column` is stamped with the current
/// time on insert; one named `updated_at_column` is stamped on insert and on
/// every update. The defaults match existing deployed schemas, so only change
/// them for tables that use different names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub created_at_column: String,
    pub updated_at_column: String,
}

impl Config {
    pub const DEFAULT_CREATED_AT: &'static str = "created_at";
    pub const DEFAULT_UPDATED_AT: &'static str = "updated_at";

    pub fn is_created_at(&self, column: &str) -> bool {
        self.created_at_column == column
    }

    pub fn is_updated_at(&self, column: &str) -> bool {
        self.updated_at_column == column
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            created_at_column: Self::DEFAULT_CREATED_AT.to_string(),
            updated_at_column: Self::DEFAULT_UPDATED_AT.to_string(),
        }
    }
}
