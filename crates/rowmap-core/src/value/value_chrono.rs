use chrono::{DateTime, NaiveDateTime, Utc};

use crate::Value;

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value.and_utc())
    }
}

/// Parses the text forms drivers hand back for timestamp columns.
///
/// Accepts RFC 3339 and the `YYYY-MM-DD HH:MM:SS[.fff]` form SQLite's
/// `datetime()` produces (interpreted as UTC).
pub(super) fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|value| value.and_utc())
}
