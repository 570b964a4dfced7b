use super::Error;

/// Error when the library is called in a way that can never succeed.
///
/// This occurs when:
/// - A primary-key operation targets a table without primary-key columns
/// - An update would leave the SET clause empty
/// - A field accessor is asked for a field the record does not declare
///
/// These are programming errors; retrying will not help.
#[derive(Debug)]
pub(super) struct UsageError {
    message: Box<str>,
}

impl std::error::Error for UsageError {}

impl core::fmt::Display for UsageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "usage error: {}", self.message)
    }
}

impl Error {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Usage(UsageError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a usage error.
    pub fn is_usage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Usage(_))
    }
}
