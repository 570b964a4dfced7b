mod driver_operation_failed;
mod invalid_connection_url;
mod invalid_result;
mod invalid_schema;
mod record_not_found;
mod type_conversion;
mod usage;

use driver_operation_failed::DriverOperationFailed;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_result::InvalidResult;
use invalid_schema::InvalidSchema;
use record_not_found::RecordNotFoundError;
use type_conversion::TypeConversionError;
use usage::UsageError;

use std::sync::Arc;

/// An error that can occur in rowmap.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        match err.inner.as_mut().and_then(Arc::get_mut) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                err
            }
            _ => Error {
                inner: Some(Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(anyhow::anyhow!("{err}")),
                    cause: Some(self),
                })),
            },
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::Adhoc(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(anyhow::Error),
    Usage(UsageError),
    InvalidSchema(InvalidSchema),
    DriverOperationFailed(DriverOperationFailed),
    InvalidConnectionUrl(InvalidConnectionUrl),
    TypeConversion(TypeConversionError),
    InvalidResult(InvalidResult),
    RecordNotFound(RecordNotFoundError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Usage(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            InvalidResult(err) => core::fmt::Display::fmt(err, f),
            RecordNotFound(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown rowmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Adhoc(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::Value;
    use anyhow::anyhow;

    #[test]
    fn error_size() {
        let expected_size = std::mem::size_of::<usize>();
        assert_eq!(expected_size, std::mem::size_of::<Error>());
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from(anyhow!("root cause"));
        let mid = Error::from(anyhow!("middle context"));
        let top = Error::from(anyhow!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn usage_error() {
        let err = Error::usage("table \"student\" has no primary key");
        assert!(err.is_usage());
        assert!(!err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "usage error: table \"student\" has no primary key"
        );
    }

    #[test]
    fn invalid_schema_error() {
        let err = Error::invalid_schema("type \"m\": missing tag for field \"id\"");
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "invalid schema: type \"m\": missing tag for field \"id\""
        );
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(Value::I64(42), "String");
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert I64 to String");
    }

    #[test]
    fn record_not_found_with_context_chain() {
        let err = Error::record_not_found("table=student")
            .context(Error::from(anyhow!("query_row failed")));

        assert_eq!(
            err.to_string(),
            "query_row failed: record not found: table=student"
        );
    }

    #[test]
    fn driver_operation_failed_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "socket closed");
        let err = Error::driver_operation_failed(io);
        assert!(err.is_driver_operation_failed());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "socket closed");
    }

    #[test]
    fn invalid_result_error() {
        let err = Error::invalid_result("expected 2 destinations, got 3");
        assert!(err.is_invalid_result());
        assert_eq!(
            err.to_string(),
            "invalid result: expected 2 destinations, got 3"
        );
    }
}
