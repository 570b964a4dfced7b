#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Err` and checks it with one of the error's `is_*` predicates.
///
/// ```ignore
/// assert_err_is!(mapper.delete(&mut exec, &mut keyless).await, is_usage);
/// ```
#[macro_export]
macro_rules! assert_err_is {
    ($e:expr, $pred:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$pred(),
            "expected error satisfying `{}`; actual={:?}",
            stringify!($pred),
            err,
        );
        err
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            actual => panic!("expected `Ok`; actual={:?}", actual),
        }
    };
}
