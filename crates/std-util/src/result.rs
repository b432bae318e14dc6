/// Unwraps an `Ok` value, panicking with the `Err` otherwise. Extra
/// arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(err) => panic!("expected `Ok`; got error: {err:?}"),
        }
    };
    ($e:expr, $($msg:tt)+) => {
        match $e {
            Ok(value) => value,
            Err(err) => panic!("expected `Ok`; got error: {err:?}; {}", format_args!($($msg)+)),
        }
    };
}

/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra
/// arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(err) => err,
            Ok(value) => panic!("expected `Err`; got Ok({value:?})"),
        }
    };
    ($e:expr, $($msg:tt)+) => {
        match $e {
            Err(err) => err,
            Ok(value) => panic!("expected `Err`; got Ok({value:?}); {}", format_args!($($msg)+)),
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn unwraps_matching_variant() {
        let ok: Result<u8, &str> = Ok(1);
        let err: Result<u8, &str> = Err("boom");

        assert_eq!(assert_ok!(ok), 1);
        assert_eq!(assert_err!(err, "context {}", 1), "boom");
    }

    #[test]
    #[should_panic(expected = "expected `Ok`; got error: \"boom\"")]
    fn ok_panics_on_err() {
        let err: Result<u8, &str> = Err("boom");
        assert_ok!(err);
    }
}
