// Every macro forwards to the function of the same family in `check`. Extra
// trailing arguments are `format!` arguments that replace the default message.

#[doc(hidden)]
#[macro_export]
macro_rules! __verity_msg {
    () => {
        ::core::option::Option::None
    };
    ($($arg:tt)+) => {
        ::core::option::Option::Some(::core::format_args!($($arg)+))
    };
}

/// Checks that a condition is true.
///
/// ```
/// let t = verity::Recorder::new();
/// assert!(verity::check!(&t, 1 < 2));
/// assert!(!verity::check!(&t, 1 > 2, "{} is not above {}", 1, 2));
/// assert_eq!(t.last().unwrap().failure.message, "1 is not above 2");
/// ```
#[macro_export]
macro_rules! check {
    ($t:expr, $cond:expr $(,)?) => {
        $crate::check::is_true($t, $cond, $crate::__verity_msg!())
    };
    ($t:expr, $cond:expr, $($arg:tt)+) => {
        $crate::check::is_true($t, $cond, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_false {
    ($t:expr, $cond:expr $(,)?) => {
        $crate::check::is_false($t, $cond, $crate::__verity_msg!())
    };
    ($t:expr, $cond:expr, $($arg:tt)+) => {
        $crate::check::is_false($t, $cond, $crate::__verity_msg!($($arg)+))
    };
}

/// Aborts the test unless the condition holds.
#[macro_export]
macro_rules! require {
    ($t:expr, $cond:expr $(,)?) => {
        $crate::check::fatal($t, $cond, $crate::__verity_msg!())
    };
    ($t:expr, $cond:expr, $($arg:tt)+) => {
        $crate::check::fatal($t, $cond, $crate::__verity_msg!($($arg)+))
    };
}

/// Aborts the test if the operand holds an error.
#[macro_export]
macro_rules! require_ok {
    ($t:expr, $err:expr $(,)?) => {
        $crate::check::fatal_error($t, $err, $crate::__verity_msg!())
    };
    ($t:expr, $err:expr, $($arg:tt)+) => {
        $crate::check::fatal_error($t, $err, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_err {
    ($t:expr, $err:expr $(,)?) => {
        $crate::check::error($t, $err, $crate::__verity_msg!())
    };
    ($t:expr, $err:expr, $($arg:tt)+) => {
        $crate::check::error($t, $err, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_ok {
    ($t:expr, $err:expr $(,)?) => {
        $crate::check::no_error($t, $err, $crate::__verity_msg!())
    };
    ($t:expr, $err:expr, $($arg:tt)+) => {
        $crate::check::no_error($t, $err, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_eq {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::check::equals($t, $expected, $actual, $crate::__verity_msg!())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::check::equals($t, $expected, $actual, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_ne {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::check::not_equals($t, $expected, $actual, $crate::__verity_msg!())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::check::not_equals($t, $expected, $actual, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_nil {
    ($t:expr, $value:expr $(,)?) => {
        $crate::check::nil($t, $value, $crate::__verity_msg!())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::check::nil($t, $value, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_not_nil {
    ($t:expr, $value:expr $(,)?) => {
        $crate::check::not_nil($t, $value, $crate::__verity_msg!())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::check::not_nil($t, $value, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_len {
    ($t:expr, $expected:expr, $value:expr $(,)?) => {
        $crate::check::len($t, $expected, $value, $crate::__verity_msg!())
    };
    ($t:expr, $expected:expr, $value:expr, $($arg:tt)+) => {
        $crate::check::len($t, $expected, $value, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_panics {
    ($t:expr, $f:expr $(,)?) => {
        $crate::check::panics($t, $f, $crate::__verity_msg!())
    };
    ($t:expr, $f:expr, $($arg:tt)+) => {
        $crate::check::panics($t, $f, $crate::__verity_msg!($($arg)+))
    };
}

/// Checks that both operands have the same dynamic type. Borrowing is
/// transparent: `check_type!(&t, &x, x)` passes.
#[macro_export]
macro_rules! check_type {
    ($t:expr, $expected:expr, $value:expr $(,)?) => {
        $crate::check::same_type($t, $expected, $value, $crate::__verity_msg!())
    };
    ($t:expr, $expected:expr, $value:expr, $($arg:tt)+) => {
        $crate::check::same_type($t, $expected, $value, $crate::__verity_msg!($($arg)+))
    };
}

#[macro_export]
macro_rules! check_prefix {
    ($t:expr, $s:expr, $prefix:expr $(,)?) => {
        $crate::check::has_prefix($t, $s, $prefix, $crate::__verity_msg!())
    };
    ($t:expr, $s:expr, $prefix:expr, $($arg:tt)+) => {
        $crate::check::has_prefix($t, $s, $prefix, $crate::__verity_msg!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::inspect::Nil;
    use crate::tester::{Method, Recorder};

    #[test]
    fn test_macros_without_message() {
        let t = Recorder::new();
        assert!(check!(&t, true));
        assert!(check_false!(&t, false));
        assert!(check_eq!(&t, vec![1u8], vec![1u8]));
        assert!(check_ne!(&t, 1u8, 2u8));
        assert!(check_nil!(&t, Nil));
        assert!(check_not_nil!(&t, Some(1u8)));
        assert!(check_len!(&t, 4, "1234"));
        assert!(check_panics!(&t, || panic!("expected")));
        assert!(check_type!(&t, 0i32, 1i32));
        assert!(check_prefix!(&t, "1234", "12"));
        assert!(check_ok!(&t, Ok::<(), std::io::Error>(())));
        assert!(check_err!(&t, Err::<(), _>(std::io::Error::other("x"))));
        assert!(t.is_empty());
    }

    #[test]
    fn test_macros_with_message() {
        let t = Recorder::new();
        let name = "widget";
        assert!(!check_eq!(&t, 1i32, 2i32, "{} count mismatch", name));
        assert_eq!(t.last().unwrap().failure.message, "widget count mismatch");

        assert!(!check_len!(&t, 1, "", "empty {}", name));
        assert_eq!(t.last().unwrap().failure.message, "empty widget");

        assert!(!check_prefix!(&t, "abc", "z", "plain message"));
        assert_eq!(t.last().unwrap().failure.message, "plain message");
        assert_eq!(t.count(), 3);
    }

    #[test]
    fn test_require_macros() {
        let t = Recorder::new();
        assert!(!t.run(|| require!(&t, true)));
        assert!(t.run(|| require!(&t, false, "stop here")));
        assert_eq!(t.method(), Some(Method::Fatal));
        assert_eq!(t.last().unwrap().failure.message, "stop here");

        let err: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
        assert!(t.run(|| require_ok!(&t, &err)));
        assert_eq!(
            t.last().unwrap().failure.message,
            "error 'disk full' not expected"
        );
    }

    #[test]
    fn test_trailing_comma() {
        let t = Recorder::new();
        assert!(check_eq!(&t, 1u8, 1u8,));
        assert!(check!(&t, true,));
    }
}
