//! The checks. Each one evaluates its predicate, and on failure builds a
//! [`Failure`] attributed to the caller and hands it to the [`Tester`].
//!
//! Non-fatal checks return whether the predicate held. [`fatal`] and
//! [`fatal_error`] report through the fatal path instead, which does not
//! return.
//!
//! `msg` overrides the default failure message entirely when present. The
//! `check_*!` macros fill it from optional trailing `format!` arguments.

use crate::assertions::boolean::{evaluate_false, evaluate_true};
use crate::assertions::equality::{evaluate_equals, evaluate_not_equals};
use crate::assertions::error::{evaluate_error, evaluate_no_error, Fallible};
use crate::assertions::length::evaluate_len;
use crate::assertions::nil::{evaluate_nil, evaluate_not_nil};
use crate::assertions::panic::{evaluate_panics, evaluate_panics_async};
use crate::assertions::prefix::evaluate_prefix;
use crate::assertions::types::evaluate_type;
use crate::assertions::AssertionResult;
use crate::inspect::Inspect;
use crate::tester::{Failure, Tester};
use std::fmt;
use std::future::Future;
use std::panic::Location;

/// Picks the caller's override when one was given, the default otherwise.
pub fn message(msg: Option<fmt::Arguments<'_>>, default: String) -> String {
    match msg {
        Some(args) => args.to_string(),
        None => default,
    }
}

fn report_at<T: Tester + ?Sized>(
    t: &T,
    location: &Location<'_>,
    result: AssertionResult,
    msg: Option<fmt::Arguments<'_>>,
) -> bool {
    if result.passed {
        return true;
    }
    let failure = Failure::at(location, message(msg, result.message), false);
    tracing::debug!(location = %failure.location(), "check failed: {}", failure.message);
    t.error(failure);
    false
}

#[track_caller]
fn report<T: Tester + ?Sized>(
    t: &T,
    result: AssertionResult,
    msg: Option<fmt::Arguments<'_>>,
) -> bool {
    report_at(t, Location::caller(), result, msg)
}

#[track_caller]
fn abort_if_failed<T: Tester + ?Sized>(
    t: &T,
    result: AssertionResult,
    msg: Option<fmt::Arguments<'_>>,
) {
    if result.passed {
        return;
    }
    let failure = Failure::at(Location::caller(), message(msg, result.message), true);
    tracing::debug!(location = %failure.location(), "fatal check failed: {}", failure.message);
    t.fatal(failure)
}

#[track_caller]
pub fn is_true<T: Tester + ?Sized>(
    t: &T,
    condition: bool,
    msg: Option<fmt::Arguments<'_>>,
) -> bool {
    report(t, evaluate_true(condition), msg)
}

#[track_caller]
pub fn is_false<T: Tester + ?Sized>(
    t: &T,
    condition: bool,
    msg: Option<fmt::Arguments<'_>>,
) -> bool {
    report(t, evaluate_false(condition), msg)
}

/// Aborts the test through the fatal path unless `condition` holds.
#[track_caller]
pub fn fatal<T: Tester + ?Sized>(t: &T, condition: bool, msg: Option<fmt::Arguments<'_>>) {
    abort_if_failed(t, evaluate_true(condition), msg)
}

/// Aborts the test through the fatal path if `err` holds a failure.
#[track_caller]
pub fn fatal_error<T, F>(t: &T, err: F, msg: Option<fmt::Arguments<'_>>)
where
    T: Tester + ?Sized,
    F: Fallible,
{
    abort_if_failed(t, evaluate_no_error(&err), msg)
}

#[track_caller]
pub fn error<T, F>(t: &T, err: F, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Tester + ?Sized,
    F: Fallible,
{
    report(t, evaluate_error(&err), msg)
}

#[track_caller]
pub fn no_error<T, F>(t: &T, err: F, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Tester + ?Sized,
    F: Fallible,
{
    report(t, evaluate_no_error(&err), msg)
}

#[track_caller]
pub fn equals<T, E, A>(t: &T, expected: E, actual: A, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Tester + ?Sized,
    E: Inspect,
    A: Inspect,
{
    report(t, evaluate_equals(&expected, &actual), msg)
}

#[track_caller]
pub fn not_equals<T, E, A>(
    t: &T,
    expected: E,
    actual: A,
    msg: Option<fmt::Arguments<'_>>,
) -> bool
where
    T: Tester + ?Sized,
    E: Inspect,
    A: Inspect,
{
    report(t, evaluate_not_equals(&expected, &actual), msg)
}

#[track_caller]
pub fn nil<T, V>(t: &T, value: V, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Tester + ?Sized,
    V: Inspect,
{
    report(t, evaluate_nil(&value), msg)
}

#[track_caller]
pub fn not_nil<T, V>(t: &T, value: V, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Tester + ?Sized,
    V: Inspect,
{
    report(t, evaluate_not_nil(&value), msg)
}

#[track_caller]
pub fn len<T, V>(t: &T, expected: usize, value: V, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Tester + ?Sized,
    V: Inspect,
{
    report(t, evaluate_len(expected, &value), msg)
}

/// Succeeds when `f` panics. The panic is swallowed.
#[track_caller]
pub fn panics<T, F>(t: &T, f: F, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Tester + ?Sized,
    F: FnOnce(),
{
    report(t, evaluate_panics(f), msg)
}

/// Async counterpart of [`panics`]. The caller location and the message are
/// captured when the future is created.
#[track_caller]
pub fn panics_async<'a, T, F>(
    t: &'a T,
    future: F,
    msg: Option<fmt::Arguments<'_>>,
) -> impl Future<Output = bool> + 'a
where
    T: Tester + ?Sized,
    F: Future + 'a,
{
    let location = Location::caller();
    let msg = msg.map(|args| args.to_string());
    async move {
        let result = evaluate_panics_async(future).await;
        match msg {
            Some(msg) => report_at(t, location, result, Some(format_args!("{}", msg))),
            None => report_at(t, location, result, None),
        }
    }
}

/// Compares dynamic types only. A borrow is not a pointer kind, so `&x` and
/// `x` share a type; `Box`, `Rc` and `Arc` do not.
#[track_caller]
pub fn same_type<T, E, V>(t: &T, expected: E, value: V, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: Tester + ?Sized,
    E: Inspect,
    V: Inspect,
{
    report(t, evaluate_type(&expected, &value), msg)
}

#[track_caller]
pub fn has_prefix<T: Tester + ?Sized>(
    t: &T,
    s: &str,
    prefix: &str,
    msg: Option<fmt::Arguments<'_>>,
) -> bool {
    report(t, evaluate_prefix(s, prefix), msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{Interface, Nil};
    use crate::config::{ColorChoice, Config};
    use crate::tester::{Aborted, Context, Method, Recorder};
    use assert_matches::assert_matches;
    use futures::FutureExt;
    use std::panic::{self, AssertUnwindSafe};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_message() {
        assert_eq!(
            message(Some(format_args!("{}", "a message")), "default message".into()),
            "a message"
        );
        assert_eq!(message(None, "default message".into()), "default message");
    }

    #[test]
    fn test_override_replaces_default() {
        let t = Recorder::new();
        assert!(!equals(&t, 1i32, 2i32, Some(format_args!("custom {}", 42))));
        assert_eq!(t.last().unwrap().failure.message, "custom 42");
    }

    #[test]
    fn test_true() {
        assert!(!is_true(&Recorder::new(), false, None));
        assert!(is_true(&Recorder::new(), true, None));
    }

    #[test]
    fn test_false() {
        assert!(!is_false(&Recorder::new(), true, None));
        assert!(is_false(&Recorder::new(), false, None));
    }

    #[test]
    fn test_fatal() {
        let t1 = Recorder::new();
        assert!(t1.run(|| fatal(&t1, false, None)));
        assert_eq!(t1.method(), Some(Method::Fatal));

        let t2 = Recorder::new();
        assert!(!t2.run(|| fatal(&t2, true, None)));
        assert_eq!(t2.method(), None);
    }

    #[test]
    fn test_fatal_error() {
        let t1 = Recorder::new();
        let none: Result<(), std::io::Error> = Ok(());
        assert!(!t1.run(|| fatal_error(&t1, &none, None)));
        assert!(t1.is_empty());

        let t2 = Recorder::new();
        let err: Result<(), anyhow::Error> = Err(anyhow::anyhow!("an error"));
        assert!(t2.run(|| fatal_error(&t2, &err, None)));
        assert_eq!(t2.count(), 1);
        let record = t2.last().unwrap();
        assert_eq!(record.method, Method::Fatal);
        assert_eq!(record.failure.message, "error 'an error' not expected");
        assert!(record.failure.fatal);
    }

    #[test]
    fn test_error() {
        let ok: Result<(), std::io::Error> = Ok(());
        assert!(!error(&Recorder::new(), &ok, None));
        let err: Result<(), anyhow::Error> = Err(anyhow::anyhow!("an error"));
        assert!(error(&Recorder::new(), &err, None));
    }

    #[test]
    fn test_no_error() {
        let err: Result<(), anyhow::Error> = Err(anyhow::anyhow!("an error"));
        assert!(!no_error(&Recorder::new(), &err, None));
        let ok: Result<(), std::io::Error> = Ok(());
        assert!(no_error(&Recorder::new(), &ok, None));
    }

    #[test]
    fn test_equals_reports_once() {
        let t = Recorder::new();
        assert!(equals(&t, None::<i32>, Nil, None));
        assert!(t.is_empty());

        assert!(!equals(&t, None::<i32>, None::<String>, None));
        assert_eq!(t.count(), 1);
        assert_eq!(t.method(), Some(Method::Error));
    }

    #[test]
    fn test_not_equals() {
        let t = Recorder::new();
        assert!(not_equals(&t, 1i32, 2i32, None));
        assert!(!not_equals(&t, Interface::nil(), None::<u8>, None));
        assert_eq!(
            t.last().unwrap().failure.message,
            "'<nil>' and 'None' are equal"
        );
    }

    #[test]
    fn test_nil_and_not_nil() {
        let t = Recorder::new();
        assert!(nil(&t, Nil, None));
        assert!(!nil(&t, 0i32, None));
        assert!(not_nil(&t, 0i32, None));
        assert!(!not_nil(&t, None::<u8>, None));
        assert_eq!(t.count(), 2);
    }

    #[test]
    fn test_len() {
        let t = Recorder::new();
        assert!(len(&t, 0, "", None));
        assert!(len(&t, 3, vec![1u8, 2, 3], None));
        assert!(!len(&t, 0, 1234i32, None));
        assert_eq!(
            t.last().unwrap().failure.message,
            "cannot apply len to 'int' (1234)"
        );
    }

    #[test]
    fn test_len_of_borrowed_collection() {
        let values = vec!["a", "b"];
        assert!(len(&Recorder::new(), 2, &values, None));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_panics() {
        init_tracing();
        let t1 = Recorder::new();
        assert!(panics(&t1, || panic!("an error"), None));
        assert!(t1.is_empty());

        let t2 = Recorder::new();
        assert!(!panics(&t2, || {}, None));
        assert_eq!(t2.count(), 1);
        let record = t2.last().unwrap();
        assert_eq!(record.method, Method::Error);
        assert_eq!(record.failure.message, "function did not panic");
    }

    #[test]
    fn test_fatal_inside_panics_still_aborts() {
        let t = Recorder::new();
        let mut after = false;
        let aborted = t.run(|| {
            panics(&t, || fatal(&t, false, Some(format_args!("stop"))), None);
            after = true;
        });

        assert!(aborted);
        assert!(!after);
        assert_eq!(t.count(), 1);
        assert_eq!(t.method(), Some(Method::Fatal));
        assert_eq!(t.last().unwrap().failure.message, "stop");
    }

    #[test]
    fn test_context_fatal_inside_panics_still_aborts() {
        let t = Context::with_config(Config::default().with_color(ColorChoice::Never));
        let mut after = false;
        let payload = panic::catch_unwind(AssertUnwindSafe(|| {
            panics(&t, || fatal_error(&t, Some("disk full"), None), None);
            after = true;
        }))
        .unwrap_err();

        assert!(payload.is::<Aborted>());
        assert!(!after);
        assert!(!t.failed());
    }

    #[tokio::test]
    async fn test_fatal_inside_panics_async_still_aborts() {
        let t = Recorder::new();
        let outcome = AssertUnwindSafe(panics_async(&t, async { fatal(&t, false, None) }, None))
            .catch_unwind()
            .await;

        assert!(outcome.unwrap_err().is::<Aborted>());
        assert_eq!(t.method(), Some(Method::Fatal));
    }

    #[tokio::test]
    async fn test_panics_async() {
        let t = Recorder::new();
        assert!(panics_async(&t, async { panic!("boom") }, None).await);
        assert!(t.is_empty());

        assert!(!panics_async(&t, async {}, Some(format_args!("expected {}", "boom"))).await);
        assert_eq!(t.last().unwrap().failure.message, "expected boom");
    }

    #[test]
    fn test_same_type() {
        let t = Recorder::new();
        assert!(same_type(&t, 0i32, 1i32, None));
        assert!(!same_type(&t, 0i32, "0", None));
        assert!(same_type(&t, Box::new(1u8), Box::new(2u8), None));
        assert_eq!(
            t.last().unwrap().failure.message,
            "type 'i32' expected and found '&str'"
        );
    }

    #[test]
    fn test_has_prefix() {
        let t = Recorder::new();
        assert!(has_prefix(&t, "1234", "12", None));
        assert!(!has_prefix(&t, "1234", "34", None));
    }

    #[test]
    fn test_failure_points_at_caller() {
        init_tracing();
        let t = Recorder::new();
        let line = line!() + 1;
        is_true(&t, false, None);
        let failure = t.last().unwrap().failure;
        assert_eq!(failure.file_name(), "check.rs");
        assert_eq!(failure.line, line);
    }

    #[test]
    fn test_dyn_tester() {
        let recorder = Recorder::new();
        let t: &dyn Tester = &recorder;
        assert!(!is_true(t, false, None));
        assert_matches!(recorder.method(), Some(Method::Error));
    }
}
