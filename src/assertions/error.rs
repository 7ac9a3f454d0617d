use crate::assertions::AssertionResult;
use std::fmt;

/// Either a failure value or its absence.
pub trait Fallible {
    fn failure(&self) -> Option<&dyn fmt::Display>;
}

impl<T, E: fmt::Display> Fallible for Result<T, E> {
    fn failure(&self) -> Option<&dyn fmt::Display> {
        self.as_ref().err().map(|err| err as &dyn fmt::Display)
    }
}

impl<E: fmt::Display> Fallible for Option<E> {
    fn failure(&self) -> Option<&dyn fmt::Display> {
        self.as_ref().map(|err| err as &dyn fmt::Display)
    }
}

impl<F: Fallible + ?Sized> Fallible for &F {
    fn failure(&self) -> Option<&dyn fmt::Display> {
        (**self).failure()
    }
}

pub fn evaluate_error(err: &dyn Fallible) -> AssertionResult {
    AssertionResult::check(err.failure().is_some(), || {
        "error expected but not found".to_string()
    })
}

pub fn evaluate_no_error(err: &dyn Fallible) -> AssertionResult {
    match err.failure() {
        Some(failure) => AssertionResult::fail(format!("error '{}' not expected", failure)),
        None => AssertionResult::pass(),
    }
}
