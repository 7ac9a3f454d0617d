use crate::assertions::AssertionResult;
use crate::inspect::{display, is_nilable, Inspect};

/// Deep equality, widened so that a typed nil matches the untyped
/// absence-of-value and two nils of the same concrete type match each other.
/// Nils of different concrete types stay distinct.
pub fn equivalent(expected: &dyn Inspect, actual: &dyn Inspect) -> bool {
    if expected.deep_eq(actual) {
        return true;
    }

    if !(is_nilable(expected) && is_nilable(actual)) {
        return false;
    }

    match (expected.type_info(), actual.type_info()) {
        (Some(_), None) => expected.is_nil(),
        (None, Some(_)) => actual.is_nil(),
        (Some(left), Some(right)) => left == right && expected.is_nil() && actual.is_nil(),
        (None, None) => false,
    }
}

pub fn evaluate_equals(expected: &dyn Inspect, actual: &dyn Inspect) -> AssertionResult {
    AssertionResult::check(equivalent(expected, actual), || {
        format!(
            "'{}' and '{}' are not equal",
            display(expected),
            display(actual)
        )
    })
}

pub fn evaluate_not_equals(expected: &dyn Inspect, actual: &dyn Inspect) -> AssertionResult {
    AssertionResult::check(!equivalent(expected, actual), || {
        format!("'{}' and '{}' are equal", display(expected), display(actual))
    })
}
