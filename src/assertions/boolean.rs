use crate::assertions::AssertionResult;

pub fn evaluate_true(condition: bool) -> AssertionResult {
    AssertionResult::check(condition, || "assert condition is not true".to_string())
}

pub fn evaluate_false(condition: bool) -> AssertionResult {
    AssertionResult::check(!condition, || "assert condition is not false".to_string())
}
