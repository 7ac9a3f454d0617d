use crate::assertions::AssertionResult;
use crate::inspect::{display, is_nilable, Inspect};

fn holds_nil(value: &dyn Inspect) -> bool {
    value.type_info().is_none() || value.is_nil()
}

pub fn evaluate_nil(value: &dyn Inspect) -> AssertionResult {
    let passed = is_nilable(value) && holds_nil(value);
    AssertionResult::check(passed, || {
        format!("nil expected and found '{}'", display(value))
    })
}

/// Concrete values are never absent, so only nilable kinds are inspected.
pub fn evaluate_not_nil(value: &dyn Inspect) -> AssertionResult {
    if !is_nilable(value) {
        return AssertionResult::pass();
    }
    AssertionResult::check(!holds_nil(value), || {
        format!("not nil expected and found '{}'", display(value))
    })
}
