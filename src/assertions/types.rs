use crate::assertions::AssertionResult;
use crate::inspect::{type_name_of, Inspect};

/// Compares dynamic type identity only; contents are ignored.
pub fn evaluate_type(expected: &dyn Inspect, value: &dyn Inspect) -> AssertionResult {
    AssertionResult::check(expected.type_info() == value.type_info(), || {
        format!(
            "type '{}' expected and found '{}'",
            type_name_of(expected),
            type_name_of(value)
        )
    })
}
