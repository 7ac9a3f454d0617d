use crate::assertions::AssertionResult;
use crate::inspect::{display, Inspect};

pub fn evaluate_len(expected: usize, value: &dyn Inspect) -> AssertionResult {
    let kind = value.kind();
    match value.length().filter(|_| kind.has_len()) {
        Some(actual) => AssertionResult::check(actual == expected, || {
            format!("len '{}' expected and found '{}'", expected, actual)
        }),
        None => AssertionResult::fail(format!(
            "cannot apply len to '{}' ({})",
            kind,
            display(value)
        )),
    }
}
