use crate::assertions::AssertionResult;

pub fn evaluate_prefix(s: &str, prefix: &str) -> AssertionResult {
    AssertionResult::check(s.starts_with(prefix), || {
        format!("'{}' is not a prefix of '{}'", prefix, s)
    })
}
