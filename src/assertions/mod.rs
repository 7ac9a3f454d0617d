//! Pure predicate evaluators. Nothing in here reports anything; each
//! evaluator returns an [`AssertionResult`] carrying the default failure
//! message, which the `check` layer may replace with a caller override.

pub mod boolean;
pub mod equality;
pub mod error;
pub mod length;
pub mod nil;
pub mod panic;
pub mod prefix;
pub mod types;

#[derive(Debug, Clone, PartialEq)]
pub struct AssertionResult {
    pub passed: bool,
    pub message: String,
}

impl AssertionResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    pub fn fail(message: String) -> Self {
        Self {
            passed: false,
            message,
        }
    }

    /// Builds the failure message only when the predicate did not hold.
    pub fn check(passed: bool, message: impl FnOnce() -> String) -> Self {
        if passed {
            Self::pass()
        } else {
            Self::fail(message())
        }
    }
}
