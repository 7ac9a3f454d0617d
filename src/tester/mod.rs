//! The reporting side of a check: the [`Tester`] contract every check reports
//! through, plus two adapters for Rust's test harness.

mod context;
mod recorder;
pub mod reporter;

use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::path::Path;

pub use context::Context;
pub use recorder::{Method, Recorded, Recorder};

/// A failure sink. `error` records and lets the test continue; `fatal` records
/// and must not return.
pub trait Tester {
    fn error(&self, failure: Failure);
    fn fatal(&self, failure: Failure) -> !;
}

/// Unwind payload of the fatal path in the bundled testers.
///
/// Panic capture re-raises it, so a fatal report always ends the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

impl<T: Tester + ?Sized> Tester for &T {
    fn error(&self, failure: Failure) {
        (**self).error(failure)
    }

    fn fatal(&self, failure: Failure) -> ! {
        (**self).fatal(failure)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub fatal: bool,
}

impl Failure {
    pub fn at(location: &Location<'_>, message: String, fatal: bool) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
            message,
            fatal,
        }
    }

    /// File name without its directories.
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    pub fn location(&self) -> String {
        format!("{}:{}", self.file_name(), self.line)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}
