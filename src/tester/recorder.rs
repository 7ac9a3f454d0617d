use super::{Aborted, Failure, Tester};
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Error,
    Fatal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recorded {
    pub method: Method,
    pub failure: Failure,
}

/// A [`Tester`] that keeps every report for later inspection.
///
/// The fatal path records the failure and then unwinds with an [`Aborted`]
/// payload. The panic hook is not invoked, so nothing is printed; use
/// [`Recorder::run`] to contain the unwind.
#[derive(Debug, Default)]
pub struct Recorder {
    records: Mutex<Vec<Recorded>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Recorded>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records(&self) -> Vec<Recorded> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<Recorded> {
        self.lock().last().cloned()
    }

    /// Method of the most recent report.
    pub fn method(&self) -> Option<Method> {
        self.lock().last().map(|record| record.method)
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Runs `f`, returning `true` if it was aborted through the fatal path.
    /// Any other panic keeps unwinding.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(()) => false,
            Err(payload) if payload.is::<Aborted>() => true,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    fn push(&self, method: Method, failure: Failure) {
        self.lock().push(Recorded { method, failure });
    }
}

impl Tester for Recorder {
    fn error(&self, failure: Failure) {
        self.push(Method::Error, failure);
    }

    fn fatal(&self, failure: Failure) -> ! {
        self.push(Method::Fatal, failure);
        panic::resume_unwind(Box::new(Aborted))
    }
}
