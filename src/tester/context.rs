use super::reporter;
use super::{Aborted, Failure, Tester};
use crate::config::Config;
use crate::error::{Error, Result};
use std::panic;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;

/// Soft-assertion context for `#[test]` functions.
///
/// Non-fatal reports are collected and the test keeps running. A fatal report
/// writes everything collected so far to stderr and unwinds with [`Aborted`],
/// which check-level panic capture never swallows. If failures are
/// still pending when the context is dropped, the drop panics so the test
/// fails; call [`Context::finish`] to get them as an [`Error`] instead.
///
/// ```should_panic
/// use verity::{check_eq, check_prefix, Context};
///
/// let t = Context::new();
/// check_eq!(&t, 1 + 1, 3);
/// check_prefix!(&t, "verity", "ver");
/// // dropping `t` fails the test with one collected failure
/// ```
#[derive(Debug, Default)]
pub struct Context {
    config: Config,
    failures: Mutex<Vec<Failure>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            failures: Mutex::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Failure>> {
        self.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn failures(&self) -> Vec<Failure> {
        self.lock().clone()
    }

    pub fn failed(&self) -> bool {
        !self.lock().is_empty()
    }

    fn take(&self) -> Vec<Failure> {
        std::mem::take(&mut *self.lock())
    }

    /// Consumes the context, turning collected failures into an error.
    pub fn finish(self) -> Result<()> {
        let failures = self.take();
        if failures.is_empty() {
            return Ok(());
        }
        Err(Error::Failed {
            count: failures.len(),
            report: reporter::render(&self.config, &failures),
        })
    }
}

impl Tester for Context {
    fn error(&self, failure: Failure) {
        tracing::trace!(location = %failure.location(), "collected: {}", failure.message);
        self.lock().push(failure);
    }

    fn fatal(&self, failure: Failure) -> ! {
        tracing::trace!(location = %failure.location(), "aborting: {}", failure.message);
        let mut failures = self.take();
        failures.push(failure);
        eprintln!("{}", reporter::render(&self.config, &failures));
        panic::resume_unwind(Box::new(Aborted))
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }
        let failures = self.take();
        if !failures.is_empty() {
            panic!("{}", reporter::render(&self.config, &failures));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, OutputFormat};
    use assert_matches::assert_matches;
    use std::panic::AssertUnwindSafe;

    fn plain() -> Context {
        Context::with_config(Config::default().with_color(ColorChoice::Never))
    }

    fn failure(message: &str, fatal: bool) -> Failure {
        Failure {
            file: "context.rs".to_string(),
            line: 10,
            column: 1,
            message: message.to_string(),
            fatal,
        }
    }

    #[test]
    fn test_passing_context_finishes_ok() {
        let t = plain();
        assert!(!t.failed());
        assert!(t.finish().is_ok());
    }

    #[test]
    fn test_collects_failures() {
        let t = plain();
        t.error(failure("first", false));
        t.error(failure("second", false));
        assert!(t.failed());
        assert_eq!(t.failures().len(), 2);

        let result = t.finish();
        assert_matches!(result, Err(Error::Failed { count: 2, .. }));
        if let Err(Error::Failed { report, .. }) = result {
            assert!(report.contains("FAIL context.rs:10 first"));
            assert!(report.contains("FAIL context.rs:10 second"));
        }
    }

    #[test]
    fn test_finish_with_json_report() {
        let t = Context::with_config(Config::default().with_format(OutputFormat::Json));
        t.error(failure("broken", false));
        match t.finish() {
            Err(Error::Failed { report, .. }) => {
                let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
                assert_eq!(parsed["failures"][0]["message"], "broken");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "FAIL context.rs:10 left behind")]
    fn test_drop_fails_with_pending_failures() {
        let t = plain();
        t.error(failure("left behind", false));
    }

    #[test]
    fn test_fatal_unwinds_with_abort_marker() {
        let t = plain();
        t.error(failure("soft", false));
        let payload = panic::catch_unwind(AssertUnwindSafe(|| {
            t.fatal(failure("hard", true));
        }))
        .unwrap_err();

        assert!(payload.is::<Aborted>());
        assert!(!t.failed());
    }
}
