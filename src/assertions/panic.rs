use crate::assertions::AssertionResult;
use crate::tester::Aborted;
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

const DID_NOT_PANIC: &str = "function did not panic";

/// Best-effort description of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "Box<dyn Any>"
    }
}

/// A fatal report is not a panic of the checked code: its unwind keeps going.
fn captured(payload: Box<dyn Any + Send>) -> AssertionResult {
    if payload.is::<Aborted>() {
        panic::resume_unwind(payload);
    }
    tracing::trace!(payload = %panic_message(payload.as_ref()), "captured panic");
    AssertionResult::pass()
}

pub fn evaluate_panics<F: FnOnce()>(f: F) -> AssertionResult {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => AssertionResult::fail(DID_NOT_PANIC.to_string()),
        Err(payload) => captured(payload),
    }
}

pub async fn evaluate_panics_async<F: Future>(future: F) -> AssertionResult {
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(_) => AssertionResult::fail(DID_NOT_PANIC.to_string()),
        Err(payload) => captured(payload),
    }
}
