use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;

use crate::clipboard::ClipboardError;

/// How long a copy status stays on screen.
pub const CLEAR_AFTER_MS: u32 = 2_000;
pub const COPY_FAILED: &str = "Failed to copy";

/// One-shot delayed callbacks. Dropping the handle cancels the callback.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via gloo.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub fn copy_message(label: &str, outcome: &Result<(), ClipboardError>) -> String {
    match outcome {
        Ok(()) => format!("{label} copied!"),
        Err(_) => COPY_FAILED.to_string(),
    }
}

/// Status line shown after a copy, cleared again after [`CLEAR_AFTER_MS`].
///
/// A newer message replaces the pending clear, so the last message always
/// gets its full two seconds. Dropping the notice cancels any pending clear.
pub struct CopyNotice<S: Scheduler> {
    scheduler: S,
    publish: Rc<dyn Fn(Option<String>)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> CopyNotice<S> {
    pub fn new(scheduler: S, publish: impl Fn(Option<String>) + 'static) -> Self {
        Self {
            scheduler,
            publish: Rc::new(publish),
            pending: RefCell::new(None),
        }
    }

    pub fn report(&self, label: &str, outcome: &Result<(), ClipboardError>) {
        self.show(copy_message(label, outcome));
    }

    pub fn show(&self, message: String) {
        (self.publish)(Some(message));
        let publish = Rc::clone(&self.publish);
        let handle = self
            .scheduler
            .schedule(CLEAR_AFTER_MS, Box::new(move || publish(None)));
        // the previous handle drops here, cancelling its clear
        self.pending.replace(Some(handle));
    }
}
