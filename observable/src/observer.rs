use crate::{BoxError, Handlers, Teardown};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

/// The producer side of a subscription.
///
/// An Observer forwards values and the terminal event to the consumer's handlers, and guarantees
/// that nothing is delivered once the subscription has terminated. Cloning is cheap and every clone
/// refers to the same subscription, so a producer may hand a clone to a task or timer that emits later.
pub struct Observer<T, E = BoxError>(Arc<Inner<T, E>>);

struct Inner<T, E> {
    handlers: Handlers<T, E>,
    // Set by the first terminal event or unsubscribe. Gates every delivery
    stopped: AtomicBool,
    // Set by unsubscribe only. Gates the teardown
    unsubscribed: AtomicBool,
    teardown: Mutex<Option<Teardown>>,
}

impl<T, E> Clone for Observer<T, E> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T, E> std::fmt::Debug for Observer<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer").field("handlers", &self.0.handlers).field("unsubscribed", &self.is_unsubscribed()).finish()
    }
}

impl<T, E> Observer<T, E> {
    pub fn new(handlers: Handlers<T, E>) -> Self {
        Self(Arc::new(Inner {
            handlers,
            stopped: AtomicBool::new(false),
            unsubscribed: AtomicBool::new(false),
            teardown: Mutex::new(None),
        }))
    }

    /// Deliver a value. Dropped silently once the subscription has terminated
    pub fn next(&self, value: T) {
        if self.0.stopped.load(Ordering::Acquire) {
            trace!("Observer.next after termination - dropped");
            return;
        }
        if let Some(next) = &self.0.handlers.next {
            next(value);
        }
    }

    /// Terminate with an error. The error handler (if any) is called once, then the subscription is torn down
    pub fn error(&self, error: E) {
        if self.0.stopped.swap(true, Ordering::AcqRel) {
            trace!("Observer.error after termination - dropped");
            return;
        }
        debug!("Observer.error");
        if let Some(handler) = &self.0.handlers.error {
            handler(error);
        }
        self.unsubscribe();
    }

    /// Terminate gracefully. The complete handler (if any) is called once, then the subscription is torn down
    pub fn complete(&self) {
        if self.0.stopped.swap(true, Ordering::AcqRel) {
            trace!("Observer.complete after termination - dropped");
            return;
        }
        debug!("Observer.complete");
        if let Some(handler) = &self.0.handlers.complete {
            handler();
        }
        self.unsubscribe();
    }

    /// Stop delivering and run the teardown. Only the first call has any effect
    pub fn unsubscribe(&self) {
        self.0.stopped.store(true, Ordering::Release);
        // the flag must flip before the teardown runs, so a teardown that unsubscribes again is a no-op
        if self.0.unsubscribed.swap(true, Ordering::AcqRel) {
            return;
        }
        let teardown = self.0.teardown.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(teardown) = teardown {
            debug!("Observer.unsubscribe - running teardown");
            teardown.run();
        }
    }

    pub fn is_unsubscribed(&self) -> bool { self.0.unsubscribed.load(Ordering::Acquire) }

    /// Attach the producer's teardown. If the subscription already ended while the producer was
    /// running, the teardown runs right away instead.
    pub(crate) fn attach_teardown(&self, teardown: Teardown) {
        let mut slot = self.0.teardown.lock().unwrap_or_else(PoisonError::into_inner);
        if self.0.unsubscribed.load(Ordering::Acquire) {
            drop(slot);
            trace!("Observer already unsubscribed - running teardown immediately");
            teardown.run();
        } else {
            *slot = Some(teardown);
        }
    }
}
