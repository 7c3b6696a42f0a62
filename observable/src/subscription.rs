use crate::Observer;

/// Trait for abstractly representing a cancellable Observer<T, E>
trait Unsubscribe: Send + Sync {
    fn unsubscribe(&self);
}

impl<T, E> Unsubscribe for Observer<T, E> {
    fn unsubscribe(&self) { Observer::unsubscribe(self) }
}

/// A handle to a live subscription. The only thing it can do is cancel.
///
/// Dropping the handle does not cancel the subscription - call [`Subscription::unsubscribe`].
pub struct Subscription {
    observer: Box<dyn Unsubscribe>,
}

impl Subscription {
    pub(crate) fn new<T: 'static, E: 'static>(observer: Observer<T, E>) -> Self { Self { observer: Box::new(observer) } }

    /// Cancel the subscription and run its teardown. Calling this again, or after the
    /// subscription completed or errored, is a no-op.
    pub fn unsubscribe(&self) { self.observer.unsubscribe() }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_struct("Subscription").finish_non_exhaustive() }
}
