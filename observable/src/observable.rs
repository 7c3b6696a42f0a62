use crate::{BoxError, IntoHandlers, Observer, Subscription, Teardown};
use std::sync::Arc;
use tracing::debug;

/// Type alias for the function that drives a subscription
pub type Producer<T, E> = dyn Fn(Observer<T, E>) -> Teardown + Send + Sync + 'static;

/// A cold, push-based stream of values.
///
/// An Observable is only a description: nothing runs until [`Observable::subscribe`] is called, and
/// every subscription invokes the producer again with its own [`Observer`]. Subscriptions share no state.
pub struct Observable<T, E = BoxError>(Arc<Producer<T, E>>);

impl<T, E> Clone for Observable<T, E> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T, E> std::fmt::Debug for Observable<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_struct("Observable").finish_non_exhaustive() }
}

impl<T: 'static, E: 'static> Observable<T, E> {
    /// Wrap a producer. The producer emits against the observer it is given and returns the
    /// teardown to run when the subscription ends.
    pub fn new<F>(producer: F) -> Self
    where F: Fn(Observer<T, E>) -> Teardown + Send + Sync + 'static {
        Self(Arc::new(producer))
    }

    /// Run the producer for a new consumer. Synchronous producers have finished emitting by the time this returns
    pub fn subscribe<H>(&self, handlers: H) -> Subscription
    where H: IntoHandlers<T, E> {
        Subscription::new(self.subscribe_observer(handlers))
    }

    pub(crate) fn subscribe_observer<H>(&self, handlers: H) -> Observer<T, E>
    where H: IntoHandlers<T, E> {
        let observer = Observer::new(handlers.into_handlers());
        debug!("Observable.subscribe - running producer");
        let teardown = (self.0)(observer.clone());
        observer.attach_teardown(teardown);
        observer
    }

    /// Completes immediately without emitting anything
    pub fn empty() -> Self {
        Self::new(|observer| {
            observer.complete();
            Teardown::none()
        })
    }
}

impl<T, E> Observable<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: 'static,
{
    /// Emits each of `values` in order, then completes. Every subscription receives the full sequence
    #[allow(clippy::should_implement_trait)]
    pub fn from<I>(values: I) -> Self
    where I: IntoIterator<Item = T> {
        let values: Arc<[T]> = values.into_iter().collect();
        Self::new(move |observer| {
            for value in values.iter() {
                observer.next(value.clone());
            }
            observer.complete();
            let emitted = values.len();
            Teardown::new(move || debug!("Observable.from teardown ran after {emitted} values"))
        })
    }
}

impl<T, E> Observable<T, E>
where
    T: 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Errors immediately with a clone of `error`
    pub fn failed(error: E) -> Self {
        Self::new(move |observer| {
            observer.error(error.clone());
            Teardown::none()
        })
    }
}

impl<T, E> FromIterator<T> for Observable<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self { Observable::from(iter) }
}
