/// Default opaque error type for observables that don't name their own
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Type aliases for the boxed consumer callbacks
pub type NextHandler<T> = Box<dyn Fn(T) + Send + Sync + 'static>;
pub type ErrorHandler<E> = Box<dyn Fn(E) + Send + Sync + 'static>;
pub type CompleteHandler = Box<dyn Fn() + Send + Sync + 'static>;

/// The consumer side of a subscription: up to three optional callbacks.
///
/// Callbacks may return anything - the return value is discarded. A handler that answers with a
/// status (eg. a response for each request) is fine, but the status is never consulted by the observer.
pub struct Handlers<T, E = BoxError> {
    pub(crate) next: Option<NextHandler<T>>,
    pub(crate) error: Option<ErrorHandler<E>>,
    pub(crate) complete: Option<CompleteHandler>,
}

impl<T, E> Default for Handlers<T, E> {
    fn default() -> Self { Self { next: None, error: None, complete: None } }
}

impl<T, E> std::fmt::Debug for Handlers<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("next", &self.next.is_some())
            .field("error", &self.error.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

impl<T: 'static, E: 'static> Handlers<T, E> {
    /// An empty handler set. Every emission is accepted and dropped
    pub fn new() -> Self { Self::default() }

    /// Called for every value while the subscription is live
    pub fn on_next<F, R>(mut self, handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        R: 'static,
    {
        self.next = Some(Box::new(move |value: T| {
            let _ = handler(value);
        }));
        self
    }

    /// Called at most once, with the terminal error
    pub fn on_error<F, R>(mut self, handler: F) -> Self
    where
        F: Fn(E) -> R + Send + Sync + 'static,
        R: 'static,
    {
        self.error = Some(Box::new(move |error: E| {
            let _ = handler(error);
        }));
        self
    }

    /// Called at most once, when the producer finishes gracefully
    pub fn on_complete<F, R>(mut self, handler: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: 'static,
    {
        self.complete = Some(Box::new(move || {
            let _ = handler();
        }));
        self
    }
}

/// Trait for types that can be converted into a handler set
pub trait IntoHandlers<T, E> {
    fn into_handlers(self) -> Handlers<T, E>;
}

impl<T, E> IntoHandlers<T, E> for Handlers<T, E> {
    fn into_handlers(self) -> Handlers<T, E> { self }
}

// A bare closure only cares about values
impl<F, T: 'static, E: 'static> IntoHandlers<T, E> for F
where F: Fn(T) + Send + Sync + 'static
{
    fn into_handlers(self) -> Handlers<T, E> { Handlers::new().on_next(self) }
}

impl<T: Send + 'static, E: 'static> IntoHandlers<T, E> for std::sync::mpsc::Sender<T> {
    fn into_handlers(self) -> Handlers<T, E> {
        Handlers::new().on_next(move |value: T| {
            let _ = self.send(value); // Ignore send errors
        })
    }
}

#[cfg(feature = "tokio")]
impl<T: Send + 'static, E: 'static> IntoHandlers<T, E> for tokio::sync::mpsc::UnboundedSender<T> {
    fn into_handlers(self) -> Handlers<T, E> {
        Handlers::new().on_next(move |value: T| {
            let _ = self.send(value); // Ignore send errors
        })
    }
}
