/// Cleanup returned by a producer. Runs at most once, when the subscription terminates
/// by completion, error or an explicit unsubscribe.
#[must_use = "a producer must hand its teardown back to the observable"]
pub struct Teardown(Option<Box<dyn FnOnce() + Send + 'static>>);

impl Teardown {
    pub fn new<F: FnOnce() + Send + 'static>(cleanup: F) -> Self { Self(Some(Box::new(cleanup))) }

    /// A teardown with nothing to clean up
    pub fn none() -> Self { Self(None) }

    pub fn is_none(&self) -> bool { self.0.is_none() }

    pub(crate) fn run(self) {
        if let Some(cleanup) = self.0 {
            cleanup();
        }
    }
}

impl Default for Teardown {
    fn default() -> Self { Self::none() }
}

impl std::fmt::Debug for Teardown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Teardown").field(&if self.0.is_some() { "some" } else { "none" }).finish()
    }
}
