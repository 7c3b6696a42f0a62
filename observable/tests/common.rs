use std::sync::{Arc, Mutex};
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() { let _ = tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_test_writer().try_init(); }

#[allow(unused)]
pub fn watcher<T: Send + Sync + 'static>() -> (Box<dyn Fn(T) + Send + Sync>, Box<dyn Fn() -> Vec<T> + Send + Sync>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let accumulate = {
        let changes = changes.clone();
        Box::new(move |value: T| {
            changes.lock().unwrap().push(value);
        })
    };

    let check = Box::new(move || {
        let changes: Vec<T> = changes.lock().unwrap().drain(..).collect();
        changes
    });

    (accumulate, check)
}

/// A shared event log that every handler of a subscription writes into, so ordering across
/// next/error/complete/teardown can be asserted in one place
#[allow(unused)]
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

#[allow(unused)]
impl EventLog {
    pub fn new() -> Self { Self::default() }

    pub fn push(&self, event: impl Into<String>) { self.0.lock().unwrap().push(event.into()); }

    pub fn take(&self) -> Vec<String> { self.0.lock().unwrap().drain(..).collect() }

    pub fn count(&self, event: &str) -> usize { self.0.lock().unwrap().iter().filter(|e| e.as_str() == event).count() }
}
