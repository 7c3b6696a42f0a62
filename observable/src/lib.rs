/*!
A minimal push-based observable stream for a single subscriber

# Design requirements:
- Observables are cold - nothing runs until `subscribe` is called, and every subscription runs the producer anew
- Each subscription gets its own Observer. No state is shared between subscriptions
- Consumers get back a handle that can only cancel. They can never re-drive a subscription
- At most one terminal event (error or complete) is delivered, after which the observer is inert
- The teardown returned by the producer runs exactly once, however the subscription ends
- Errors are opaque values - the observer never inspects them

# Basic usage

```rust
use pushstream::*;

let numbers = Observable::<i32>::from(vec![1, 2, 3]);
let subscription = numbers.subscribe(
    Handlers::<i32>::new()
        .on_next(|value: i32| println!("next: {value}"))
        .on_complete(|| println!("done")),
);
// Should print:
// next: 1
// next: 2
// next: 3
// done

// already complete, so this is a no-op
subscription.unsubscribe();
```

# Custom producers

```rust
use pushstream::*;

let ticks = Observable::<u32, String>::new(|observer| {
    observer.next(1);
    observer.error("boom".to_string());
    // ignored - the observer already terminated
    observer.next(2);
    Teardown::new(|| println!("cleaned up"))
});

ticks.subscribe(|value: u32| println!("tick {value}"));
```
*/

mod handlers;
mod observable;
mod observer;
mod subscription;
mod teardown;

pub use handlers::*;
pub use observable::*;
pub use observer::*;
pub use subscription::*;
pub use teardown::*;
