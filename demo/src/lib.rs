//! Mock request traffic wired to a `pushstream` subscription.
//!
//! Nothing here is part of the stream primitive. It supplies payload values (requests), an opaque
//! error type and the three callbacks a consumer would hand to `subscribe`.

mod error;
mod handlers;
mod mock;
mod model;

pub use error::RequestError;
pub use handlers::*;
pub use mock::*;
pub use model::*;
