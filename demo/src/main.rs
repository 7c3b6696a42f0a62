use anyhow::Result;
use pushstream_demo::{requests, requests_mock, serve};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // initialize tracing - RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    for request in requests_mock() {
        info!("queued {}", serde_json::to_string(&request)?);
    }

    // the mock stream is synchronous, so every request has been answered once this returns
    let subscription = serve(&requests());

    // already complete - this is a no-op and the teardown does not run again
    subscription.unsubscribe();

    Ok(())
}
