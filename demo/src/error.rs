use thiserror::Error;

/// Errors a request stream can terminate with
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Connection closed: {0}")]
    ConnectionClosed(String),
}
