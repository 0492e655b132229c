use std::time::Duration;
use thiserror::Error;

/// Ways a chat request can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// Connection refused, DNS failure, aborted fetch and the like
    #[error("request failed: {0}")]
    Network(String),

    #[error("endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not JSON or had no string `response` field
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}
