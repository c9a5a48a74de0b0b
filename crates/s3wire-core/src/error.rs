//! Client-side failures.
//!
//! Errors reported by S3 itself are not Rust errors here; they are returned as
//! [`ErrorResult`](s3wire_model::ErrorResult) values inside a
//! [`ResponseOutcome`](s3wire_model::ResponseOutcome).

/// Errors raised while handing a built request to the transport.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The assembled URI was rejected.
    #[error("invalid request URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    /// The request could not be assembled.
    #[error("failed to build HTTP request: {0}")]
    Http(#[from] http::Error),
}
