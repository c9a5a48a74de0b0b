//! Shared types for the s3wire request-addressing and response-normalization layer.
//!
//! This crate holds the plain data that flows between the layers:
//!
//! - [`ClientConfig`] and [`Region`]: immutable per-client settings
//! - [`S3Operation`]: the operations the client knows how to address and decode
//! - [`S3ErrorCode`]: named and numeric error codes surfaced to callers
//! - [`ResponseOutcome`]: the normalized success-or-error result of one response

pub mod config;
pub mod error;
pub mod operations;
pub mod outcome;
pub mod types;

pub use config::ClientConfig;
pub use error::S3ErrorCode;
pub use operations::S3Operation;
pub use outcome::{ErrorResult, FieldValue, Record, ResponseOutcome, SuccessResult};
pub use types::Region;
