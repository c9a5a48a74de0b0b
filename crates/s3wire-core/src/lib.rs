//! Request addressing and response normalization for S3.
//!
//! This crate decides how each request names its bucket and object, and turns
//! raw HTTP responses into structured outcomes. It does no I/O: the caller's
//! transport sends the [`RequestShape`] and hands the response back.
//!
//! # Key components
//!
//! - [`validation`]: bucket-name DNS compatibility
//! - [`endpoint`]: region to hostname resolution
//! - [`builder`] and [`params`]: virtual-hosted vs path-style addressing, escaping, query and headers
//! - [`extract`]: error classification, including bodyless errors and `<Error>` bodies on `200 OK`
//! - [`mapper`]: per-operation response field tables
//! - [`S3Client`]: facade over all of the above

pub mod builder;
pub mod client;
pub mod encoding;
pub mod endpoint;
pub mod error;
pub mod extract;
pub mod mapper;
pub mod params;
pub mod request;
pub mod validation;

pub use builder::{AddressingStyle, RequestPathBuilder};
pub use client::S3Client;
pub use endpoint::{Endpoint, resolve_hostname};
pub use error::ClientError;
pub use extract::extract;
pub use mapper::{ResponseDescriptor, ResponseRegistry, map_response};
pub use request::{RequestParams, RequestShape};
pub use validation::is_dns_compatible;
