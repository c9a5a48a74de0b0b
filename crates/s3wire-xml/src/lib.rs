//! S3 XML decoding for s3wire.
//!
//! S3 uses the RestXml protocol with `noErrorWrapping: true`: successful
//! responses carry an operation-specific root element (for example
//! `<CompleteMultipartUploadResult>`), while failures carry a flat `<Error>`
//! root. This crate turns response bodies into a small element tree that the
//! per-operation mappers in `s3wire-core` read fields out of.
//!
//! # Key components
//!
//! - [`parse_document`] and [`XmlElement`] for decoding any response body
//! - [`parse_error_document`] and [`ErrorDocument`] for recognizing `<Error>` bodies
//! - [`XmlError`] for malformed input
//!
//! Element names are compared by local name, so namespace prefixes and the
//! `http://s3.amazonaws.com/doc/2006-03-01/` default namespace are ignored.

pub mod document;
pub mod error;
pub mod error_document;

pub use document::{XmlElement, parse_document};
pub use error::XmlError;
pub use error_document::{ErrorDocument, parse_error_document};
