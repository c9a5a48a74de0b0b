//! Recognition of S3 `<Error>` documents.
//!
//! S3 formats errors as a flat `<Error>` element without an outer wrapper:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Error>
//!   <Code>NoSuchKey</Code>
//!   <Message>The specified key does not exist.</Message>
//!   <Resource>/mybucket/missing.txt</Resource>
//!   <RequestId>4442587FB7D0A2F9</RequestId>
//!   <HostId>Uuag1LuByRx9e6j5Onimru9pO4ZVKnJ2Qz7/C1NPcfTWAtRPfTaOFg==</HostId>
//! </Error>
//! ```
//!
//! The same shape can arrive with a `200 OK` status (for example from
//! `CompleteMultipartUpload` or `CopyObject`), so recognition depends only on
//! the document, never on the status code.

use crate::document::{XmlElement, parse_document};

/// Local name of the error document root.
pub const ERROR_ROOT: &str = "Error";

/// Fields of a decoded `<Error>` document. Empty elements are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDocument {
    /// `<Code>` text.
    pub code: Option<String>,
    /// `<Message>` text.
    pub message: Option<String>,
    /// `<Resource>` text.
    pub resource: Option<String>,
    /// `<RequestId>` text.
    pub request_id: Option<String>,
    /// `<HostId>` text.
    pub host_id: Option<String>,
}

impl ErrorDocument {
    /// Read the error fields from an already-decoded root element.
    ///
    /// Returns `None` if the root is not `<Error>`.
    #[must_use]
    pub fn from_element(root: &XmlElement) -> Option<Self> {
        if root.name != ERROR_ROOT {
            return None;
        }
        let text = |name: &str| root.text_at(name).map(ToOwned::to_owned);
        Some(Self {
            code: text("Code"),
            message: text("Message"),
            resource: text("Resource"),
            request_id: text("RequestId"),
            host_id: text("HostId"),
        })
    }
}

/// Decode a body as an `<Error>` document.
///
/// Returns `None` when the body is not well-formed XML or its root is anything
/// other than `<Error>`; such bodies belong to the operation's own mapper.
#[must_use]
pub fn parse_error_document(body: &[u8]) -> Option<ErrorDocument> {
    match parse_document(body) {
        Ok(root) => ErrorDocument::from_element(&root),
        Err(e) => {
            tracing::trace!(error = %e, "response body is not an XML document");
            None
        }
    }
}
