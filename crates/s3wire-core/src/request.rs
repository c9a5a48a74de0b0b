//! Per-call request inputs and the request shape handed to the transport.

use std::collections::BTreeMap;

use bytes::Bytes;
use http::{HeaderMap, Method};

use crate::error::ClientError;

/// Caller-supplied inputs for one request.
///
/// Parameters are keyed by their caller-facing names (`MaxKeys`, `VersionId`,
/// `Range`). Names the operation does not accept are ignored when building.
///
/// # Examples
///
/// ```
/// use s3wire_core::RequestParams;
///
/// let params = RequestParams::object("my-bucket", "photos/cat.jpg")
///     .with_param("VersionId", "3HL4kqtJlcpXroDTDmJ");
/// assert_eq!(params.bucket.as_deref(), Some("my-bucket"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    /// Target bucket, if the operation addresses one.
    pub bucket: Option<String>,
    /// Target object key.
    pub key: Option<String>,
    /// Operation parameters by caller-facing name.
    pub params: BTreeMap<String, String>,
}

impl RequestParams {
    /// Parameters for a service-level request (no bucket).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters addressing a bucket.
    #[must_use]
    pub fn bucket(bucket: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket.into()),
            ..Self::default()
        }
    }

    /// Parameters addressing an object.
    #[must_use]
    pub fn object(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket.into()),
            key: Some(key.into()),
            params: BTreeMap::new(),
        }
    }

    /// Add or replace a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// A fully addressed request, ready for signing and sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestShape {
    /// HTTP method fixed by the operation.
    pub method: Method,
    /// Target host. Carries the bucket label when virtual-hosted.
    pub hostname: String,
    /// Absolute, escaped path, including `?query` when present.
    pub path: String,
    /// Query entries in wire order, values percent-encoded. A bare
    /// sub-resource key has an empty value.
    pub query_parameters: Vec<(String, String)>,
    /// Headers derived from header-located parameters.
    pub headers: HeaderMap,
    /// Whether the request goes over TLS.
    pub ssl_enabled: bool,
}

impl RequestShape {
    /// URI scheme for the request.
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        if self.ssl_enabled { "https" } else { "http" }
    }

    /// The query string without the leading `?`, if any.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        self.path.split_once('?').map(|(_, query)| query)
    }

    /// The full request URI.
    #[must_use]
    pub fn uri(&self) -> String {
        format!("{}://{}{}", self.scheme(), self.hostname, self.path)
    }

    /// Convert into an `http::Request` with the given body.
    ///
    /// The `host` header is set from [`hostname`](Self::hostname).
    pub fn to_http_request(&self, body: Bytes) -> Result<http::Request<Bytes>, ClientError> {
        let uri: http::Uri = self.uri().parse()?;
        let mut request = http::Request::builder()
            .method(self.method.clone())
            .uri(uri)
            .header(http::header::HOST, self.hostname.as_str())
            .body(body)?;
        request.headers_mut().extend(self.headers.clone());
        Ok(request)
    }
}
