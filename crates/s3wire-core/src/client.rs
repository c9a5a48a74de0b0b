//! Client facade tying addressing and response handling together.

use bytes::Bytes;
use http::HeaderMap;
use s3wire_model::{ClientConfig, ErrorResult, ResponseOutcome, S3ErrorCode, S3Operation};

use crate::builder::RequestPathBuilder;
use crate::endpoint::Endpoint;
use crate::extract::{extract, is_success_status, with_response_ids};
use crate::mapper::{descriptor, map_response};
use crate::request::{RequestParams, RequestShape};

/// An S3 client bound to one configuration.
///
/// The client holds no mutable state. It may be shared freely across threads;
/// the transport that actually sends requests lives outside it.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use http::HeaderMap;
/// use s3wire_core::{RequestParams, S3Client};
/// use s3wire_model::{ClientConfig, S3Operation};
///
/// let client = S3Client::new(ClientConfig::default());
/// let shape = client.build_request(
///     S3Operation::GetObject,
///     &RequestParams::object("my-bucket", "notes/todo.txt"),
/// );
/// assert_eq!(shape.hostname, "my-bucket.s3.amazonaws.com");
/// assert_eq!(shape.path, "/notes/todo.txt");
///
/// let outcome = client.handle_response(S3Operation::HeadObject, 404, &HeaderMap::new(), Bytes::new());
/// assert!(outcome.is_error());
/// ```
#[derive(Debug, Clone)]
pub struct S3Client {
    config: ClientConfig,
    endpoint: Endpoint,
}

impl S3Client {
    /// Create a client, resolving its endpoint once.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let endpoint = Endpoint::from_config(&config);
        Self { config, endpoint }
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The resolved base endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Address a request for an operation.
    #[must_use]
    pub fn build_request(&self, operation: S3Operation, params: &RequestParams) -> RequestShape {
        RequestPathBuilder::new(
            &self.endpoint.hostname,
            self.config.ssl_enabled,
            self.config.force_path_style,
        )
        .build(
            operation,
            params.bucket.as_deref(),
            params.key.as_deref(),
            &params.params,
        )
    }

    /// Normalize a raw response into an outcome.
    ///
    /// Error detection runs first. For operations whose body is object
    /// content, a 2xx body is never inspected for an `<Error>` document.
    #[must_use]
    pub fn handle_response(
        &self,
        operation: S3Operation,
        status: u16,
        headers: &HeaderMap,
        body: Bytes,
    ) -> ResponseOutcome {
        let descriptor = descriptor(operation);
        let raw_payload = descriptor.payload.is_some() && is_success_status(status);

        if !raw_payload {
            if let Some(error) = extract(status, headers, &body) {
                return ResponseOutcome::Error(error);
            }
        }

        match map_response(descriptor, headers, body) {
            Ok(result) => {
                tracing::debug!(
                    operation = %operation,
                    status,
                    fields = result.len(),
                    "mapped response"
                );
                ResponseOutcome::Success(result)
            }
            Err(e) => {
                tracing::warn!(operation = %operation, status, error = %e, "failed to decode response body");
                let error = ErrorResult::new(S3ErrorCode::XmlParseError, status)
                    .with_message(e.to_string());
                ResponseOutcome::Error(with_response_ids(error, headers))
            }
        }
    }

    /// Normalize an `http::Response`.
    #[must_use]
    pub fn handle_http_response(
        &self,
        operation: S3Operation,
        response: &http::Response<Bytes>,
    ) -> ResponseOutcome {
        self.handle_response(
            operation,
            response.status().as_u16(),
            response.headers(),
            response.body().clone(),
        )
    }
}
