//! Error classification of raw HTTP responses.
//!
//! Three shapes of failure are recognized:
//!
//! 1. A non-2xx response with no body (typical for `HEAD`). The code comes from
//!    the status fallback table.
//! 2. Any response whose body is an `<Error>` document. This includes `200 OK`
//!    responses, which S3 returns for late failures in `CopyObject` and
//!    `CompleteMultipartUpload`.
//! 3. A non-2xx response with some other body (a proxy page, say). The status
//!    fallback table applies, as for a bodyless response.
//!
//! Everything else is a success and goes on to the operation's mapper.

use http::HeaderMap;
use s3wire_model::{ErrorResult, S3ErrorCode};
use s3wire_xml::parse_error_document;

/// Request ID header.
pub const REQUEST_ID_HEADER: &str = "x-amz-request-id";

/// Extended request ID header.
pub const HOST_ID_HEADER: &str = "x-amz-id-2";

/// Bucket region header, sent with redirects and `HeadBucket`.
pub const BUCKET_REGION_HEADER: &str = "x-amz-bucket-region";

/// Returns true for a 2xx status.
#[must_use]
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classify a response. `None` means the response carries no error.
///
/// # Examples
///
/// ```
/// use http::HeaderMap;
/// use s3wire_core::extract::extract;
/// use s3wire_model::S3ErrorCode;
///
/// let err = extract(404, &HeaderMap::new(), b"").expect("bodyless 404 is an error");
/// assert_eq!(err.code, S3ErrorCode::NotFound);
/// assert!(err.message.is_none());
///
/// assert!(extract(200, &HeaderMap::new(), b"").is_none());
/// ```
#[must_use]
pub fn extract(status: u16, headers: &HeaderMap, body: &[u8]) -> Option<ErrorResult> {
    let error = if is_blank(body) {
        if is_success_status(status) {
            return None;
        }
        ErrorResult::new(S3ErrorCode::from_status(status), status)
    } else if let Some(doc) = parse_error_document(body) {
        let code = doc
            .code
            .as_deref()
            .map_or_else(|| S3ErrorCode::from_status(status), S3ErrorCode::from_code);
        let mut error = ErrorResult::new(code, status);
        error.message = doc.message;
        error.resource = doc.resource;
        error.request_id = doc.request_id;
        error.host_id = doc.host_id;
        error
    } else if is_success_status(status) {
        return None;
    } else {
        ErrorResult::new(S3ErrorCode::from_status(status), status)
    };

    let error = with_response_ids(error, headers);
    tracing::debug!(
        code = %error.code,
        status = error.status_code,
        request_id = ?error.request_id,
        retryable = error.retryable,
        "classified error response"
    );
    Some(error)
}

/// Fill request ID, host ID and region from headers where not already set.
#[must_use]
pub fn with_response_ids(mut error: ErrorResult, headers: &HeaderMap) -> ErrorResult {
    if error.request_id.is_none() {
        error.request_id = header_str(headers, REQUEST_ID_HEADER);
    }
    if error.host_id.is_none() {
        error.host_id = header_str(headers, HOST_ID_HEADER);
    }
    if error.region.is_none() {
        error.region = header_str(headers, BUCKET_REGION_HEADER);
    }
    error
}

/// Extract a header value as a string. Non-UTF-8 and empty values are absent.
#[must_use]
pub fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}
