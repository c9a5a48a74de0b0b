//! Normalized response outcomes.
//!
//! Every raw HTTP response is turned into exactly one [`ResponseOutcome`]:
//! a [`SuccessResult`] holding the mapped output fields, or an [`ErrorResult`]
//! describing a protocol-level failure.

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::error::S3ErrorCode;

/// One entry of a repeated XML element, flattened to `leaf path -> text`.
pub type Record = BTreeMap<String, String>;

/// A typed output field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain text.
    String(String),
    /// Integer value (sizes, counts, markers).
    Integer(i64),
    /// Boolean value.
    Boolean(bool),
    /// Timestamp, normalized to UTC.
    Timestamp(DateTime<Utc>),
    /// Raw payload bytes.
    Bytes(#[serde(serialize_with = "serialize_payload")] Bytes),
    /// Repeated elements.
    Records(Vec<Record>),
}

fn serialize_payload<S: Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bytes(data)
}

impl FieldValue {
    /// Returns the text if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a timestamp value.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Returns the payload if this is a bytes value.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the records if this is a records value.
    #[must_use]
    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            Self::Records(r) => Some(r),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// A successful response mapped into output fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuccessResult {
    /// Output fields keyed by name. Absent optional fields are not present.
    pub data: BTreeMap<String, FieldValue>,
}

impl SuccessResult {
    /// Create an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.data.insert(name.into(), value.into());
    }

    /// Get a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.data.get(name)
    }

    /// Get a string field.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// Get an integer field.
    #[must_use]
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_i64)
    }

    /// Get a boolean field.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    /// Get a timestamp field.
    #[must_use]
    pub fn get_timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get(name).and_then(FieldValue::as_timestamp)
    }

    /// Get a records field.
    #[must_use]
    pub fn get_records(&self, name: &str) -> Option<&[Record]> {
        self.get(name).and_then(FieldValue::as_records)
    }

    /// Get the raw payload field.
    #[must_use]
    pub fn get_bytes(&self, name: &str) -> Option<&Bytes> {
        self.get(name).and_then(FieldValue::as_bytes)
    }

    /// The `RequestId` merged from the `x-amz-request-id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.get_str("RequestId")
    }

    /// Returns true if no fields were mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of mapped fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// A normalized protocol error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResult {
    /// Server-supplied or canonical error code.
    pub code: S3ErrorCode,
    /// Human-readable message. Always `None` for bodyless responses.
    pub message: Option<String>,
    /// HTTP status of the response.
    pub status_code: u16,
    /// Request ID, from the error document or the `x-amz-request-id` header.
    pub request_id: Option<String>,
    /// Extended request ID, from the error document or the `x-amz-id-2` header.
    pub host_id: Option<String>,
    /// Resource named by the error document.
    pub resource: Option<String>,
    /// Bucket region from the `x-amz-bucket-region` header.
    pub region: Option<String>,
    /// Whether the failure is transient and may be retried by the caller.
    pub retryable: bool,
}

impl ErrorResult {
    /// Create an error for the given code and status. `retryable` follows the code.
    #[must_use]
    pub fn new(code: S3ErrorCode, status_code: u16) -> Self {
        Self {
            retryable: code.is_retryable(),
            code,
            message: None,
            status_code,
            request_id: None,
            host_id: None,
            resource: None,
            region: None,
        }
    }

    /// Set the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S3 error {} (HTTP {})", self.code, self.status_code)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " [request_id={request_id}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResult {}

/// The normalized outcome of one response. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseOutcome {
    /// The operation succeeded.
    Success(SuccessResult),
    /// The service reported an error.
    Error(ErrorResult),
}

impl ResponseOutcome {
    /// Returns true for the success variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true for the error variant.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Borrow the success payload.
    #[must_use]
    pub fn success(&self) -> Option<&SuccessResult> {
        match self {
            Self::Success(s) => Some(s),
            Self::Error(_) => None,
        }
    }

    /// Borrow the error payload.
    #[must_use]
    pub fn error(&self) -> Option<&ErrorResult> {
        match self {
            Self::Error(e) => Some(e),
            Self::Success(_) => None,
        }
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<SuccessResult, ErrorResult> {
        match self {
            Self::Success(s) => Ok(s),
            Self::Error(e) => Err(e),
        }
    }
}

impl From<ErrorResult> for ResponseOutcome {
    fn from(err: ErrorResult) -> Self {
        Self::Error(err)
    }
}

impl From<SuccessResult> for ResponseOutcome {
    fn from(ok: SuccessResult) -> Self {
        Self::Success(ok)
    }
}
