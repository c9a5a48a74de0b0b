//! Error codes surfaced in normalized error outcomes.

use std::fmt;

use serde::{Serialize, Serializer};

/// An S3 error code as reported to the caller.
///
/// Codes come from three places: the `<Code>` element of an error document,
/// the fixed status fallback table for bodyless responses, or the client itself
/// when a response cannot be decoded. A bodyless response whose status has no
/// semantic name keeps the bare numeric status as its code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum S3ErrorCode {
    /// AccessDenied error.
    AccessDenied,
    /// BadDigest error.
    BadDigest,
    /// BucketAlreadyExists error.
    BucketAlreadyExists,
    /// BucketAlreadyOwnedByYou error.
    BucketAlreadyOwnedByYou,
    /// BucketNotEmpty error.
    BucketNotEmpty,
    /// EntityTooLarge error.
    EntityTooLarge,
    /// EntityTooSmall error.
    EntityTooSmall,
    /// InternalError error.
    InternalError,
    /// InvalidArgument error.
    InvalidArgument,
    /// InvalidBucketName error.
    InvalidBucketName,
    /// InvalidPart error.
    InvalidPart,
    /// InvalidPartOrder error.
    InvalidPartOrder,
    /// InvalidRange error.
    InvalidRange,
    /// InvalidRequest error.
    InvalidRequest,
    /// MalformedXML error.
    MalformedXML,
    /// MethodNotAllowed error.
    MethodNotAllowed,
    /// NoSuchBucket error.
    NoSuchBucket,
    /// NoSuchKey error.
    NoSuchKey,
    /// NoSuchUpload error.
    NoSuchUpload,
    /// NoSuchVersion error.
    NoSuchVersion,
    /// NotImplemented error.
    NotImplemented,
    /// PermanentRedirect error.
    PermanentRedirect,
    /// PreconditionFailed error.
    PreconditionFailed,
    /// RequestTimeout error.
    RequestTimeout,
    /// RequestTimeTooSkewed error.
    RequestTimeTooSkewed,
    /// ServiceUnavailable error.
    ServiceUnavailable,
    /// SignatureDoesNotMatch error.
    SignatureDoesNotMatch,
    /// SlowDown error.
    SlowDown,
    /// Bodyless HTTP 304 response.
    NotModified,
    /// Bodyless HTTP 403 response.
    Forbidden,
    /// Bodyless HTTP 404 response.
    NotFound,
    /// The response body could not be decoded for the operation.
    XmlParseError,
    /// A bodyless response with no semantic name; carries the HTTP status.
    Status(u16),
    /// A server-supplied code not in the known set.
    Other(String),
}

impl S3ErrorCode {
    /// Parse a code from the `<Code>` element of an error document.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "AccessDenied" => Self::AccessDenied,
            "BadDigest" => Self::BadDigest,
            "BucketAlreadyExists" => Self::BucketAlreadyExists,
            "BucketAlreadyOwnedByYou" => Self::BucketAlreadyOwnedByYou,
            "BucketNotEmpty" => Self::BucketNotEmpty,
            "EntityTooLarge" => Self::EntityTooLarge,
            "EntityTooSmall" => Self::EntityTooSmall,
            "InternalError" => Self::InternalError,
            "InvalidArgument" => Self::InvalidArgument,
            "InvalidBucketName" => Self::InvalidBucketName,
            "InvalidPart" => Self::InvalidPart,
            "InvalidPartOrder" => Self::InvalidPartOrder,
            "InvalidRange" => Self::InvalidRange,
            "InvalidRequest" => Self::InvalidRequest,
            "MalformedXML" => Self::MalformedXML,
            "MethodNotAllowed" => Self::MethodNotAllowed,
            "NoSuchBucket" => Self::NoSuchBucket,
            "NoSuchKey" => Self::NoSuchKey,
            "NoSuchUpload" => Self::NoSuchUpload,
            "NoSuchVersion" => Self::NoSuchVersion,
            "NotImplemented" => Self::NotImplemented,
            "PermanentRedirect" => Self::PermanentRedirect,
            "PreconditionFailed" => Self::PreconditionFailed,
            "RequestTimeout" => Self::RequestTimeout,
            "RequestTimeTooSkewed" => Self::RequestTimeTooSkewed,
            "ServiceUnavailable" => Self::ServiceUnavailable,
            "SignatureDoesNotMatch" => Self::SignatureDoesNotMatch,
            "SlowDown" => Self::SlowDown,
            "NotModified" => Self::NotModified,
            "Forbidden" => Self::Forbidden,
            "NotFound" => Self::NotFound,
            "XmlParseError" => Self::XmlParseError,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Code for a response that carried no body.
    ///
    /// Only 304, 403 and 404 have semantic names; every other status is
    /// surfaced as the number itself so callers can still branch on it.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            304 => Self::NotModified,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            n => Self::Status(n),
        }
    }

    /// Returns the code name, or `None` for a bare numeric status.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        let name = match self {
            Self::AccessDenied => "AccessDenied",
            Self::BadDigest => "BadDigest",
            Self::BucketAlreadyExists => "BucketAlreadyExists",
            Self::BucketAlreadyOwnedByYou => "BucketAlreadyOwnedByYou",
            Self::BucketNotEmpty => "BucketNotEmpty",
            Self::EntityTooLarge => "EntityTooLarge",
            Self::EntityTooSmall => "EntityTooSmall",
            Self::InternalError => "InternalError",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidBucketName => "InvalidBucketName",
            Self::InvalidPart => "InvalidPart",
            Self::InvalidPartOrder => "InvalidPartOrder",
            Self::InvalidRange => "InvalidRange",
            Self::InvalidRequest => "InvalidRequest",
            Self::MalformedXML => "MalformedXML",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::NoSuchBucket => "NoSuchBucket",
            Self::NoSuchKey => "NoSuchKey",
            Self::NoSuchUpload => "NoSuchUpload",
            Self::NoSuchVersion => "NoSuchVersion",
            Self::NotImplemented => "NotImplemented",
            Self::PermanentRedirect => "PermanentRedirect",
            Self::PreconditionFailed => "PreconditionFailed",
            Self::RequestTimeout => "RequestTimeout",
            Self::RequestTimeTooSkewed => "RequestTimeTooSkewed",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::SignatureDoesNotMatch => "SignatureDoesNotMatch",
            Self::SlowDown => "SlowDown",
            Self::NotModified => "NotModified",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::XmlParseError => "XmlParseError",
            Self::Status(_) => return None,
            Self::Other(s) => s,
        };
        Some(name)
    }

    /// Returns the numeric status for a [`Status`](Self::Status) code.
    #[must_use]
    pub fn as_status(&self) -> Option<u16> {
        match self {
            Self::Status(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if the code signals a transient server-side failure.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::InternalError
            | Self::ServiceUnavailable
            | Self::SlowDown
            | Self::RequestTimeout => true,
            Self::Status(n) => *n >= 500,
            _ => false,
        }
    }
}

impl fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(n) => write!(f, "{n}"),
            other => f.write_str(other.as_str().unwrap_or_default()),
        }
    }
}

impl Serialize for S3ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Status(n) => serializer.serialize_u16(*n),
            other => serializer.serialize_str(other.as_str().unwrap_or_default()),
        }
    }
}
