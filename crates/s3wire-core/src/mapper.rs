//! Per-operation response mapping.
//!
//! Each operation has a static [`ResponseDescriptor`] naming where its output
//! fields live: elements of the XML body, the root element's own text,
//! response headers, or repeated elements collected into records. The mapper
//! walks the descriptor against a decoded body and produces a
//! [`SuccessResult`].

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::HeaderMap;
use s3wire_model::{FieldValue, Record, S3Operation, SuccessResult};
use s3wire_xml::{XmlElement, XmlError, parse_document};

use crate::extract::{REQUEST_ID_HEADER, header_str};

/// Output field that receives the `x-amz-request-id` header.
pub const REQUEST_ID_FIELD: &str = "RequestId";

/// Where a field value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// Text of the element at a slash-separated path under the root.
    Element(&'static str),
    /// Text of the root element itself.
    RootText,
    /// A response header, lowercase.
    Header(&'static str),
    /// Every element at a path under the root, one record each.
    Repeated(&'static str),
}

/// Type a field value is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text as-is.
    String,
    /// Signed 64-bit integer.
    Integer,
    /// `true` or `false`, case-insensitive.
    Boolean,
    /// RFC 3339 or HTTP-date timestamp.
    Timestamp,
    /// Flattened records of a repeated element.
    Records,
}

/// Value used when a field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// A boolean default.
    Boolean(bool),
    /// An integer default.
    Integer(i64),
}

impl From<FieldDefault> for FieldValue {
    fn from(default: FieldDefault) -> Self {
        match default {
            FieldDefault::Boolean(b) => Self::Boolean(b),
            FieldDefault::Integer(n) => Self::Integer(n),
        }
    }
}

/// One output field of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Output field name.
    pub target: &'static str,
    /// Where the value comes from.
    pub source: FieldSource,
    /// How the value is converted.
    pub kind: FieldKind,
    /// Value used when the source is absent or unparseable.
    pub default: Option<FieldDefault>,
}

/// Response layout of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseDescriptor {
    /// The operation described.
    pub operation: S3Operation,
    /// Expected root element of the body, if the body is XML.
    pub root: Option<&'static str>,
    /// Mapped fields.
    pub fields: &'static [FieldMapping],
    /// Field receiving the raw body, for operations whose body is object content.
    pub payload: Option<&'static str>,
}

const fn text(target: &'static str, path: &'static str) -> FieldMapping {
    FieldMapping {
        target,
        source: FieldSource::Element(path),
        kind: FieldKind::String,
        default: None,
    }
}

const fn int(target: &'static str, path: &'static str) -> FieldMapping {
    FieldMapping {
        target,
        source: FieldSource::Element(path),
        kind: FieldKind::Integer,
        default: None,
    }
}

const fn truncated() -> FieldMapping {
    FieldMapping {
        target: "IsTruncated",
        source: FieldSource::Element("IsTruncated"),
        kind: FieldKind::Boolean,
        default: Some(FieldDefault::Boolean(false)),
    }
}

const fn records(target: &'static str, path: &'static str) -> FieldMapping {
    FieldMapping {
        target,
        source: FieldSource::Repeated(path),
        kind: FieldKind::Records,
        default: None,
    }
}

const fn header(target: &'static str, name: &'static str, kind: FieldKind) -> FieldMapping {
    FieldMapping {
        target,
        source: FieldSource::Header(name),
        kind,
        default: None,
    }
}

const VERSION_ID: FieldMapping = header("VersionId", "x-amz-version-id", FieldKind::String);

const OBJECT_HEADERS: &[FieldMapping] = &[
    header("ContentLength", "content-length", FieldKind::Integer),
    header("ContentType", "content-type", FieldKind::String),
    header("ETag", "etag", FieldKind::String),
    header("LastModified", "last-modified", FieldKind::Timestamp),
    header("CacheControl", "cache-control", FieldKind::String),
    header("ContentEncoding", "content-encoding", FieldKind::String),
    header("ContentDisposition", "content-disposition", FieldKind::String),
    header("ContentRange", "content-range", FieldKind::String),
    header("AcceptRanges", "accept-ranges", FieldKind::String),
    VERSION_ID,
    header("DeleteMarker", "x-amz-delete-marker", FieldKind::Boolean),
    header("StorageClass", "x-amz-storage-class", FieldKind::String),
];

const fn headers_only(operation: S3Operation, fields: &'static [FieldMapping]) -> ResponseDescriptor {
    ResponseDescriptor {
        operation,
        root: None,
        fields,
        payload: None,
    }
}

const fn xml(
    operation: S3Operation,
    root: &'static str,
    fields: &'static [FieldMapping],
) -> ResponseDescriptor {
    ResponseDescriptor {
        operation,
        root: Some(root),
        fields,
        payload: None,
    }
}

const LIST_BUCKETS: ResponseDescriptor = xml(
    S3Operation::ListBuckets,
    "ListAllMyBucketsResult",
    &[
        records("Buckets", "Buckets/Bucket"),
        text("OwnerId", "Owner/ID"),
        text("OwnerDisplayName", "Owner/DisplayName"),
        text("ContinuationToken", "ContinuationToken"),
        text("Prefix", "Prefix"),
    ],
);

const CREATE_BUCKET: ResponseDescriptor = headers_only(
    S3Operation::CreateBucket,
    &[header("Location", "location", FieldKind::String)],
);

const DELETE_BUCKET: ResponseDescriptor = headers_only(S3Operation::DeleteBucket, &[]);

const HEAD_BUCKET: ResponseDescriptor = headers_only(
    S3Operation::HeadBucket,
    &[header("BucketRegion", "x-amz-bucket-region", FieldKind::String)],
);

const GET_BUCKET_LOCATION: ResponseDescriptor = xml(
    S3Operation::GetBucketLocation,
    "LocationConstraint",
    &[FieldMapping {
        target: "LocationConstraint",
        source: FieldSource::RootText,
        kind: FieldKind::String,
        default: None,
    }],
);

const GET_BUCKET_VERSIONING: ResponseDescriptor = xml(
    S3Operation::GetBucketVersioning,
    "VersioningConfiguration",
    &[text("Status", "Status"), text("MfaDelete", "MfaDelete")],
);

const ACL_FIELDS: &[FieldMapping] = &[
    text("OwnerId", "Owner/ID"),
    text("OwnerDisplayName", "Owner/DisplayName"),
    records("Grants", "AccessControlList/Grant"),
];

const GET_BUCKET_ACL: ResponseDescriptor =
    xml(S3Operation::GetBucketAcl, "AccessControlPolicy", ACL_FIELDS);

const GET_OBJECT_ACL: ResponseDescriptor =
    xml(S3Operation::GetObjectAcl, "AccessControlPolicy", ACL_FIELDS);

const LIST_OBJECTS: ResponseDescriptor = xml(
    S3Operation::ListObjects,
    "ListBucketResult",
    &[
        text("Name", "Name"),
        text("Prefix", "Prefix"),
        text("Marker", "Marker"),
        text("NextMarker", "NextMarker"),
        int("MaxKeys", "MaxKeys"),
        text("Delimiter", "Delimiter"),
        text("EncodingType", "EncodingType"),
        truncated(),
        records("Contents", "Contents"),
        records("CommonPrefixes", "CommonPrefixes"),
    ],
);

const LIST_OBJECTS_V2: ResponseDescriptor = xml(
    S3Operation::ListObjectsV2,
    "ListBucketResult",
    &[
        text("Name", "Name"),
        text("Prefix", "Prefix"),
        int("KeyCount", "KeyCount"),
        int("MaxKeys", "MaxKeys"),
        text("Delimiter", "Delimiter"),
        text("ContinuationToken", "ContinuationToken"),
        text("NextContinuationToken", "NextContinuationToken"),
        text("StartAfter", "StartAfter"),
        text("EncodingType", "EncodingType"),
        truncated(),
        records("Contents", "Contents"),
        records("CommonPrefixes", "CommonPrefixes"),
    ],
);

const LIST_OBJECT_VERSIONS: ResponseDescriptor = xml(
    S3Operation::ListObjectVersions,
    "ListVersionsResult",
    &[
        text("Name", "Name"),
        text("Prefix", "Prefix"),
        text("KeyMarker", "KeyMarker"),
        text("VersionIdMarker", "VersionIdMarker"),
        text("NextKeyMarker", "NextKeyMarker"),
        text("NextVersionIdMarker", "NextVersionIdMarker"),
        int("MaxKeys", "MaxKeys"),
        text("Delimiter", "Delimiter"),
        text("EncodingType", "EncodingType"),
        truncated(),
        records("Versions", "Version"),
        records("DeleteMarkers", "DeleteMarker"),
        records("CommonPrefixes", "CommonPrefixes"),
    ],
);

const PUT_OBJECT: ResponseDescriptor = headers_only(
    S3Operation::PutObject,
    &[
        header("ETag", "etag", FieldKind::String),
        VERSION_ID,
        header(
            "ServerSideEncryption",
            "x-amz-server-side-encryption",
            FieldKind::String,
        ),
        header("Expiration", "x-amz-expiration", FieldKind::String),
    ],
);

const GET_OBJECT: ResponseDescriptor = ResponseDescriptor {
    operation: S3Operation::GetObject,
    root: None,
    fields: OBJECT_HEADERS,
    payload: Some("Body"),
};

const HEAD_OBJECT: ResponseDescriptor = headers_only(S3Operation::HeadObject, OBJECT_HEADERS);

const DELETE_OBJECT: ResponseDescriptor = headers_only(
    S3Operation::DeleteObject,
    &[
        header("DeleteMarker", "x-amz-delete-marker", FieldKind::Boolean),
        VERSION_ID,
    ],
);

const COPY_OBJECT: ResponseDescriptor = xml(
    S3Operation::CopyObject,
    "CopyObjectResult",
    &[
        text("ETag", "ETag"),
        FieldMapping {
            target: "LastModified",
            source: FieldSource::Element("LastModified"),
            kind: FieldKind::Timestamp,
            default: None,
        },
        VERSION_ID,
        header(
            "CopySourceVersionId",
            "x-amz-copy-source-version-id",
            FieldKind::String,
        ),
    ],
);

const GET_OBJECT_TAGGING: ResponseDescriptor = xml(
    S3Operation::GetObjectTagging,
    "Tagging",
    &[records("TagSet", "TagSet/Tag"), VERSION_ID],
);

const DELETE_OBJECT_TAGGING: ResponseDescriptor =
    headers_only(S3Operation::DeleteObjectTagging, &[VERSION_ID]);

const CREATE_MULTIPART_UPLOAD: ResponseDescriptor = xml(
    S3Operation::CreateMultipartUpload,
    "InitiateMultipartUploadResult",
    &[
        text("Bucket", "Bucket"),
        text("Key", "Key"),
        text("UploadId", "UploadId"),
    ],
);

const UPLOAD_PART: ResponseDescriptor = headers_only(
    S3Operation::UploadPart,
    &[header("ETag", "etag", FieldKind::String)],
);

const COMPLETE_MULTIPART_UPLOAD: ResponseDescriptor = xml(
    S3Operation::CompleteMultipartUpload,
    "CompleteMultipartUploadResult",
    &[
        text("Location", "Location"),
        text("Bucket", "Bucket"),
        text("Key", "Key"),
        text("ETag", "ETag"),
        VERSION_ID,
    ],
);

const ABORT_MULTIPART_UPLOAD: ResponseDescriptor =
    headers_only(S3Operation::AbortMultipartUpload, &[]);

const LIST_PARTS: ResponseDescriptor = xml(
    S3Operation::ListParts,
    "ListPartsResult",
    &[
        text("Bucket", "Bucket"),
        text("Key", "Key"),
        text("UploadId", "UploadId"),
        int("PartNumberMarker", "PartNumberMarker"),
        int("NextPartNumberMarker", "NextPartNumberMarker"),
        int("MaxParts", "MaxParts"),
        text("StorageClass", "StorageClass"),
        truncated(),
        records("Parts", "Part"),
    ],
);

const LIST_MULTIPART_UPLOADS: ResponseDescriptor = xml(
    S3Operation::ListMultipartUploads,
    "ListMultipartUploadsResult",
    &[
        text("Bucket", "Bucket"),
        text("KeyMarker", "KeyMarker"),
        text("UploadIdMarker", "UploadIdMarker"),
        text("NextKeyMarker", "NextKeyMarker"),
        text("NextUploadIdMarker", "NextUploadIdMarker"),
        text("Prefix", "Prefix"),
        text("Delimiter", "Delimiter"),
        int("MaxUploads", "MaxUploads"),
        truncated(),
        records("Uploads", "Upload"),
        records("CommonPrefixes", "CommonPrefixes"),
    ],
);

/// Static lookup from operation to response descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseRegistry;

impl ResponseRegistry {
    /// Descriptor for an operation.
    #[must_use]
    pub fn get(operation: S3Operation) -> &'static ResponseDescriptor {
        descriptor(operation)
    }

    /// Descriptor for an operation name such as `"ListObjectsV2"`.
    #[must_use]
    pub fn lookup(name: &str) -> Option<&'static ResponseDescriptor> {
        S3Operation::from_name(name).map(descriptor)
    }
}

/// Descriptor for an operation.
#[must_use]
pub fn descriptor(operation: S3Operation) -> &'static ResponseDescriptor {
    match operation {
        S3Operation::ListBuckets => &LIST_BUCKETS,
        S3Operation::CreateBucket => &CREATE_BUCKET,
        S3Operation::DeleteBucket => &DELETE_BUCKET,
        S3Operation::HeadBucket => &HEAD_BUCKET,
        S3Operation::GetBucketLocation => &GET_BUCKET_LOCATION,
        S3Operation::GetBucketVersioning => &GET_BUCKET_VERSIONING,
        S3Operation::GetBucketAcl => &GET_BUCKET_ACL,
        S3Operation::ListObjects => &LIST_OBJECTS,
        S3Operation::ListObjectsV2 => &LIST_OBJECTS_V2,
        S3Operation::ListObjectVersions => &LIST_OBJECT_VERSIONS,
        S3Operation::PutObject => &PUT_OBJECT,
        S3Operation::GetObject => &GET_OBJECT,
        S3Operation::HeadObject => &HEAD_OBJECT,
        S3Operation::DeleteObject => &DELETE_OBJECT,
        S3Operation::CopyObject => &COPY_OBJECT,
        S3Operation::GetObjectAcl => &GET_OBJECT_ACL,
        S3Operation::GetObjectTagging => &GET_OBJECT_TAGGING,
        S3Operation::DeleteObjectTagging => &DELETE_OBJECT_TAGGING,
        S3Operation::CreateMultipartUpload => &CREATE_MULTIPART_UPLOAD,
        S3Operation::UploadPart => &UPLOAD_PART,
        S3Operation::CompleteMultipartUpload => &COMPLETE_MULTIPART_UPLOAD,
        S3Operation::AbortMultipartUpload => &ABORT_MULTIPART_UPLOAD,
        S3Operation::ListParts => &LIST_PARTS,
        S3Operation::ListMultipartUploads => &LIST_MULTIPART_UPLOADS,
    }
}

/// Map a successful response into output fields.
///
/// Absent and empty values are left out, except for fields with a default.
/// Values that do not parse as their kind are left out with a warning.
///
/// # Errors
///
/// Returns `XmlError` if the descriptor expects an XML body and the body is
/// malformed or has a different root element.
pub fn map_response(
    descriptor: &ResponseDescriptor,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<SuccessResult, XmlError> {
    let root = match descriptor.root {
        Some(expected) => decode_root(descriptor.operation, expected, &body)?,
        None => None,
    };

    let mut result = SuccessResult::new();
    for field in descriptor.fields {
        let value = read_field(descriptor.operation, field, root.as_ref(), headers);
        match (value, field.default) {
            (Some(value), _) => result.insert(field.target, value),
            (None, Some(default)) => result.insert(field.target, default),
            (None, None) => {}
        }
    }

    if let Some(payload) = descriptor.payload {
        result.insert(payload, FieldValue::Bytes(body));
    }

    if let Some(request_id) = header_str(headers, REQUEST_ID_HEADER) {
        result.insert(REQUEST_ID_FIELD, request_id);
    }

    Ok(result)
}

/// Decode the body and check its root element. A blank body has no root.
fn decode_root(
    operation: S3Operation,
    expected: &str,
    body: &[u8],
) -> Result<Option<XmlElement>, XmlError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!(operation = %operation, "response has no XML body to map");
        return Ok(None);
    }
    let root = parse_document(body)?;
    if root.name != expected {
        return Err(XmlError::UnexpectedElement(format!(
            "expected <{expected}>, found <{}>",
            root.name
        )));
    }
    Ok(Some(root))
}

fn read_field(
    operation: S3Operation,
    field: &FieldMapping,
    root: Option<&XmlElement>,
    headers: &HeaderMap,
) -> Option<FieldValue> {
    let raw = match field.source {
        FieldSource::Element(path) => root.and_then(|r| r.text_at(path)).map(ToOwned::to_owned),
        FieldSource::RootText => root
            .filter(|r| r.is_leaf() && !r.text.is_empty())
            .map(|r| r.text.clone()),
        FieldSource::Header(name) => header_str(headers, name),
        FieldSource::Repeated(path) => {
            return root
                .map(|r| collect_records(r, path))
                .filter(|records| !records.is_empty())
                .map(FieldValue::Records);
        }
    }?;

    let value = convert(&raw, field.kind);
    if value.is_none() {
        tracing::warn!(
            operation = %operation,
            field = field.target,
            value = %raw,
            kind = ?field.kind,
            "dropping field that failed to parse"
        );
    }
    value
}

fn convert(raw: &str, kind: FieldKind) -> Option<FieldValue> {
    match kind {
        FieldKind::String => Some(FieldValue::String(raw.to_owned())),
        FieldKind::Integer => raw.trim().parse::<i64>().ok().map(FieldValue::Integer),
        FieldKind::Boolean => parse_bool(raw).map(FieldValue::Boolean),
        FieldKind::Timestamp => parse_timestamp(raw).map(FieldValue::Timestamp),
        FieldKind::Records => None,
    }
}

fn collect_records(root: &XmlElement, path: &str) -> Vec<Record> {
    root.find_all(path)
        .into_iter()
        .map(|element| {
            if element.is_leaf() {
                let mut record = Record::new();
                if !element.text.is_empty() {
                    record.insert(element.name.clone(), element.text.clone());
                }
                record
            } else {
                element
                    .leaves()
                    .into_iter()
                    .map(|(path, text)| (path, text.to_owned()))
                    .collect()
            }
        })
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parse an XML (RFC 3339) or header (HTTP-date) timestamp.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%a, %d %b %Y %H:%M:%S GMT") {
        return Some(dt.and_utc());
    }
    None
}
