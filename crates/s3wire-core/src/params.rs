//! Per-operation request parameter tables.
//!
//! Callers name parameters the way the S3 API reference does (`MaxKeys`,
//! `VersionId`, `Range`). Each operation maps the names it accepts to a wire
//! location: a query key with the operation's own casing, or a header.
//! Operations that select a sub-resource (`?uploads`, `?list-type=2`) also
//! carry fixed query entries that are emitted before any caller parameter.

use s3wire_model::S3Operation;

/// Where a parameter is placed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// A query string key.
    Query(&'static str),
    /// A request header, lowercase.
    Header(&'static str),
}

/// One accepted caller parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamRule {
    /// Caller-facing parameter name.
    pub name: &'static str,
    /// Wire location.
    pub location: ParamLocation,
}

/// A fixed query entry selecting a sub-resource. `value` is `None` for a bare key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubResource {
    /// Query key.
    pub key: &'static str,
    /// Query value, if any.
    pub value: Option<&'static str>,
}

/// Parameter table of a single operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationParams {
    /// Fixed query entries, emitted first.
    pub sub_resources: &'static [SubResource],
    /// Accepted caller parameters, in wire order.
    pub params: &'static [ParamRule],
}

impl OperationParams {
    /// Look up the rule for a caller-facing parameter name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&'static ParamRule> {
        self.params.iter().find(|r| r.name == name)
    }
}

const fn query(name: &'static str, key: &'static str) -> ParamRule {
    ParamRule {
        name,
        location: ParamLocation::Query(key),
    }
}

const fn header(name: &'static str, header: &'static str) -> ParamRule {
    ParamRule {
        name,
        location: ParamLocation::Header(header),
    }
}

const fn bare(key: &'static str) -> SubResource {
    SubResource { key, value: None }
}

const fn keyed(key: &'static str, value: &'static str) -> SubResource {
    SubResource {
        key,
        value: Some(value),
    }
}

const LIST_BUCKETS: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("BucketRegion", "bucket-region"),
        query("ContinuationToken", "continuation-token"),
        query("MaxBuckets", "max-buckets"),
        query("Prefix", "prefix"),
    ],
};

const CREATE_BUCKET: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        header("ACL", "x-amz-acl"),
        header("ObjectLockEnabledForBucket", "x-amz-bucket-object-lock-enabled"),
        header("ObjectOwnership", "x-amz-object-ownership"),
    ],
};

const EXPECTED_OWNER_ONLY: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[header("ExpectedBucketOwner", "x-amz-expected-bucket-owner")],
};

const GET_BUCKET_LOCATION: OperationParams = OperationParams {
    sub_resources: &[bare("location")],
    params: &[header("ExpectedBucketOwner", "x-amz-expected-bucket-owner")],
};

const GET_BUCKET_VERSIONING: OperationParams = OperationParams {
    sub_resources: &[bare("versioning")],
    params: &[header("ExpectedBucketOwner", "x-amz-expected-bucket-owner")],
};

const GET_BUCKET_ACL: OperationParams = OperationParams {
    sub_resources: &[bare("acl")],
    params: &[header("ExpectedBucketOwner", "x-amz-expected-bucket-owner")],
};

const LIST_OBJECTS: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("Delimiter", "delimiter"),
        query("EncodingType", "encoding-type"),
        query("Marker", "marker"),
        query("MaxKeys", "max-keys"),
        query("Prefix", "prefix"),
        header("RequestPayer", "x-amz-request-payer"),
    ],
};

const LIST_OBJECTS_V2: OperationParams = OperationParams {
    sub_resources: &[keyed("list-type", "2")],
    params: &[
        query("ContinuationToken", "continuation-token"),
        query("Delimiter", "delimiter"),
        query("EncodingType", "encoding-type"),
        query("FetchOwner", "fetch-owner"),
        query("MaxKeys", "max-keys"),
        query("Prefix", "prefix"),
        query("StartAfter", "start-after"),
        header("RequestPayer", "x-amz-request-payer"),
    ],
};

const LIST_OBJECT_VERSIONS: OperationParams = OperationParams {
    sub_resources: &[bare("versions")],
    params: &[
        query("Delimiter", "delimiter"),
        query("EncodingType", "encoding-type"),
        query("KeyMarker", "key-marker"),
        query("MaxKeys", "max-keys"),
        query("Prefix", "prefix"),
        query("VersionIdMarker", "version-id-marker"),
    ],
};

const PUT_OBJECT: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        header("ACL", "x-amz-acl"),
        header("CacheControl", "cache-control"),
        header("ContentDisposition", "content-disposition"),
        header("ContentEncoding", "content-encoding"),
        header("ContentLanguage", "content-language"),
        header("ContentLength", "content-length"),
        header("ContentMD5", "content-md5"),
        header("ContentType", "content-type"),
        header("Expires", "expires"),
        header("IfNoneMatch", "if-none-match"),
        header("ServerSideEncryption", "x-amz-server-side-encryption"),
        header("StorageClass", "x-amz-storage-class"),
        header("Tagging", "x-amz-tagging"),
        header("WebsiteRedirectLocation", "x-amz-website-redirect-location"),
    ],
};

const GET_OBJECT: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("PartNumber", "partNumber"),
        query("ResponseCacheControl", "response-cache-control"),
        query("ResponseContentDisposition", "response-content-disposition"),
        query("ResponseContentEncoding", "response-content-encoding"),
        query("ResponseContentLanguage", "response-content-language"),
        query("ResponseContentType", "response-content-type"),
        query("ResponseExpires", "response-expires"),
        query("VersionId", "versionId"),
        header("IfMatch", "if-match"),
        header("IfModifiedSince", "if-modified-since"),
        header("IfNoneMatch", "if-none-match"),
        header("IfUnmodifiedSince", "if-unmodified-since"),
        header("Range", "range"),
        header("RequestPayer", "x-amz-request-payer"),
    ],
};

const HEAD_OBJECT: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("PartNumber", "partNumber"),
        query("VersionId", "versionId"),
        header("IfMatch", "if-match"),
        header("IfModifiedSince", "if-modified-since"),
        header("IfNoneMatch", "if-none-match"),
        header("IfUnmodifiedSince", "if-unmodified-since"),
        header("Range", "range"),
        header("RequestPayer", "x-amz-request-payer"),
    ],
};

const DELETE_OBJECT: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("VersionId", "versionId"),
        header("BypassGovernanceRetention", "x-amz-bypass-governance-retention"),
        header("MFA", "x-amz-mfa"),
        header("RequestPayer", "x-amz-request-payer"),
    ],
};

const COPY_OBJECT: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        header("ACL", "x-amz-acl"),
        header("CacheControl", "cache-control"),
        header("ContentDisposition", "content-disposition"),
        header("ContentEncoding", "content-encoding"),
        header("ContentType", "content-type"),
        header("CopySource", "x-amz-copy-source"),
        header("CopySourceIfMatch", "x-amz-copy-source-if-match"),
        header("CopySourceIfModifiedSince", "x-amz-copy-source-if-modified-since"),
        header("CopySourceIfNoneMatch", "x-amz-copy-source-if-none-match"),
        header(
            "CopySourceIfUnmodifiedSince",
            "x-amz-copy-source-if-unmodified-since",
        ),
        header("MetadataDirective", "x-amz-metadata-directive"),
        header("ServerSideEncryption", "x-amz-server-side-encryption"),
        header("StorageClass", "x-amz-storage-class"),
        header("Tagging", "x-amz-tagging"),
        header("TaggingDirective", "x-amz-tagging-directive"),
    ],
};

const GET_OBJECT_ACL: OperationParams = OperationParams {
    sub_resources: &[bare("acl")],
    params: &[
        query("VersionId", "versionId"),
        header("RequestPayer", "x-amz-request-payer"),
    ],
};

const OBJECT_TAGGING: OperationParams = OperationParams {
    sub_resources: &[bare("tagging")],
    params: &[
        query("VersionId", "versionId"),
        header("ExpectedBucketOwner", "x-amz-expected-bucket-owner"),
    ],
};

const CREATE_MULTIPART_UPLOAD: OperationParams = OperationParams {
    sub_resources: &[bare("uploads")],
    params: &[
        header("ACL", "x-amz-acl"),
        header("CacheControl", "cache-control"),
        header("ContentDisposition", "content-disposition"),
        header("ContentEncoding", "content-encoding"),
        header("ContentType", "content-type"),
        header("Expires", "expires"),
        header("ServerSideEncryption", "x-amz-server-side-encryption"),
        header("StorageClass", "x-amz-storage-class"),
        header("Tagging", "x-amz-tagging"),
    ],
};

const UPLOAD_PART: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("PartNumber", "partNumber"),
        query("UploadId", "uploadId"),
        header("ContentLength", "content-length"),
        header("ContentMD5", "content-md5"),
    ],
};

const COMPLETE_MULTIPART_UPLOAD: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("UploadId", "uploadId"),
        header("IfNoneMatch", "if-none-match"),
    ],
};

const ABORT_MULTIPART_UPLOAD: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("UploadId", "uploadId"),
        header("RequestPayer", "x-amz-request-payer"),
    ],
};

const LIST_PARTS: OperationParams = OperationParams {
    sub_resources: &[],
    params: &[
        query("MaxParts", "max-parts"),
        query("PartNumberMarker", "part-number-marker"),
        query("UploadId", "uploadId"),
    ],
};

const LIST_MULTIPART_UPLOADS: OperationParams = OperationParams {
    sub_resources: &[bare("uploads")],
    params: &[
        query("Delimiter", "delimiter"),
        query("EncodingType", "encoding-type"),
        query("KeyMarker", "key-marker"),
        query("MaxUploads", "max-uploads"),
        query("Prefix", "prefix"),
        query("UploadIdMarker", "upload-id-marker"),
    ],
};

/// Parameter table for an operation.
#[must_use]
pub fn operation_params(op: S3Operation) -> &'static OperationParams {
    match op {
        S3Operation::ListBuckets => &LIST_BUCKETS,
        S3Operation::CreateBucket => &CREATE_BUCKET,
        S3Operation::DeleteBucket | S3Operation::HeadBucket => &EXPECTED_OWNER_ONLY,
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
        S3Operation::GetObjectTagging | S3Operation::DeleteObjectTagging => &OBJECT_TAGGING,
        S3Operation::CreateMultipartUpload => &CREATE_MULTIPART_UPLOAD,
        S3Operation::UploadPart => &UPLOAD_PART,
        S3Operation::CompleteMultipartUpload => &COMPLETE_MULTIPART_UPLOAD,
        S3Operation::AbortMultipartUpload => &ABORT_MULTIPART_UPLOAD,
        S3Operation::ListParts => &LIST_PARTS,
        S3Operation::ListMultipartUploads => &LIST_MULTIPART_UPLOADS,
    }
}
